//! Nominatim Address Parser
//!
//! Resolves free-text addresses against a Nominatim-compatible search API.

use crate::domain::entities::GeocodeReport;
use crate::domain::ports::FormatParser;
use crate::domain::value_objects::{Coordinate, NodeId};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Parser for the `address` format.
///
/// Transport failures, non-success statuses and unreadable bodies are
/// reported as geocoding errors; the parser never faults on them. Request
/// timeouts are enforced by the HTTP client.
pub struct NominatimAddressParser {
    client: reqwest::Client,
    base_url: String,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
    osm_type: Option<String>,
    osm_id: Option<u64>,
}

impl NominatimAddressParser {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
        max_results: usize,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_results: max_results.max(1),
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, String> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "jsonv2")])
            .query(&[("limit", self.max_results)])
            .send()
            .await
            .map_err(|e| format!("geocoder request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("geocoder returned status {}", status));
        }

        response
            .json::<Vec<SearchHit>>()
            .await
            .map_err(|e| format!("failed to parse geocoder response: {}", e))
    }
}

#[async_trait]
impl FormatParser for NominatimAddressParser {
    async fn parse(&self, raw_reference: &str) -> anyhow::Result<GeocodeReport> {
        let query = raw_reference.trim();
        if query.is_empty() {
            return Ok(GeocodeReport::failure("address is blank"));
        }

        let hits = match self.search(query).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!("address lookup for '{}' failed: {}", query, e);
                return Ok(GeocodeReport::failure(e));
            }
        };

        let Some(best) = hits.first() else {
            return Ok(GeocodeReport::failure(format!(
                "no match for address '{}'",
                query
            )));
        };

        let (lat, lon) = match (best.lat.parse::<f64>(), best.lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => (lat, lon),
            _ => {
                return Ok(GeocodeReport::failure(format!(
                    "geocoder returned invalid coordinates '{}', '{}'",
                    best.lat, best.lon
                )))
            }
        };

        let node = match (&best.osm_type, best.osm_id) {
            (Some(kind), Some(id)) => Some(NodeId::new(format!("{}/{}", kind, id))),
            _ => None,
        };

        let mut report = GeocodeReport::success(
            best.display_name.clone(),
            vec![Coordinate::from_lat_lon(lat, lon)],
        )
        .with_nodes(node, None);

        if hits.len() > 1 {
            report.push_warning(format!(
                "{} candidates matched '{}'; using the best match",
                hits.len(),
                query
            ));
        }

        Ok(report)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parser_for(server: &MockServer) -> NominatimAddressParser {
        NominatimAddressParser::new(server.uri(), Duration::from_secs(5), "locref-test", 3).unwrap()
    }

    #[tokio::test]
    async fn test_single_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "10 Downing Street, London"))
            .and(query_param("format", "jsonv2"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "lat": "51.5033635",
                    "lon": "-0.1276248",
                    "display_name": "10 Downing Street, Westminster, London, SW1A 2AA, United Kingdom",
                    "osm_type": "way",
                    "osm_id": 1879842
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let report = parser_for(&server)
            .parse("  10 Downing Street, London ")
            .await
            .unwrap();

        assert!(!report.has_errors());
        assert_eq!(
            report.coords(),
            &[Coordinate::from_lat_lon(51.5033635, -0.1276248)]
        );
        assert!(report
            .formatted_location_reference()
            .starts_with("10 Downing Street, Westminster"));
        assert_eq!(report.from_node(), Some(&NodeId::new("way/1879842")));
        assert!(report.to_node().is_none());
        assert!(report.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_multiple_matches_warn() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "lat": "1.0", "lon": "2.0", "display_name": "Springfield, IL" },
                { "lat": "3.0", "lon": "4.0", "display_name": "Springfield, MA" }
            ])))
            .mount(&server)
            .await;

        let report = parser_for(&server).parse("Springfield").await.unwrap();

        assert_eq!(report.formatted_location_reference(), "Springfield, IL");
        assert_eq!(report.coords(), &[Coordinate::from_lat_lon(1.0, 2.0)]);
        assert_eq!(report.warnings().len(), 1);
        assert!(report.warnings()[0].starts_with("2 candidates"));
        assert!(report.from_node().is_none());
    }

    #[tokio::test]
    async fn test_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let report = parser_for(&server).parse("Atlantis").await.unwrap();

        assert_eq!(
            report.errors(),
            &["no match for address 'Atlantis'".to_string()]
        );
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let report = parser_for(&server).parse("anywhere").await.unwrap();

        assert!(report.has_errors());
        assert!(report.errors()[0].contains("503"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let report = parser_for(&server).parse("anywhere").await.unwrap();

        assert!(report.errors()[0].starts_with("failed to parse geocoder response"));
    }

    #[tokio::test]
    async fn test_invalid_coordinates_are_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "lat": "north", "lon": "2.0", "display_name": "Odd" }
            ])))
            .mount(&server)
            .await;

        let report = parser_for(&server).parse("odd").await.unwrap();

        assert!(report.errors()[0].contains("invalid coordinates"));
    }

    #[tokio::test]
    async fn test_blank_address_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let report = parser_for(&server).parse("   ").await.unwrap();

        assert_eq!(report.errors(), &["address is blank".to_string()]);
    }

    #[tokio::test]
    async fn test_unreachable_geocoder_is_reported() {
        // Nothing listens on port 9 on loopback.
        let parser = NominatimAddressParser::new(
            "http://127.0.0.1:9",
            Duration::from_millis(500),
            "locref-test",
            1,
        )
        .unwrap();

        let report = parser.parse("anywhere").await.unwrap();

        assert!(report.errors()[0].starts_with("geocoder request failed"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let parser = NominatimAddressParser::new(
            "https://geocoder.example/",
            Duration::from_secs(1),
            "locref-test",
            0,
        )
        .unwrap();
        assert_eq!(parser.base_url, "https://geocoder.example");
        assert_eq!(parser.max_results, 1);
    }
}
