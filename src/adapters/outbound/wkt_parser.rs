//! Well-Known-Text Parser
//!
//! Resolves WKT references by building the geometry through the
//! GeometryFactory port and reporting its vertices.

use crate::domain::entities::GeocodeReport;
use crate::domain::ports::{FormatParser, GeometryFactory};
use async_trait::async_trait;
use std::sync::Arc;

/// Parser for the `well_known_text` format.
pub struct WktParser {
    factory: Arc<dyn GeometryFactory>,
}

impl WktParser {
    pub fn new(factory: Arc<dyn GeometryFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl FormatParser for WktParser {
    async fn parse(&self, raw_reference: &str) -> anyhow::Result<GeocodeReport> {
        if raw_reference.trim().is_empty() {
            return Ok(GeocodeReport::failure("well-known text is empty"));
        }

        let geometry = match self.factory.create_from_wkt(raw_reference) {
            Ok(g) => g,
            Err(e) => return Ok(GeocodeReport::failure(e.to_string())),
        };

        let coords = geometry.coordinates();
        let mut report = GeocodeReport::success(geometry.to_wkt(), coords);
        if report.coords().is_empty() {
            report.push_warning("geometry has no coordinates");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::GeoTypesGeometryFactory;
    use crate::domain::value_objects::Coordinate;

    fn parser() -> WktParser {
        WktParser::new(Arc::new(GeoTypesGeometryFactory::new(Some(4326))))
    }

    #[tokio::test]
    async fn test_point() {
        let report = parser().parse("POINT (30 10)").await.unwrap();

        assert!(!report.has_errors());
        assert_eq!(report.coords(), &[Coordinate::new(30.0, 10.0)]);
        assert!(report.formatted_location_reference().starts_with("POINT"));
    }

    #[tokio::test]
    async fn test_padding_is_canonicalized() {
        let report = parser().parse("  LINESTRING(0 0,1 1)  ").await.unwrap();

        assert!(!report.has_errors());
        assert_eq!(report.coords().len(), 2);
        assert!(report.formatted_location_reference().starts_with("LINESTRING"));
    }

    #[tokio::test]
    async fn test_polygon_reports_every_vertex() {
        let report = parser()
            .parse("POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))")
            .await
            .unwrap();

        assert_eq!(report.coords().len(), 5);
        assert_eq!(report.coords()[0], report.coords()[4]);
    }

    #[tokio::test]
    async fn test_invalid_wkt_is_reported() {
        let report = parser().parse("POLYGON ((0 0, 1").await.unwrap();

        assert!(report.has_errors());
        assert!(report.errors()[0].starts_with("invalid well-known text"));
    }

    #[tokio::test]
    async fn test_blank_wkt_is_reported() {
        let report = parser().parse("   ").await.unwrap();
        assert_eq!(report.errors(), &["well-known text is empty".to_string()]);
    }
}
