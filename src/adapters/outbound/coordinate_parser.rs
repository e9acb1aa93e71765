//! Coordinate Pair Parser
//!
//! Parses `lat,lon` pairs (several separated by `;`) without any lookup.

use crate::domain::entities::GeocodeReport;
use crate::domain::ports::FormatParser;
use crate::domain::value_objects::Coordinate;
use async_trait::async_trait;

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Parser for the `coordinate` format.
///
/// A pair whose first value cannot be a latitude but whose second can is
/// taken to be in `lon,lat` order; it is swapped and a warning is raised.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateParser;

#[async_trait]
impl FormatParser for CoordinateParser {
    async fn parse(&self, raw_reference: &str) -> anyhow::Result<GeocodeReport> {
        Ok(parse_coordinates(raw_reference))
    }
}

fn parse_coordinates(raw: &str) -> GeocodeReport {
    let pairs: Vec<&str> = raw
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if pairs.is_empty() {
        return GeocodeReport::failure("coordinate reference is empty");
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut coords = Vec::with_capacity(pairs.len());

    for (i, pair) in pairs.iter().enumerate() {
        match parse_pair(pair) {
            Ok((coord, swapped)) => {
                if swapped {
                    warnings.push(format!(
                        "pair {} '{}' read as longitude,latitude",
                        i + 1,
                        pair
                    ));
                }
                coords.push(coord);
            }
            Err(e) => errors.push(format!("pair {}: {}", i + 1, e)),
        }
    }

    if !errors.is_empty() {
        let mut report = GeocodeReport::default();
        for e in errors {
            report.push_error(e);
        }
        return report;
    }

    let canonical = coords
        .iter()
        .map(|c| format!("{:.6},{:.6}", c.lat(), c.lon()))
        .collect::<Vec<_>>()
        .join(";");

    let mut report = GeocodeReport::success(canonical, coords);
    for w in warnings {
        report.push_warning(w);
    }
    report
}

/// Returns the coordinate and whether the pair had to be swapped.
fn parse_pair(pair: &str) -> Result<(Coordinate, bool), String> {
    let values: Vec<&str> = pair.split(',').map(str::trim).collect();
    let [first, second] = values.as_slice() else {
        return Err(format!("expected 'lat,lon' but found '{}'", pair));
    };

    let first = parse_number(first)?;
    let second = parse_number(second)?;

    let (lat, lon, swapped) = if first.abs() > MAX_LATITUDE && second.abs() <= MAX_LATITUDE {
        (second, first, true)
    } else {
        (first, second, false)
    };

    if lat.abs() > MAX_LATITUDE {
        return Err(format!("latitude {} out of range", lat));
    }
    if lon.abs() > MAX_LONGITUDE {
        return Err(format!("longitude {} out of range", lon));
    }

    Ok((Coordinate::from_lat_lon(lat, lon), swapped))
}

fn parse_number(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("'{}' is not a number", value)),
    }
}
