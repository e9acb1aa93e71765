//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use crate::domain::errors::UnitError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

/// Earth's mean radius in miles, used to turn a linear radius into an angle.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Coarse length of one decimal degree in miles.
///
/// Not geodesically exact; good enough to size search regions and offsets.
pub const MILES_PER_DECIMAL_DEGREE: f64 = 65.5375;

pub const KILOMETERS_PER_MILE: f64 = 1.609344;
pub const METERS_PER_MILE: f64 = 1609.344;
pub const FEET_PER_MILE: f64 = 5280.0;

/// A position in the geometry's native coordinate space.
///
/// For geographic data `x` is the longitude and `y` the latitude.
/// Serialized as a two-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a geographic coordinate from latitude/longitude order.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self { x: lon, y: lat }
    }

    pub fn lat(&self) -> f64 {
        self.y
    }

    pub fn lon(&self) -> f64 {
        self.x
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self { x: c.x, y: c.y }
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord { x: c.x, y: c.y }
    }
}

/// Name of a backend parse operation, derived from a format tag.
///
/// The mapping is total: every format string, including the empty one,
/// yields exactly one candidate name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationName(String);

impl OperationName {
    /// Derive the operation name for a format tag.
    ///
    /// # Examples
    /// ```
    /// use locref::domain::value_objects::OperationName;
    ///
    /// assert_eq!(OperationName::from_format("Address").as_str(), "parse_address");
    /// assert_eq!(OperationName::from_format("Well Known Text").as_str(), "parse_well_known_text");
    /// assert_eq!(OperationName::from_format("").as_str(), "parse_");
    /// ```
    pub fn from_format(format: &str) -> Self {
        let normalized = format
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        Self(format!("parse_{}", normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a graph endpoint (intersection, segment end, OSM object).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Linear distance units understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Mile,
    Kilometer,
    Meter,
    Foot,
    /// Coarse approximation, see [`MILES_PER_DECIMAL_DEGREE`].
    DecimalDegree,
}

impl DistanceUnit {
    /// How many of this unit make up one mile.
    pub fn per_mile(&self) -> f64 {
        match self {
            Self::Mile => 1.0,
            Self::Kilometer => KILOMETERS_PER_MILE,
            Self::Meter => METERS_PER_MILE,
            Self::Foot => FEET_PER_MILE,
            Self::DecimalDegree => 1.0 / MILES_PER_DECIMAL_DEGREE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mile => "mile",
            Self::Kilometer => "kilometer",
            Self::Meter => "meter",
            Self::Foot => "foot",
            Self::DecimalDegree => "decimal_degree",
        }
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        Self::Mile
    }
}

impl FromStr for DistanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Self::Mile),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(Self::Kilometer),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meter),
            "ft" | "foot" | "feet" => Ok(Self::Foot),
            "dd" | "degree" | "degrees" | "decimal_degree" | "decimal_degrees" => {
                Ok(Self::DecimalDegree)
            }
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stateless conversions between distance units and between angle units.
///
/// Every conversion is a single multiplicative factor, so converting A to B
/// and back to A returns the original value within floating-point tolerance.
pub struct UnitConverter;

impl UnitConverter {
    /// Convert `value` expressed in `from` into `to`.
    pub fn convert(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
        if from == to {
            return value;
        }
        value / from.per_mile() * to.per_mile()
    }

    /// Convert a textual value, rejecting anything that is not a finite number.
    pub fn convert_str(value: &str, from: DistanceUnit, to: DistanceUnit) -> Result<f64, UnitError> {
        let trimmed = value.trim();
        let parsed: f64 = trimmed
            .parse()
            .map_err(|_| UnitError::InvalidNumber(trimmed.to_string()))?;
        if !parsed.is_finite() {
            return Err(UnitError::InvalidNumber(trimmed.to_string()));
        }
        Ok(Self::convert(parsed, from, to))
    }

    pub fn degrees_to_radians(degrees: f64) -> f64 {
        degrees * (PI / 180.0)
    }

    pub fn radians_to_degrees(radians: f64) -> f64 {
        radians * (180.0 / PI)
    }
}
