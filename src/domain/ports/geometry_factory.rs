//! Geometry Factory Port
//!
//! Narrow creation interface for point/line/polygon geometries. The
//! resolver core and its parsers never build geometries any other way.

use crate::domain::errors::GeometryError;
use crate::domain::value_objects::Coordinate;
use geo::CoordsIter;
use wkt::ToWkt;

/// A geometry tagged with the spatial reference it was created in.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGeometry {
    pub geometry: geo::Geometry<f64>,
    /// Spatial reference identifier (e.g. 4326), if one is configured
    pub srid: Option<u32>,
}

impl SpatialGeometry {
    pub fn new(geometry: geo::Geometry<f64>, srid: Option<u32>) -> Self {
        Self { geometry, srid }
    }

    /// Every vertex of the geometry in traversal order.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.geometry.coords_iter().map(Coordinate::from).collect()
    }

    pub fn to_wkt(&self) -> String {
        self.geometry.wkt_string()
    }

    /// Extended WKT, prefixed with `SRID=<n>;` when an SRID is set.
    pub fn to_ewkt(&self) -> String {
        match self.srid {
            Some(srid) => format!("SRID={};{}", srid, self.to_wkt()),
            None => self.to_wkt(),
        }
    }
}

/// Factory for geometry objects.
///
/// This is an outbound port. Implementations wrap a concrete geometry
/// library and apply the configured spatial reference.
pub trait GeometryFactory: Send + Sync {
    /// Create a point. Note the latitude-first argument order.
    fn create_point(&self, lat: f64, lon: f64) -> Result<SpatialGeometry, GeometryError>;

    /// Create a line string from at least two coordinates.
    fn create_line_string(&self, coords: &[Coordinate]) -> Result<SpatialGeometry, GeometryError>;

    /// Create a polygon from a ring.
    ///
    /// When `closed` is true the caller guarantees the first coordinate is
    /// repeated as the last; otherwise the factory closes the ring.
    fn create_polygon(
        &self,
        coords: &[Coordinate],
        closed: bool,
    ) -> Result<SpatialGeometry, GeometryError>;

    /// Parse well-known text.
    fn create_from_wkt(&self, wkt: &str) -> Result<SpatialGeometry, GeometryError>;
}
