//! geo-types Geometry Factory
//!
//! Implements GeometryFactory using the `geo` geometry types and the `wkt`
//! codec.

use crate::domain::errors::GeometryError;
use crate::domain::ports::{GeometryFactory, SpatialGeometry};
use crate::domain::value_objects::Coordinate;
use geo::{Coord, Geometry, LineString, Point, Polygon};
use wkt::TryFromWkt;

/// Geometry factory backed by `geo` types.
///
/// Every created geometry is tagged with the configured SRID.
#[derive(Debug, Clone, Default)]
pub struct GeoTypesGeometryFactory {
    srid: Option<u32>,
}

impl GeoTypesGeometryFactory {
    pub fn new(srid: Option<u32>) -> Self {
        Self { srid }
    }

    pub fn srid(&self) -> Option<u32> {
        self.srid
    }

    fn wrap(&self, geometry: Geometry<f64>) -> SpatialGeometry {
        SpatialGeometry::new(geometry, self.srid)
    }
}

impl GeometryFactory for GeoTypesGeometryFactory {
    fn create_point(&self, lat: f64, lon: f64) -> Result<SpatialGeometry, GeometryError> {
        Ok(self.wrap(Geometry::Point(Point::new(lon, lat))))
    }

    fn create_line_string(&self, coords: &[Coordinate]) -> Result<SpatialGeometry, GeometryError> {
        match coords.len() {
            0 => Err(GeometryError::Empty),
            1 => Err(GeometryError::TooFewVertices {
                required: 2,
                found: 1,
            }),
            _ => {
                let line: Vec<Coord<f64>> = coords.iter().map(|c| (*c).into()).collect();
                Ok(self.wrap(Geometry::LineString(LineString::new(line))))
            }
        }
    }

    fn create_polygon(
        &self,
        coords: &[Coordinate],
        closed: bool,
    ) -> Result<SpatialGeometry, GeometryError> {
        let (first, last) = match (coords.first(), coords.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(GeometryError::Empty),
        };

        let already_closed = coords.len() > 1 && first == last;
        if closed && !already_closed {
            return Err(GeometryError::RingNotClosed);
        }

        let distinct = if already_closed {
            coords.len() - 1
        } else {
            coords.len()
        };
        if distinct < 3 {
            return Err(GeometryError::TooFewVertices {
                required: 3,
                found: distinct,
            });
        }

        let mut ring: Vec<Coord<f64>> = coords.iter().map(|c| (*c).into()).collect();
        if !already_closed {
            ring.push(first.into());
        }

        Ok(self.wrap(Geometry::Polygon(Polygon::new(
            LineString::new(ring),
            Vec::new(),
        ))))
    }

    fn create_from_wkt(&self, wkt: &str) -> Result<SpatialGeometry, GeometryError> {
        let geometry = Geometry::<f64>::try_from_wkt_str(wkt.trim())
            .map_err(|e| GeometryError::InvalidWkt(e.to_string()))?;
        Ok(self.wrap(geometry))
    }
}
