//! Spatial Search - search-region use case
//!
//! Turns bounding boxes and point+radius queries into polygons a storage
//! layer can filter on, using the configured units and spatial reference.

use crate::domain::errors::SearchError;
use crate::domain::ports::{GeometryFactory, SpatialGeometry};
use crate::domain::services::{SearchRegion, SpatialMath};
use crate::domain::value_objects::{Coordinate, DistanceUnit};
use std::sync::Arc;

/// Builds search geometries and measures distances with configured units.
pub struct SpatialSearch {
    factory: Arc<dyn GeometryFactory>,
    input_unit: DistanceUnit,
    output_unit: DistanceUnit,
}

impl SpatialSearch {
    pub fn new(
        factory: Arc<dyn GeometryFactory>,
        input_unit: DistanceUnit,
        output_unit: DistanceUnit,
    ) -> Self {
        Self {
            factory,
            input_unit,
            output_unit,
        }
    }

    /// Search polygon for a `"minLon,minLat,maxLon,maxLat"` box.
    pub fn search_polygon_from_bbox(&self, bbox: &str) -> Result<SpatialGeometry, SearchError> {
        let region = SearchRegion::from_bounding_box_str(bbox)?;
        tracing::debug!("search region from bbox {}", bbox);
        Ok(self.factory.create_polygon(region.ring(), true)?)
    }

    /// Search polygon around a point.
    ///
    /// `unit` defaults to the configured input unit.
    pub fn search_polygon_from_point_radius(
        &self,
        lat: f64,
        lon: f64,
        radius: f64,
        unit: Option<DistanceUnit>,
    ) -> Result<SpatialGeometry, SearchError> {
        let unit = unit.unwrap_or(self.input_unit);
        if lat.abs() > 85.0 {
            tracing::warn!(
                "search radius at latitude {} distorts heavily in longitude",
                lat
            );
        }
        let region = SearchRegion::from_point_radius(Coordinate::from_lat_lon(lat, lon), radius, unit);
        Ok(self.factory.create_polygon(region.ring(), true)?)
    }

    /// Planar distance between two points, from the configured input unit
    /// to the configured output unit.
    pub fn distance(&self, p1: Coordinate, p2: Coordinate) -> f64 {
        SpatialMath::distance(p1, p2, self.input_unit, self.output_unit)
    }

    pub fn input_unit(&self) -> DistanceUnit {
        self.input_unit
    }

    pub fn output_unit(&self) -> DistanceUnit {
        self.output_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{GeometryError, SpatialError};
    use std::sync::Mutex;

    /// Records the rings it is asked to build.
    struct RecordingFactory {
        rings: Mutex<Vec<(Vec<Coordinate>, bool)>>,
    }

    impl RecordingFactory {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                rings: Mutex::new(Vec::new()),
            })
        }
    }

    impl GeometryFactory for RecordingFactory {
        fn create_point(&self, lat: f64, lon: f64) -> Result<SpatialGeometry, GeometryError> {
            Ok(SpatialGeometry::new(
                geo::Geometry::Point(geo::Point::new(lon, lat)),
                None,
            ))
        }

        fn create_line_string(
            &self,
            _coords: &[Coordinate],
        ) -> Result<SpatialGeometry, GeometryError> {
            Err(GeometryError::Empty)
        }

        fn create_polygon(
            &self,
            coords: &[Coordinate],
            closed: bool,
        ) -> Result<SpatialGeometry, GeometryError> {
            self.rings.lock().unwrap().push((coords.to_vec(), closed));
            let ring: Vec<geo::Coord<f64>> = coords.iter().map(|c| (*c).into()).collect();
            Ok(SpatialGeometry::new(
                geo::Geometry::Polygon(geo::Polygon::new(geo::LineString::new(ring), vec![])),
                Some(4326),
            ))
        }

        fn create_from_wkt(&self, wkt: &str) -> Result<SpatialGeometry, GeometryError> {
            Err(GeometryError::InvalidWkt(wkt.to_string()))
        }
    }

    #[test]
    fn test_bbox_builds_closed_polygon() {
        let factory = RecordingFactory::new();
        let search = SpatialSearch::new(factory.clone(), DistanceUnit::Mile, DistanceUnit::Mile);

        let geometry = search.search_polygon_from_bbox("-1,-1,1,1").unwrap();

        let rings = factory.rings.lock().unwrap();
        assert_eq!(rings.len(), 1);
        assert!(rings[0].1);
        assert_eq!(rings[0].0.len(), 5);
        assert_eq!(geometry.srid, Some(4326));
    }

    #[test]
    fn test_bbox_malformed_input_is_an_error() {
        let search = SpatialSearch::new(
            RecordingFactory::new(),
            DistanceUnit::Mile,
            DistanceUnit::Mile,
        );

        let result = search.search_polygon_from_bbox("1,2,three,4");
        assert_eq!(
            result.unwrap_err(),
            SearchError::Spatial(SpatialError::InvalidNumber {
                value: "three".to_string()
            })
        );
    }

    #[test]
    fn test_point_radius_uses_configured_unit_by_default() {
        let factory = RecordingFactory::new();
        let search =
            SpatialSearch::new(factory.clone(), DistanceUnit::Kilometer, DistanceUnit::Mile);

        search
            .search_polygon_from_point_radius(10.0, 20.0, 5.0, None)
            .unwrap();
        search
            .search_polygon_from_point_radius(10.0, 20.0, 5.0, Some(DistanceUnit::Kilometer))
            .unwrap();

        let rings = factory.rings.lock().unwrap();
        assert_eq!(rings[0].0, rings[1].0);
    }

    #[test]
    fn test_point_radius_zero_is_degenerate() {
        let factory = RecordingFactory::new();
        let search = SpatialSearch::new(factory.clone(), DistanceUnit::Mile, DistanceUnit::Mile);

        search
            .search_polygon_from_point_radius(45.0, 7.0, 0.0, None)
            .unwrap();

        let rings = factory.rings.lock().unwrap();
        for c in &rings[0].0 {
            assert!((c.lat() - 45.0).abs() < 1e-12);
            assert!((c.lon() - 7.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_distance_uses_configured_units() {
        let search = SpatialSearch::new(
            RecordingFactory::new(),
            DistanceUnit::DecimalDegree,
            DistanceUnit::Mile,
        );

        let d = search.distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 2.0));
        assert!((d - 131.075).abs() < 1e-9);
        assert_eq!(search.input_unit(), DistanceUnit::DecimalDegree);
        assert_eq!(search.output_unit(), DistanceUnit::Mile);
    }
}
