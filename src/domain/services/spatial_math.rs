//! Spatial Math Service
//!
//! Pure domain logic for interpolating along segments, measuring planar
//! distances and building search regions. No external dependencies.

use crate::domain::errors::SpatialError;
use crate::domain::value_objects::{Coordinate, DistanceUnit, UnitConverter, EARTH_RADIUS_MILES};

/// Planar geometry helpers.
pub struct SpatialMath;

impl SpatialMath {
    /// Find the point `offset` units along the segment `p0 -> p1`.
    ///
    /// `segment_length` is supplied by the caller and is not recomputed.
    /// Negative offsets clamp to `p0`, offsets past the end clamp to `p1`,
    /// and a zero-length segment always yields `p0`.
    pub fn interpolate_along_segment(
        p0: Coordinate,
        p1: Coordinate,
        segment_length: f64,
        offset: f64,
    ) -> Coordinate {
        if offset < 0.0 || segment_length == 0.0 {
            return p0;
        }
        if offset > segment_length {
            return p1;
        }

        let ratio = offset / segment_length;

        // Axis-aligned fast paths; must agree with interpolate_linear.
        if p0.y == p1.y {
            return Coordinate::new(p0.x + (p1.x - p0.x) * ratio, p0.y);
        }
        if p0.x == p1.x {
            return Coordinate::new(p0.x, p0.y + (p1.y - p0.y) * ratio);
        }

        Self::interpolate_linear(p0, p1, ratio)
    }

    fn interpolate_linear(p0: Coordinate, p1: Coordinate, ratio: f64) -> Coordinate {
        Coordinate::new(
            p0.x + (p1.x - p0.x) * ratio,
            p0.y + (p1.y - p0.y) * ratio,
        )
    }

    /// Planar length of the segment `p0 -> p1` in native coordinate units.
    pub fn segment_length(p0: Coordinate, p1: Coordinate) -> f64 {
        (p1.x - p0.x).hypot(p1.y - p0.y)
    }

    /// Total planar length of a polyline.
    pub fn line_length(coords: &[Coordinate]) -> f64 {
        coords
            .windows(2)
            .map(|w| Self::segment_length(w[0], w[1]))
            .sum()
    }

    /// Walk a polyline and return the point `offset` units from its start.
    ///
    /// Offsets outside the line clamp to its ends. Returns None for an
    /// empty line.
    pub fn interpolate_along_line(coords: &[Coordinate], offset: f64) -> Option<Coordinate> {
        let (first, rest) = coords.split_first()?;
        if offset <= 0.0 {
            return Some(*first);
        }

        let mut remaining = offset;
        let mut start = *first;
        for &end in rest {
            let length = Self::segment_length(start, end);
            if remaining <= length {
                return Some(Self::interpolate_along_segment(start, end, length, remaining));
            }
            remaining -= length;
            start = end;
        }

        Some(start)
    }

    /// Planar distance between two points, converted between units.
    ///
    /// This is not a great-circle distance: the coordinates are measured
    /// in their native space and then scaled.
    pub fn distance(
        p1: Coordinate,
        p2: Coordinate,
        input_unit: DistanceUnit,
        output_unit: DistanceUnit,
    ) -> f64 {
        UnitConverter::convert(Self::segment_length(p1, p2), input_unit, output_unit)
    }
}

/// A closed rectangular ring bounding a spatial query.
///
/// The ring always has five vertices in the order
/// (minLon,minLat) → (minLon,maxLat) → (maxLon,maxLat) → (maxLon,minLat) → (minLon,minLat).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRegion {
    ring: [Coordinate; 5],
}

impl SearchRegion {
    /// Build a region from explicit bounds.
    pub fn from_bounds(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            ring: [
                Coordinate::new(min_lon, min_lat),
                Coordinate::new(min_lon, max_lat),
                Coordinate::new(max_lon, max_lat),
                Coordinate::new(max_lon, min_lat),
                Coordinate::new(min_lon, min_lat),
            ],
        }
    }

    /// Parse `"minLon,minLat,maxLon,maxLat"`.
    ///
    /// # Examples
    /// ```
    /// use locref::domain::services::SearchRegion;
    ///
    /// let region = SearchRegion::from_bounding_box_str("-1,-1,1,1").unwrap();
    /// assert_eq!(region.ring().len(), 5);
    /// assert!(SearchRegion::from_bounding_box_str("1,2,3").is_err());
    /// ```
    pub fn from_bounding_box_str(text: &str) -> Result<Self, SpatialError> {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(SpatialError::WrongValueCount {
                expected: 4,
                found: parts.len(),
            });
        }

        let mut values = [0.0; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = match part.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    return Err(SpatialError::InvalidNumber {
                        value: part.to_string(),
                    })
                }
            };
        }

        let [min_lon, min_lat, max_lon, max_lat] = values;
        Ok(Self::from_bounds(min_lon, min_lat, max_lon, max_lat))
    }

    /// Build a region around `center` (x = lon, y = lat) reaching `radius`.
    ///
    /// The longitude span widens with latitude to compensate for meridian
    /// convergence. It diverges near the poles.
    pub fn from_point_radius(center: Coordinate, radius: f64, unit: DistanceUnit) -> Self {
        let miles = UnitConverter::convert(radius, unit, DistanceUnit::Mile);
        let angular_radius = miles / EARTH_RADIUS_MILES;

        let delta_lat = UnitConverter::radians_to_degrees(angular_radius);
        let delta_lon = UnitConverter::radians_to_degrees(
            angular_radius / UnitConverter::degrees_to_radians(center.lat()).cos(),
        );

        Self::from_bounds(
            center.lon() - delta_lon,
            center.lat() - delta_lat,
            center.lon() + delta_lon,
            center.lat() + delta_lat,
        )
    }

    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }
}
