//! locref Library
//!
//! Resolves location references (addresses, coordinate pairs, WKT, derived
//! references) into normalized geometry through a pluggable geocoding
//! backend, plus the spatial helpers used to build search regions.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use application::{LocationResolver, SpatialSearch};
pub use config::{load_config, Config};
pub use domain::entities::{GeocodeReport, LocationReference, ParentLocation};
pub use domain::errors::{GeometryError, ResolveError, SearchError, SpatialError, UnitError};
pub use domain::ports::{
    FormatParser, GeocodingBackend, GeometryFactory, ParentLocationRepository, SpatialGeometry,
};
pub use domain::services::{SearchRegion, SpatialMath};
pub use domain::value_objects::{Coordinate, DistanceUnit, NodeId, OperationName, UnitConverter};
