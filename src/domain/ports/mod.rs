mod geocoding_backend;
mod geometry_factory;
mod parent_location_repository;

pub use geocoding_backend::{FormatParser, GeocodingBackend};
pub use geometry_factory::{GeometryFactory, SpatialGeometry};
pub use parent_location_repository::ParentLocationRepository;
