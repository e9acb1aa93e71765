mod location_resolver;
mod spatial_search;

pub use location_resolver::LocationResolver;
pub use spatial_search::SpatialSearch;
