mod backend_catalog;
mod coordinate_parser;
mod dashmap_parent_location_repo;
mod derived_parser;
mod geo_geometry_factory;
mod nominatim_address_parser;
mod table_backend;
mod wkt_parser;

pub use backend_catalog::{build_backend, OFFLINE_BACKEND, STANDARD_BACKEND};
pub use coordinate_parser::CoordinateParser;
pub use dashmap_parent_location_repo::DashMapParentLocationRepository;
pub use derived_parser::DerivedParser;
pub use geo_geometry_factory::GeoTypesGeometryFactory;
pub use nominatim_address_parser::NominatimAddressParser;
pub use table_backend::{DispatchTable, TableBackend};
pub use wkt_parser::WktParser;
