//! Backend Catalog
//!
//! Assembles the named geocoding backends selectable from configuration.

use super::{
    CoordinateParser, DerivedParser, DispatchTable, NominatimAddressParser, TableBackend,
    WktParser,
};
use crate::config::Config;
use crate::domain::ports::{GeocodingBackend, GeometryFactory, ParentLocationRepository};
use std::sync::Arc;

/// Every format, including remote address lookup.
pub const STANDARD_BACKEND: &str = "standard";
/// Local formats only; never touches the network.
pub const OFFLINE_BACKEND: &str = "offline";

/// Build the backend named by `cfg.backend`.
pub fn build_backend(
    cfg: &Config,
    factory: Arc<dyn GeometryFactory>,
    parents: Arc<dyn ParentLocationRepository>,
) -> anyhow::Result<Arc<dyn GeocodingBackend>> {
    let name = cfg.backend.trim().to_lowercase();

    let mut table = DispatchTable::new();
    table
        .register("coordinate", Arc::new(CoordinateParser))
        .register("well_known_text", Arc::new(WktParser::new(factory)))
        .register("derived", Arc::new(DerivedParser::new(parents, cfg.input_unit)));

    match name.as_str() {
        STANDARD_BACKEND => {
            let address = NominatimAddressParser::new(
                cfg.geocoder_url.clone(),
                cfg.geocoder_timeout(),
                &cfg.user_agent,
                cfg.geocoder_max_results,
            )?;
            table.register("address", Arc::new(address));
        }
        OFFLINE_BACKEND => {}
        other => anyhow::bail!(
            "unknown geocoding backend '{}' (expected '{}' or '{}')",
            other,
            STANDARD_BACKEND,
            OFFLINE_BACKEND
        ),
    }

    let backend = TableBackend::new(name, table);
    tracing::info!(
        "geocoding backend {} ready with {} operation(s)",
        backend.name(),
        backend.operations().len()
    );
    Ok(Arc::new(backend))
}
