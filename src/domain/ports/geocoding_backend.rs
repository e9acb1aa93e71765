//! Geocoding Backend Port
//!
//! Defines the interface a geocoding provider implements so the resolver
//! can dispatch location references to it.

use crate::domain::entities::GeocodeReport;
use crate::domain::value_objects::OperationName;
use async_trait::async_trait;
use std::sync::Arc;

/// A single per-format parse operation.
///
/// Ordinary parse failures (address not found, malformed pair, ...) are
/// reported through the returned [`GeocodeReport`]. An `Err` means the
/// parser itself faulted and is treated as fatal by the resolver.
#[async_trait]
pub trait FormatParser: Send + Sync {
    async fn parse(&self, raw_reference: &str) -> anyhow::Result<GeocodeReport>;
}

/// A pluggable geocoding provider.
///
/// This is an outbound port. Each backend exposes a dispatch table of parse
/// operations keyed by [`OperationName`]; a missing key means the backend
/// does not support that format.
pub trait GeocodingBackend: Send + Sync {
    /// Human-readable backend identity, used in error messages.
    fn name(&self) -> &str;

    /// Look up the parse operation registered under `operation`.
    fn operation(&self, operation: &OperationName) -> Option<Arc<dyn FormatParser>>;

    /// All registered operations, sorted by name.
    fn operations(&self) -> Vec<OperationName>;
}
