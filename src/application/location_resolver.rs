//! Location Resolver - Main application use case
//!
//! Dispatches a location reference to the geocoding backend operation that
//! matches its declared format and normalizes whatever the backend reports.

use crate::domain::entities::LocationReference;
use crate::domain::errors::ResolveError;
use crate::domain::ports::GeocodingBackend;
use crate::domain::value_objects::OperationName;
use std::sync::Arc;

/// Location resolver - orchestrates format dispatch.
///
/// The resolver owns no per-call state. Each call writes into a
/// [`LocationReference`] owned by the caller, so concurrent calls are safe
/// as long as they use separate references and the backend is itself safe
/// for concurrent use. Calls to the backend are not serialized.
pub struct LocationResolver {
    backend: Arc<dyn GeocodingBackend>,
}

impl LocationResolver {
    /// Create a resolver over an injected backend.
    pub fn new(backend: Arc<dyn GeocodingBackend>) -> Self {
        Self { backend }
    }

    /// Name of the configured backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Whether the backend registers an operation for `format`.
    pub fn supports(&self, format: &str) -> bool {
        self.backend
            .operation(&OperationName::from_format(format))
            .is_some()
    }

    /// Resolve a reference into a fresh [`LocationReference`].
    ///
    /// Check [`LocationReference::is_resolved`] (or `errors`) on the result.
    /// `Err` is returned only when the backend faults.
    pub async fn resolve(
        &self,
        raw_reference: &str,
        format: &str,
    ) -> Result<LocationReference, ResolveError> {
        let mut reference = LocationReference::new();
        self.parse_into(&mut reference, raw_reference, format)
            .await?;
        Ok(reference)
    }

    /// Resolve into an existing reference, resetting it first.
    ///
    /// # Returns
    /// `Ok(true)` when the reference resolved, `Ok(false)` when the format is
    /// unsupported or the backend reported errors.
    pub async fn parse_into(
        &self,
        reference: &mut LocationReference,
        raw_reference: &str,
        format: &str,
    ) -> Result<bool, ResolveError> {
        reference.reset();
        reference.raw_reference = raw_reference.to_string();
        reference.format = format.to_string();

        let operation = OperationName::from_format(format);

        let Some(parser) = self.backend.operation(&operation) else {
            tracing::warn!(
                "backend {} has no {} for format '{}'",
                self.backend.name(),
                operation,
                format
            );
            reference.errors.push(format!(
                "{} does not support {} (format '{}')",
                self.backend.name(),
                operation,
                format
            ));
            return Ok(false);
        };

        tracing::debug!("dispatching {} to {}", operation, self.backend.name());

        let report = parser
            .parse(raw_reference)
            .await
            .map_err(|source| ResolveError::BackendFault {
                backend: self.backend.name().to_string(),
                operation: operation.clone(),
                source,
            })?;

        if report.has_errors() {
            // Anything else in a failed report is unreliable.
            reference.errors.extend(report.errors().iter().cloned());
            tracing::debug!(
                "{} reported {} error(s) for {}",
                self.backend.name(),
                report.errors().len(),
                operation
            );
        } else {
            reference.warnings.extend(report.warnings().iter().cloned());
            reference.coordinates = report.coords().to_vec();
            reference.formatted_reference = Some(report.formatted_location_reference().to_string());
            reference.from_node = report.from_node().cloned();
            reference.to_node = report.to_node().cloned();
        }

        Ok(reference.errors.is_empty())
    }
}
