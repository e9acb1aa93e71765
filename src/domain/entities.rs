//! Domain Entities - Core business objects
//!
//! These entities describe a location reference as it moves through
//! resolution. They carry no identity beyond a single call.

use crate::domain::value_objects::{Coordinate, NodeId};
use serde::{Deserialize, Serialize};

/// A location reference and the normalized outcome of resolving it.
///
/// After a resolution call completes, either `errors` is non-empty or
/// `formatted_reference` is set (with `coordinates` possibly empty when the
/// format legitimately has none).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationReference {
    /// The reference exactly as the caller supplied it
    pub raw_reference: String,
    /// Declared format tag (address, coordinate, derived, well_known_text, ...)
    pub format: String,
    /// Canonical restatement produced by the backend
    pub formatted_reference: Option<String>,
    /// Resolved coordinates in (x, y) order
    pub coordinates: Vec<Coordinate>,
    /// Non-fatal notes from the backend, in the order they were raised
    pub warnings: Vec<String>,
    /// Resolution failures; non-empty means the reference did not resolve
    pub errors: Vec<String>,
    /// Graph endpoint the reference starts at, when the backend knows one
    pub from_node: Option<NodeId>,
    /// Graph endpoint the reference ends at, when the backend knows one
    pub to_node: Option<NodeId>,
}

impl LocationReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field so nothing from a previous call leaks into the next.
    pub fn reset(&mut self) {
        self.raw_reference.clear();
        self.format.clear();
        self.formatted_reference = None;
        self.coordinates.clear();
        self.warnings.clear();
        self.errors.clear();
        self.from_node = None;
        self.to_node = None;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the last resolution succeeded.
    pub fn is_resolved(&self) -> bool {
        self.errors.is_empty() && self.formatted_reference.is_some()
    }
}

/// What a geocoding backend produced for a single parse operation.
///
/// Parsers build a fresh report per call rather than mutating shared
/// backend state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeReport {
    errors: Vec<String>,
    warnings: Vec<String>,
    coords: Vec<Coordinate>,
    formatted_location_reference: String,
    from_node: Option<NodeId>,
    to_node: Option<NodeId>,
}

impl GeocodeReport {
    /// A successful report.
    pub fn success(formatted: impl Into<String>, coords: Vec<Coordinate>) -> Self {
        Self {
            formatted_location_reference: formatted.into(),
            coords,
            ..Default::default()
        }
    }

    /// A report carrying a single error.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
            ..Default::default()
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_nodes(mut self, from_node: Option<NodeId>, to_node: Option<NodeId>) -> Self {
        self.from_node = from_node;
        self.to_node = to_node;
        self
    }

    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn formatted_location_reference(&self) -> &str {
        &self.formatted_location_reference
    }

    pub fn from_node(&self) -> Option<&NodeId> {
        self.from_node.as_ref()
    }

    pub fn to_node(&self) -> Option<&NodeId> {
        self.to_node.as_ref()
    }
}

/// A resolved location that derived references can point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentLocation {
    /// Canonical form of the parent's own reference
    pub formatted_reference: String,
    /// Parent geometry vertices; a line for offset-based derivation
    pub coordinates: Vec<Coordinate>,
    pub from_node: Option<NodeId>,
    pub to_node: Option<NodeId>,
}

impl ParentLocation {
    pub fn new(formatted_reference: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        Self {
            formatted_reference: formatted_reference.into(),
            coordinates,
            from_node: None,
            to_node: None,
        }
    }

    /// Capture a successfully resolved reference as a parent.
    ///
    /// Returns None if the reference did not resolve.
    pub fn from_resolved(reference: &LocationReference) -> Option<Self> {
        if !reference.is_resolved() {
            return None;
        }
        Some(Self {
            formatted_reference: reference.formatted_reference.clone()?,
            coordinates: reference.coordinates.clone(),
            from_node: reference.from_node.clone(),
            to_node: reference.to_node.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved_reference() -> LocationReference {
        LocationReference {
            raw_reference: "1,2".to_string(),
            format: "coordinate".to_string(),
            formatted_reference: Some("1.000000,2.000000".to_string()),
            coordinates: vec![Coordinate::from_lat_lon(1.0, 2.0)],
            warnings: vec!["w".to_string()],
            errors: Vec::new(),
            from_node: Some(NodeId::new("n1")),
            to_node: Some(NodeId::new("n2")),
        }
    }

    // ===== LocationReference Tests =====

    #[test]
    fn test_new_reference_is_unresolved() {
        let reference = LocationReference::new();
        assert!(!reference.is_resolved());
        assert!(!reference.has_errors());
        assert!(reference.coordinates.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut reference = resolved_reference();
        reference.errors.push("stale".to_string());

        reference.reset();

        assert_eq!(reference, LocationReference::default());
    }

    #[test]
    fn test_is_resolved_requires_formatted_reference() {
        let mut reference = resolved_reference();
        assert!(reference.is_resolved());

        reference.formatted_reference = None;
        assert!(!reference.is_resolved());
    }

    #[test]
    fn test_errors_mean_unresolved() {
        let mut reference = resolved_reference();
        reference.errors.push("not found".to_string());
        assert!(reference.has_errors());
        assert!(!reference.is_resolved());
    }

    #[test]
    fn test_reference_serializes_coordinates_as_pairs() {
        let json = serde_json::to_value(resolved_reference()).unwrap();
        assert_eq!(json["coordinates"], serde_json::json!([[2.0, 1.0]]));
        assert_eq!(json["from_node"], "n1");
    }

    // ===== GeocodeReport Tests =====

    #[test]
    fn test_report_success() {
        let report = GeocodeReport::success("123 Main St", vec![Coordinate::new(1.0, 2.0)])
            .with_warning("approximate");

        assert!(!report.has_errors());
        assert_eq!(report.formatted_location_reference(), "123 Main St");
        assert_eq!(report.coords(), &[Coordinate::new(1.0, 2.0)]);
        assert_eq!(report.warnings(), &["approximate".to_string()]);
        assert!(report.from_node().is_none());
    }

    #[test]
    fn test_report_failure_accumulates_errors() {
        let mut report = GeocodeReport::failure("first");
        report.push_error("second");

        assert!(report.has_errors());
        assert_eq!(report.errors(), &["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_report_nodes() {
        let report = GeocodeReport::success("x", Vec::new())
            .with_nodes(Some(NodeId::new("a")), None);
        assert_eq!(report.from_node(), Some(&NodeId::new("a")));
        assert!(report.to_node().is_none());
    }

    // ===== ParentLocation Tests =====

    #[test]
    fn test_parent_from_resolved_reference() {
        let parent = ParentLocation::from_resolved(&resolved_reference()).unwrap();
        assert_eq!(parent.formatted_reference, "1.000000,2.000000");
        assert_eq!(parent.coordinates.len(), 1);
        assert_eq!(parent.from_node, Some(NodeId::new("n1")));
    }

    #[test]
    fn test_parent_from_failed_reference_is_none() {
        let mut reference = resolved_reference();
        reference.errors.push("nope".to_string());
        assert!(ParentLocation::from_resolved(&reference).is_none());
    }
}
