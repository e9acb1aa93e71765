//! Dispatch-Table Geocoding Backend
//!
//! Implements GeocodingBackend over an explicit table of parse operations
//! populated when the backend is assembled.

use crate::domain::ports::{FormatParser, GeocodingBackend};
use crate::domain::value_objects::OperationName;
use std::collections::HashMap;
use std::sync::Arc;

/// Format-to-parser registrations.
#[derive(Default, Clone)]
pub struct DispatchTable {
    parsers: HashMap<OperationName, Arc<dyn FormatParser>>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `parser` for `format`, replacing any earlier registration.
    pub fn register(&mut self, format: &str, parser: Arc<dyn FormatParser>) -> &mut Self {
        let operation = OperationName::from_format(format);
        if self.parsers.insert(operation.clone(), parser).is_some() {
            tracing::debug!("replaced parser registered for {}", operation);
        }
        self
    }

    pub fn get(&self, operation: &OperationName) -> Option<Arc<dyn FormatParser>> {
        self.parsers.get(operation).cloned()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

/// A named backend whose capabilities are exactly its dispatch table.
pub struct TableBackend {
    name: String,
    table: DispatchTable,
}

impl TableBackend {
    pub fn new(name: impl Into<String>, table: DispatchTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

impl GeocodingBackend for TableBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn operation(&self, operation: &OperationName) -> Option<Arc<dyn FormatParser>> {
        self.table.get(operation)
    }

    fn operations(&self) -> Vec<OperationName> {
        let mut operations: Vec<_> = self.table.parsers.keys().cloned().collect();
        operations.sort();
        operations
    }
}
