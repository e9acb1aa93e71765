//! Domain Errors
//!
//! Structured failures raised by the domain. Failures a geocoding backend
//! *reports* are not errors in this sense: they travel as strings inside
//! the resolved location reference.

use crate::domain::value_objects::OperationName;

/// Fatal resolver failures.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The backend faulted instead of reporting errors through its report.
    #[error("geocoding backend '{backend}' faulted in {operation}: {source}")]
    BackendFault {
        backend: String,
        operation: OperationName,
        #[source]
        source: anyhow::Error,
    },
}

/// Malformed spatial input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpatialError {
    #[error("expected {expected} comma-separated values but found {found}")]
    WrongValueCount { expected: usize, found: usize },
    #[error("'{value}' is not a finite number")]
    InvalidNumber { value: String },
}

/// Malformed unit conversion input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("unknown distance unit '{0}'")]
    UnknownUnit(String),
    #[error("'{0}' is not a finite number")]
    InvalidNumber(String),
}

/// Geometry construction failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("geometry has no coordinates")]
    Empty,
    #[error("geometry needs at least {required} distinct vertices but has {found}")]
    TooFewVertices { required: usize, found: usize },
    #[error("ring declared closed but first and last vertices differ")]
    RingNotClosed,
    #[error("invalid well-known text: {0}")]
    InvalidWkt(String),
}

/// Failures while building a search geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Spatial(#[from] SpatialError),
    #[error(transparent)]
    Unit(#[from] UnitError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
