//! Parent Location Repository Port
//!
//! Defines the interface for looking up previously resolved locations that
//! derived references point at.

use crate::domain::entities::ParentLocation;
use async_trait::async_trait;

/// Repository of parent locations keyed by parent id.
///
/// This is an outbound port; the storage behind it belongs to the
/// surrounding application.
#[async_trait]
pub trait ParentLocationRepository: Send + Sync {
    /// Get the location registered for a parent, if any.
    async fn get(&self, parent_id: &str) -> Option<ParentLocation>;

    /// Create or replace the location for a parent.
    async fn set(&self, parent_id: String, location: ParentLocation);

    /// Forget a parent.
    async fn remove(&self, parent_id: &str);

    /// Number of registered parents.
    async fn count(&self) -> usize;
}
