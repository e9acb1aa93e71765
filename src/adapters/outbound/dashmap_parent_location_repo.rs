//! DashMap Parent Location Repository
//!
//! Implements ParentLocationRepository using DashMap for lock-free concurrent access.

use crate::domain::entities::ParentLocation;
use crate::domain::ports::ParentLocationRepository;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory parent location store.
pub struct DashMapParentLocationRepository {
    parents: Arc<DashMap<String, ParentLocation>>,
}

impl DashMapParentLocationRepository {
    pub fn new() -> Self {
        Self {
            parents: Arc::new(DashMap::new()),
        }
    }
}

impl Default for DashMapParentLocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParentLocationRepository for DashMapParentLocationRepository {
    async fn get(&self, parent_id: &str) -> Option<ParentLocation> {
        self.parents.get(parent_id).map(|e| e.value().clone())
    }

    async fn set(&self, parent_id: String, location: ParentLocation) {
        self.parents.insert(parent_id, location);
    }

    async fn remove(&self, parent_id: &str) {
        self.parents.remove(parent_id);
    }

    async fn count(&self) -> usize {
        self.parents.len()
    }
}
