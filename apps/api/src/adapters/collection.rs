//! Ordered, identifier-keyed collection shared by every storage adapter
//!
//! One generic implementation of add/find/update/delete, instantiated once per
//! entity kind. Records keep insertion order; lookups are linear scans.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::Entity;

/// Generate a fresh identifier for a new record
///
/// No uniqueness check is made against existing records; v4 collisions are
/// treated as impossible.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Records of one kind, in creation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Create a record with a new identifier and append it
    pub fn add(&mut self, input: T::New) -> T {
        let entity = T::create(generate_id(), input);
        self.items.push(entity.clone());
        entity
    }

    /// Find a record by identifier
    pub fn find(&self, id: &str) -> ApiResult<&T> {
        self.items
            .iter()
            .find(|entity| entity.id() == id)
            .ok_or_else(|| ApiError::not_found(T::KIND, id))
    }

    /// All records in creation order
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Records matching a predicate, in creation order
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    /// Shallow-merge a patch onto the matching record and return the result
    ///
    /// The record keeps its position; the identifier is never touched.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> ApiResult<T> {
        let entity = self
            .items
            .iter_mut()
            .find(|entity| entity.id() == id)
            .ok_or_else(|| ApiError::not_found(T::KIND, id))?;

        entity.merge(patch);
        Ok(entity.clone())
    }

    /// Remove the matching record and return its identifier
    pub fn delete(&mut self, id: &str) -> ApiResult<String> {
        let index = self
            .items
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or_else(|| ApiError::not_found(T::KIND, id))?;

        // `remove` keeps the remaining records in creation order
        let removed = self.items.remove(index);
        Ok(removed.id().to_string())
    }
}
