//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Futures are not required to be `Send`: the same code runs in the browser,
//! where HTTP futures are tied to the JS event loop.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{DomainResult, Entity, ParentFilter};

/// Raw access to a hierarchical JSON store made of flat top-level collections.
///
/// Semantics follow the Realtime Database wire protocol:
/// - a missing collection reads as an empty map
/// - `update` merges top-level fields; `null` removes a field
/// - `update` on a missing key creates the record
/// - `remove` on a missing key is a no-op
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Fetch every record of a collection, keyed by store key
    async fn get_collection(&self, collection: &str) -> DomainResult<Map<String, Value>>;

    /// Fetch one record
    async fn get(&self, collection: &str, key: &str) -> DomainResult<Option<Value>>;

    /// Append a record under a freshly generated key and return the key
    async fn push(&self, collection: &str, value: Value) -> DomainResult<String>;

    /// Merge fields into a record
    async fn update(&self, collection: &str, key: &str, patch: Value) -> DomainResult<()>;

    /// Delete a record
    async fn remove(&self, collection: &str, key: &str) -> DomainResult<()>;
}

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
#[async_trait(?Send)]
pub trait Repository<T: Entity> {
    /// Create a new entity; the caller supplies its `order`
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>>;

    /// List entities under a parent, sorted by `order`
    async fn list(&self, filter: &ParentFilter) -> DomainResult<Vec<T>>;

    /// Merge the patch into an existing entity
    async fn update(&self, id: &str, patch: &T::Patch) -> DomainResult<()>;

    /// Delete entity by ID (no cascade)
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
