//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all stored records.
//! Every record lives in one flat collection under a store-generated key.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::filter::ParentFilter;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone + Serialize + DeserializeOwned {
    /// Partial update shape; only fields that are set get written
    type Patch: Serialize + Send + Sync;

    /// Name of the top-level collection holding this entity
    const COLLECTION: &'static str;

    /// Sort key used when a record carries no `order` field
    const MISSING_ORDER: i64;

    /// Returns the entity's store key
    fn id(&self) -> &str;

    /// Attaches the store key after decoding or creation
    fn set_id(&mut self, id: String);

    fn order(&self) -> Option<i64>;

    /// Patch that rewrites only the `order` field
    fn order_patch(order: i64) -> Self::Patch;

    /// Parent-id equality check used for client-side filtering
    fn matches(&self, filter: &ParentFilter) -> bool;

    fn sort_key(&self) -> i64 {
        self.order().unwrap_or(Self::MISSING_ORDER)
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// Store unreachable or answered with an error status
    Unavailable(String),
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}
