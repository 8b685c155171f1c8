//! Repository Layer
//!
//! Data access abstractions and implementations.
//! - traits: raw document store + typed repository contracts
//! - collection: generic typed repository over any document store
//! - rtdb: Firebase Realtime Database REST client
//! - memory: in-process store with the same semantics

mod traits;
mod collection;
mod push_id;
mod rtdb;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::{DocumentStore, Repository};
pub use collection::{decode_collection, sort_by_order, CollectionRepository};
pub use push_id::PushIdGenerator;
pub use rtdb::RtdbStore;
pub use memory::MemoryStore;

use crate::domain::{Item, Tab, Topic};

/// Typed repository over the `tabs` collection
pub fn tabs<S: DocumentStore + ?Sized>(store: &S) -> CollectionRepository<'_, S, Tab> {
    CollectionRepository::new(store)
}

/// Typed repository over the `topics` collection
pub fn topics<S: DocumentStore + ?Sized>(store: &S) -> CollectionRepository<'_, S, Topic> {
    CollectionRepository::new(store)
}

/// Typed repository over the `items` collection
pub fn items<S: DocumentStore + ?Sized>(store: &S) -> CollectionRepository<'_, S, Item> {
    CollectionRepository::new(store)
}
