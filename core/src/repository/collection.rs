//! Generic collection repository
//!
//! Every listing fetches the whole collection and filters client-side.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{DomainResult, Entity, ParentFilter};
use super::traits::{DocumentStore, Repository};

/// Typed view over one collection of a document store
pub struct CollectionRepository<'s, S: ?Sized, T> {
    store: &'s S,
    _entity: PhantomData<fn() -> T>,
}

impl<'s, S: DocumentStore + ?Sized, T: Entity> CollectionRepository<'s, S, T> {
    pub fn new(store: &'s S) -> Self {
        Self { store, _entity: PhantomData }
    }

    pub fn store(&self) -> &'s S {
        self.store
    }
}

/// Decode raw records, attaching keys as ids.
/// Records that do not decode are skipped; they never render.
pub fn decode_collection<T: Entity>(records: Map<String, Value>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value::<T>(value) {
            Ok(mut entity) => {
                entity.set_id(key);
                Some(entity)
            }
            Err(e) => {
                log::warn!("Skipping malformed {} record {}: {}", T::COLLECTION, key, e);
                None
            }
        })
        .collect()
}

/// Stable sort by `order`, substituting the entity's missing-order key.
/// Ties keep their incoming (key) order.
pub fn sort_by_order<T: Entity>(records: &mut [T]) {
    records.sort_by_key(|r| r.sort_key());
}

#[async_trait(?Send)]
impl<'s, S: DocumentStore + ?Sized, T: Entity> Repository<T> for CollectionRepository<'s, S, T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        let value = serde_json::to_value(entity)?;
        let key = self.store.push(T::COLLECTION, value).await?;
        log::debug!("Created {}/{}", T::COLLECTION, key);

        let mut created = entity.clone();
        created.set_id(key);
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(value) => {
                let mut entity: T = serde_json::from_value(value)?;
                entity.set_id(id.to_string());
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ParentFilter) -> DomainResult<Vec<T>> {
        let records = self.store.get_collection(T::COLLECTION).await?;
        let mut entities: Vec<T> = decode_collection::<T>(records)
            .into_iter()
            .filter(|e| e.matches(filter))
            .collect();
        sort_by_order(&mut entities);
        log::debug!("Listed {} {} for {:?}", entities.len(), T::COLLECTION, filter);
        Ok(entities)
    }

    async fn update(&self, id: &str, patch: &T::Patch) -> DomainResult<()> {
        let value = serde_json::to_value(patch)?;
        self.store.update(T::COLLECTION, id, value).await?;
        log::debug!("Updated {}/{}", T::COLLECTION, id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.store.remove(T::COLLECTION, id).await?;
        log::debug!("Deleted {}/{}", T::COLLECTION, id);
        Ok(())
    }
}
