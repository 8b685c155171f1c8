//! Cascading Deletes
//!
//! Parents do not know their children, so a cascade is a scan of the child
//! collection for matching parent ids. Nothing spans the individual deletes:
//! a failure partway leaves the remaining children orphaned.

use serde_json::{Map, Value};

use crate::domain::{DomainResult, Entity, Item, Tab, Topic};
use crate::repository::{CollectionRepository, DocumentStore, Repository};

const TAB_FIELD: &str = "tabId";
const TOPIC_FIELD: &str = "topicId";

/// Ids removed by a cascade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub topics: Vec<String>,
    pub items: Vec<String>,
}

/// Keys of raw records whose `field` equals `parent_id`
pub fn cascade_targets(records: &Map<String, Value>, field: &str, parent_id: &str) -> Vec<String> {
    records
        .iter()
        .filter(|(_, record)| record.get(field).and_then(Value::as_str) == Some(parent_id))
        .map(|(key, _)| key.clone())
        .collect()
}

/// Delete a topic and every item with its `topicId`
pub async fn delete_topic_cascade<S: DocumentStore + ?Sized>(
    store: &S,
    topic_id: &str,
) -> DomainResult<CascadeReport> {
    CollectionRepository::<S, Topic>::new(store).delete(topic_id).await?;
    let items = delete_children::<Item, S>(store, TOPIC_FIELD, topic_id).await?;
    log::info!("Deleted topic {} with {} items", topic_id, items.len());

    Ok(CascadeReport {
        topics: vec![topic_id.to_string()],
        items,
    })
}

/// Delete a tab, every topic with its `tabId`, and every item with its
/// `tabId` regardless of which topic holds it
pub async fn delete_tab_cascade<S: DocumentStore + ?Sized>(
    store: &S,
    tab_id: &str,
) -> DomainResult<CascadeReport> {
    CollectionRepository::<S, Tab>::new(store).delete(tab_id).await?;
    let topics = delete_children::<Topic, S>(store, TAB_FIELD, tab_id).await?;
    let items = delete_children::<Item, S>(store, TAB_FIELD, tab_id).await?;
    log::info!(
        "Deleted tab {} with {} topics and {} items",
        tab_id,
        topics.len(),
        items.len()
    );

    Ok(CascadeReport { topics, items })
}

/// One scan of the child collection, then one delete per match, in sequence
async fn delete_children<T, S>(store: &S, field: &str, parent_id: &str) -> DomainResult<Vec<String>>
where
    T: Entity,
    S: DocumentStore + ?Sized,
{
    let records = store.get_collection(T::COLLECTION).await?;
    let doomed = cascade_targets(&records, field, parent_id);
    let repo = CollectionRepository::<S, T>::new(store);
    for id in &doomed {
        repo.delete(id).await?;
    }
    Ok(doomed)
}
