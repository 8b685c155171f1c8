//! Tree loading
//!
//! Tabs, then the topics of one tab, then every topic's items concurrently.

use futures::future::join_all;

use crate::domain::{DomainResult, ParentFilter, Topic};
use crate::repository::{items, tabs, topics, DocumentStore, Repository};

use super::model::{BookmarkTree, TopicNode};

/// Load all tabs and the content of `preferred_tab`, falling back to the
/// first tab when it is absent or no longer exists.
pub async fn load_tree<S: DocumentStore + ?Sized>(
    store: &S,
    preferred_tab: Option<&str>,
) -> DomainResult<BookmarkTree> {
    let tabs = tabs(store).list(&ParentFilter::All).await?;
    let active = preferred_tab
        .filter(|id| tabs.iter().any(|t| t.id == *id))
        .map(str::to_string)
        .or_else(|| tabs.first().map(|t| t.id.clone()));

    let topics = match &active {
        Some(tab_id) => load_tab(store, tab_id).await?,
        None => Vec::new(),
    };
    log::info!("Loaded {} tabs, active {:?}", tabs.len(), active);

    Ok(BookmarkTree {
        tabs,
        loaded_tab: active,
        topics,
    })
}

/// Topics of a tab, each with its items
pub async fn load_tab<S: DocumentStore + ?Sized>(
    store: &S,
    tab_id: &str,
) -> DomainResult<Vec<TopicNode>> {
    let topics = topics(store).list(&ParentFilter::tab(tab_id)).await?;
    let nodes = join_all(
        topics
            .into_iter()
            .map(|topic| load_topic_node(store, tab_id, topic)),
    )
    .await;
    nodes.into_iter().collect()
}

pub async fn load_topic_node<S: DocumentStore + ?Sized>(
    store: &S,
    tab_id: &str,
    topic: Topic,
) -> DomainResult<TopicNode> {
    let filter = ParentFilter::TabTopic {
        tab_id: tab_id.to_string(),
        topic_id: topic.id.clone(),
    };
    let items = items(store).list(&filter).await?;
    Ok(TopicNode { topic, items })
}
