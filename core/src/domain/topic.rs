//! Topic Entity
//!
//! Named grouping nested under exactly one tab.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::filter::ParentFilter;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub tab_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Topic {
    pub fn new(tab_id: impl Into<String>, name: impl Into<String>, order: i64) -> Self {
        Self {
            id: String::new(),
            tab_id: tab_id.into(),
            name: name.into(),
            order: Some(order),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl TopicPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    pub fn apply_to(&self, topic: &mut Topic) {
        if let Some(name) = &self.name {
            topic.name = name.clone();
        }
        if let Some(order) = self.order {
            topic.order = Some(order);
        }
    }
}

impl Entity for Topic {
    type Patch = TopicPatch;
    const COLLECTION: &'static str = "topics";
    const MISSING_ORDER: i64 = 0;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn order_patch(order: i64) -> TopicPatch {
        TopicPatch { order: Some(order), ..Default::default() }
    }

    fn matches(&self, filter: &ParentFilter) -> bool {
        filter.accepts(non_empty(&self.tab_id), None)
    }
}

pub(super) fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
