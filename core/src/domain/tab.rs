//! Tab Entity
//!
//! Top-level named grouping, ordered among its siblings.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::filter::ParentFilter;

/// A root-level tab
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tab {
    /// Store key (not part of the stored record)
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Position among tabs; absent on records that never got one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Tab {
    /// Create an unsaved tab at the given position
    pub fn new(name: impl Into<String>, order: i64) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            order: Some(order),
        }
    }
}

/// Partial update for a tab
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TabPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl TabPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    /// Mirror the patch onto an in-memory copy
    pub fn apply_to(&self, tab: &mut Tab) {
        if let Some(name) = &self.name {
            tab.name = name.clone();
        }
        if let Some(order) = self.order {
            tab.order = Some(order);
        }
    }
}

impl Entity for Tab {
    type Patch = TabPatch;
    const COLLECTION: &'static str = "tabs";
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

    fn order_patch(order: i64) -> TabPatch {
        TabPatch { order: Some(order), ..Default::default() }
    }

    fn matches(&self, filter: &ParentFilter) -> bool {
        filter.accepts(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_record_shape() {
        let mut tab = Tab::new("Work", 0);
        tab.set_id("-key".to_string());
        let json = serde_json::to_value(&tab).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Work", "order": 0 }));
    }

    #[test]
    fn test_missing_order_sorts_first() {
        let tab: Tab = serde_json::from_value(serde_json::json!({ "name": "Old" })).unwrap();
        assert_eq!(tab.order, None);
        assert_eq!(tab.sort_key(), 0);
    }

    #[test]
    fn test_rename_patch_only_writes_name() {
        let json = serde_json::to_value(TabPatch::rename("Home")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Home" }));
    }
}
