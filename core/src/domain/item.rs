//! Item Entity
//!
//! A bookmark: title, link, optional source link ("fonte") and description.
//! Belongs to one topic; `tabId` is stored denormalized for filtering.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::filter::ParentFilter;
use super::topic::non_empty;

/// Sort key for items without `order`: they go after every ordered item
pub const ITEM_MISSING_ORDER: i64 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub tab_id: String,
    #[serde(default)]
    pub topic_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    /// Source link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Item {
    /// Build an unsaved item from a validated draft
    pub fn from_draft(
        tab_id: impl Into<String>,
        topic_id: impl Into<String>,
        draft: ItemDraft,
        order: i64,
    ) -> Self {
        Self {
            id: String::new(),
            tab_id: tab_id.into(),
            topic_id: topic_id.into(),
            title: draft.title,
            link: draft.link,
            fonte: draft.fonte,
            description: draft.description,
            order: Some(order),
        }
    }
}

/// Raw contents of an add/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemDraft {
    pub title: String,
    pub link: String,
    pub fonte: Option<String>,
    pub description: Option<String>,
}

impl ItemDraft {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        fonte: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            fonte: Some(fonte.into()),
            description: Some(description.into()),
        }
    }

    /// Prefill from an existing item (edit form)
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            fonte: item.fonte.clone(),
            description: item.description.clone(),
        }
    }

    /// Title and link are required; blank optional fields collapse to absent.
    pub fn validate(self) -> DomainResult<ItemDraft> {
        let title = self.title.trim().to_string();
        let link = self.link.trim().to_string();
        if title.is_empty() || link.is_empty() {
            return Err(DomainError::InvalidInput("title and link are required".into()));
        }
        Ok(ItemDraft {
            title,
            link,
            fonte: blank_to_none(self.fonte),
            description: blank_to_none(self.description),
        })
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Partial update for an item.
///
/// `fonte` and `description` are double options: `Some(None)` is written as
/// `null`, which removes the field from the stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonte: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl ItemPatch {
    /// Rewrite every editable field from a validated draft
    pub fn from_draft(draft: &ItemDraft) -> Self {
        Self {
            title: Some(draft.title.clone()),
            link: Some(draft.link.clone()),
            fonte: Some(draft.fonte.clone()),
            description: Some(draft.description.clone()),
            ..Default::default()
        }
    }

    /// Re-parent and reposition in one write
    pub fn move_to(topic_id: impl Into<String>, order: i64) -> Self {
        Self {
            topic_id: Some(topic_id.into()),
            order: Some(order),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(tab_id) = &self.tab_id {
            item.tab_id = tab_id.clone();
        }
        if let Some(topic_id) = &self.topic_id {
            item.topic_id = topic_id.clone();
        }
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(link) = &self.link {
            item.link = link.clone();
        }
        if let Some(fonte) = &self.fonte {
            item.fonte = fonte.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(order) = self.order {
            item.order = Some(order);
        }
    }
}

impl Entity for Item {
    type Patch = ItemPatch;
    const COLLECTION: &'static str = "items";
    const MISSING_ORDER: i64 = ITEM_MISSING_ORDER;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn order_patch(order: i64) -> ItemPatch {
        ItemPatch { order: Some(order), ..Default::default() }
    }

    fn matches(&self, filter: &ParentFilter) -> bool {
        filter.accepts(non_empty(&self.tab_id), non_empty(&self.topic_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title_and_link() {
        let err = ItemDraft::new("  ", "https://a.dev", "", "").validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(ItemDraft::new("A", "", "", "").validate().is_err());
    }

    #[test]
    fn test_validate_drops_blank_optionals() {
        let draft = ItemDraft::new(" A ", "https://a.dev", "  ", "why").validate().unwrap();
        assert_eq!(draft.title, "A");
        assert_eq!(draft.fonte, None);
        assert_eq!(draft.description.as_deref(), Some("why"));
    }

    #[test]
    fn test_patch_clears_optional_with_null() {
        let draft = ItemDraft::new("A", "https://a.dev", "", "").validate().unwrap();
        let json = serde_json::to_value(ItemPatch::from_draft(&draft)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "A", "link": "https://a.dev", "fonte": null, "description": null })
        );
    }

    #[test]
    fn test_move_patch_shape() {
        let json = serde_json::to_value(ItemPatch::move_to("topic-2", 3)).unwrap();
        assert_eq!(json, serde_json::json!({ "topicId": "topic-2", "order": 3 }));
    }

    #[test]
    fn test_missing_order_sorts_last() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "tabId": "t", "topicId": "p", "title": "A", "link": "l"
        }))
        .unwrap();
        assert_eq!(item.sort_key(), ITEM_MISSING_ORDER);
        assert!(item.matches(&ParentFilter::TabTopic { tab_id: "t".into(), topic_id: "p".into() }));
    }
}
