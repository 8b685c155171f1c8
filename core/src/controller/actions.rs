use crate::domain::{ItemDraft, Tab, Topic, Item};
use crate::ordering::CascadeReport;
use crate::tree::{BookmarkTree, TopicNode};

use super::state::{DeleteTarget, RenameTarget};

/// User gestures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    ClickTab(String),
    AddTab,
    BeginRename(RenameTarget),
    /// Enter or focus loss on the inline input
    CommitRename { value: String },
    AddTopic,
    ToggleTopic(String),
    SubmitNewItem { topic_id: String, draft: ItemDraft },
    ToggleEditForm(String),
    SubmitEdit { item_id: String, draft: ItemDraft },
    RequestDelete(DeleteTarget),
    ConfirmDelete,
    CancelDelete,
    /// Slots are insertion indices into the list as it was before the drag
    DropTab { tab_id: String, slot: usize },
    DropTopic { topic_id: String, slot: usize },
    DropItem { item_id: String, topic_id: String, slot: usize },
    DismissAlert,
    DismissError,
}

/// Store work requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadTree { preferred_tab: Option<String> },
    LoadTab { tab_id: String },
    CreateTab { name: String },
    RenameTab { id: String, name: String },
    DeleteTab { id: String },
    CreateTopic { tab_id: String, name: String },
    RenameTopic { id: String, name: String },
    DeleteTopic { id: String },
    CreateItem { tab_id: String, topic_id: String, draft: ItemDraft },
    UpdateItem { id: String, draft: ItemDraft },
    DeleteItem { id: String },
    RenumberTabs { ids: Vec<String> },
    RenumberTopics { ids: Vec<String> },
    RenumberItems { topic_id: String, ids: Vec<String> },
    MoveItem {
        item_id: String,
        to_topic: String,
        index: usize,
        source_ids: Vec<String>,
        dest_ids: Vec<String>,
    },
}

/// Result of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    TreeLoaded(BookmarkTree),
    TabLoaded { tab_id: String, topics: Vec<TopicNode> },
    TabCreated(Tab),
    TabRenamed { id: String },
    TabDeleted { id: String, report: CascadeReport },
    TopicCreated(Topic),
    TopicRenamed { id: String },
    TopicDeleted { id: String, report: CascadeReport },
    ItemCreated(Item),
    ItemUpdated { id: String, draft: ItemDraft },
    ItemDeleted { id: String },
    Renumbered { collection: &'static str, count: usize },
    ItemMoved { item_id: String },
}
