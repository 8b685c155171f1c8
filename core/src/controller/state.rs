use std::collections::{BTreeMap, BTreeSet};

use crate::tree::{render, BookmarkTree, RenderTree};

/// Everything the application knows: loaded records plus view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub tree: BookmarkTree,
    pub ui: UiState,
}

impl Session {
    pub fn render(&self) -> RenderTree {
        render(&self.tree, &self.ui)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Selected tab; may run ahead of `tree.loaded_tab` while loading
    pub current_tab: Option<String>,
    /// Topics are collapsed unless listed here
    pub expanded_topics: BTreeSet<String>,
    pub rename: Option<RenameTarget>,
    /// Items whose inline edit form is open
    pub open_edit_forms: BTreeSet<String>,
    /// Per-topic counter; bumping it resets the add-item form
    pub form_generations: BTreeMap<String, u32>,
    pub confirm: Option<DeleteTarget>,
    pub alert: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

impl UiState {
    /// Forget rename, expansion, form and edit state of records no longer in `tree`
    pub fn prune(&mut self, tree: &BookmarkTree) {
        self.expanded_topics.retain(|id| tree.topic(id).is_some());
        self.form_generations.retain(|id, _| tree.topic(id).is_some());
        self.open_edit_forms.retain(|id| tree.item(id).is_some());
        let stale_rename = match &self.rename {
            Some(RenameTarget::Tab(id)) => tree.tab(id).is_none(),
            Some(RenameTarget::Topic(id)) => tree.topic(id).is_none(),
            None => false,
        };
        if stale_rename {
            self.rename = None;
        }
    }
}

/// Name currently shown as an inline input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenameTarget {
    Tab(String),
    Topic(String),
}

/// Delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeleteTarget {
    Tab(String),
    Topic(String),
    Item(String),
}

impl DeleteTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            DeleteTarget::Tab(_) => "Delete this tab and all of its topics and items?",
            DeleteTarget::Topic(_) => "Delete this topic and all of its items?",
            DeleteTarget::Item(_) => "Delete this item?",
        }
    }
}
