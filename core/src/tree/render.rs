//! Render instructions
//!
//! A pure projection of (tree, UI state) into plain data the view layer
//! draws without further decisions. Every node is comparable so views can
//! memoize each part and redraw only what changed.

use crate::controller::{RenameTarget, UiState};
use crate::domain::{Item, ItemDraft};

use super::links::{display_host, input_width_ch};
use super::model::{BookmarkTree, TopicNode};

pub const EMPTY_TABS_MESSAGE: &str = "No tabs yet. Click \"+\" to create one.";
pub const NO_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RenderTree {
    pub tabs: Vec<TabButton>,
    pub content: TabContent,
    /// Question shown while a delete waits for confirmation
    pub confirm: Option<String>,
    pub alert: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabButton {
    pub id: String,
    pub label: Label,
    pub active: bool,
    /// Only the active tab offers a delete control
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Text(String),
    /// Inline input prefilled with the stored name
    Editing { initial: String, width_ch: usize },
}

impl Label {
    fn for_name(name: &str, editing: bool) -> Self {
        if editing {
            Label::Editing {
                initial: name.to_string(),
                width_ch: input_width_ch(name),
            }
        } else {
            Label::Text(name.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabContent {
    Empty { message: String },
    Topics(Vec<TopicView>),
}

impl Default for TabContent {
    fn default() -> Self {
        TabContent::Topics(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicView {
    pub id: String,
    pub label: Label,
    pub expanded: bool,
    pub items: Vec<ItemView>,
    pub add_form: FormView,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub link: LinkView,
    /// Hover text: the description, or a placeholder
    pub tooltip: String,
    pub source: Option<LinkView>,
    pub edit_form: Option<FormView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkView {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormTarget {
    NewItem { topic_id: String },
    EditItem { item_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormView {
    pub target: FormTarget,
    pub initial: ItemDraft,
    /// Changes whenever the form must come back empty
    pub generation: u32,
}

pub fn render(tree: &BookmarkTree, ui: &UiState) -> RenderTree {
    let tabs = tree
        .tabs
        .iter()
        .map(|tab| {
            let active = ui.current_tab.as_deref() == Some(tab.id.as_str());
            let editing = matches!(&ui.rename, Some(RenameTarget::Tab(id)) if *id == tab.id);
            TabButton {
                id: tab.id.clone(),
                label: Label::for_name(&tab.name, editing),
                active,
                deletable: active,
            }
        })
        .collect();

    let content = if tree.tabs.is_empty() {
        TabContent::Empty {
            message: EMPTY_TABS_MESSAGE.to_string(),
        }
    } else {
        TabContent::Topics(tree.topics.iter().map(|node| topic_view(node, ui)).collect())
    };

    RenderTree {
        tabs,
        content,
        confirm: ui.confirm.as_ref().map(|target| target.prompt().to_string()),
        alert: ui.alert.clone(),
        error: ui.error.clone(),
        loading: ui.loading,
    }
}

fn topic_view(node: &TopicNode, ui: &UiState) -> TopicView {
    let id = &node.topic.id;
    let editing = matches!(&ui.rename, Some(RenameTarget::Topic(t)) if t == id);

    TopicView {
        id: id.clone(),
        label: Label::for_name(&node.topic.name, editing),
        expanded: ui.expanded_topics.contains(id),
        items: node.items.iter().map(|item| item_view(item, ui)).collect(),
        add_form: FormView {
            target: FormTarget::NewItem { topic_id: id.clone() },
            initial: ItemDraft::default(),
            generation: ui.form_generations.get(id).copied().unwrap_or(0),
        },
    }
}

fn item_view(item: &Item, ui: &UiState) -> ItemView {
    let edit_form = ui.open_edit_forms.contains(&item.id).then(|| FormView {
        target: FormTarget::EditItem { item_id: item.id.clone() },
        initial: ItemDraft::from_item(item),
        generation: 0,
    });

    ItemView {
        id: item.id.clone(),
        title: item.title.clone(),
        link: LinkView {
            href: item.link.clone(),
            text: display_host(&item.link),
        },
        tooltip: item
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        source: item.fonte.as_ref().filter(|f| !f.trim().is_empty()).map(|fonte| LinkView {
            href: fonte.clone(),
            text: display_host(fonte),
        }),
        edit_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DeleteTarget;
    use crate::domain::{Tab, Topic};

    fn tree() -> BookmarkTree {
        let mut work = Tab::new("Work", 0);
        work.id = "work".into();
        let mut home = Tab::new("Home", 1);
        home.id = "home".into();

        let mut topic = Topic::new("work", "Reading", 0);
        topic.id = "reading".into();
        let draft = ItemDraft::new("Rust", "https://www.rust-lang.org/learn", "", "").validate().unwrap();
        let mut item = Item::from_draft("work", "reading", draft, 0);
        item.id = "i1".into();

        BookmarkTree {
            tabs: vec![work, home],
            loaded_tab: Some("work".into()),
            topics: vec![TopicNode { topic, items: vec![item] }],
        }
    }

    fn ui() -> UiState {
        UiState {
            current_tab: Some("work".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_store_shows_message() {
        let view = render(&BookmarkTree::default(), &UiState::default());
        assert!(view.tabs.is_empty());
        assert_eq!(
            view.content,
            TabContent::Empty { message: EMPTY_TABS_MESSAGE.to_string() }
        );
    }

    #[test]
    fn test_only_active_tab_is_deletable() {
        let view = render(&tree(), &ui());
        assert!(view.tabs[0].active && view.tabs[0].deletable);
        assert!(!view.tabs[1].active && !view.tabs[1].deletable);
    }

    #[test]
    fn test_rename_shows_input_with_stored_name() {
        let mut state = ui();
        state.rename = Some(RenameTarget::Tab("work".into()));
        let view = render(&tree(), &state);
        assert_eq!(
            view.tabs[0].label,
            Label::Editing { initial: "Work".into(), width_ch: 5 }
        );
        assert_eq!(view.tabs[1].label, Label::Text("Home".into()));
    }

    #[test]
    fn test_item_row() {
        let view = render(&tree(), &ui());
        let TabContent::Topics(topics) = view.content else {
            panic!("expected topics");
        };
        assert!(!topics[0].expanded);

        let item = &topics[0].items[0];
        assert_eq!(item.link.text, "rust-lang.org");
        assert_eq!(item.tooltip, NO_DESCRIPTION);
        assert_eq!(item.source, None);
        assert_eq!(item.edit_form, None);
    }

    #[test]
    fn test_edit_form_prefilled() {
        let mut state = ui();
        state.open_edit_forms.insert("i1".into());
        state.expanded_topics.insert("reading".into());
        state.form_generations.insert("reading".into(), 2);

        let view = render(&tree(), &state);
        let TabContent::Topics(topics) = view.content else {
            panic!("expected topics");
        };
        assert!(topics[0].expanded);
        assert_eq!(topics[0].add_form.generation, 2);
        let form = topics[0].items[0].edit_form.as_ref().unwrap();
        assert_eq!(form.initial.title, "Rust");
    }

    #[test]
    fn test_add_form_changes_only_with_generation() {
        let add_form = |tree: &BookmarkTree, state: &UiState| match render(tree, state).content {
            TabContent::Topics(topics) => topics[0].add_form.clone(),
            TabContent::Empty { .. } => panic!("expected topics"),
        };
        let before = add_form(&tree(), &ui());

        // Another item, a rename and expansion leave the form alone
        let mut grown = tree();
        let draft = ItemDraft::new("Book", "https://doc.rust-lang.org/book", "", "").validate().unwrap();
        grown.topics[0].items.push(Item::from_draft("work", "reading", draft, 1));
        let mut state = ui();
        state.expanded_topics.insert("reading".into());
        state.rename = Some(RenameTarget::Topic("reading".into()));
        assert_eq!(add_form(&grown, &state), before);

        state.form_generations.insert("reading".into(), 1);
        assert_ne!(add_form(&grown, &state), before);
    }

    #[test]
    fn test_confirm_prompt() {
        let mut state = ui();
        state.confirm = Some(DeleteTarget::Item("i1".into()));
        let view = render(&tree(), &state);
        assert_eq!(view.confirm.as_deref(), Some(DeleteTarget::Item("i1".into()).prompt()));
    }
}
