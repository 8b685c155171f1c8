//! Bookmark Tree
//!
//! The in-memory picture of what is on screen: every tab, plus the topics
//! and items of the one tab that is loaded.

mod model;
mod loader;
mod links;
mod render;

pub use model::{BookmarkTree, TopicNode};
pub use loader::{load_tab, load_topic_node, load_tree};
pub use links::{display_host, input_width_ch};
pub use render::{
    render, FormTarget, FormView, ItemView, Label, LinkView, RenderTree, TabButton, TabContent,
    TopicView, EMPTY_TABS_MESSAGE, NO_DESCRIPTION,
};
