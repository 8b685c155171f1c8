//! UI Components
//!
//! Each component draws one part of the render tree and reports gestures
//! through the app context.

mod tab_strip;
mod tab_content;
mod topic_card;
mod item_row;
mod item_form;
mod rename_input;
mod drop_zone;
mod dialogs;
mod log_panel;

pub use tab_strip::TabStrip;
pub use tab_content::TabContentView;
pub use topic_card::TopicCard;
pub use item_row::ItemRow;
pub use item_form::ItemForm;
pub use rename_input::RenameInput;
pub use drop_zone::DropZone;
pub use dialogs::{AlertModal, ConfirmDialog, ErrorBanner};
pub use log_panel::LogPanel;

/// Drag groups: rows only move within lists of their own group
pub const TAB_GROUP: &str = "tabs";
pub const TOPIC_GROUP: &str = "topics";
pub const ITEM_GROUP: &str = "items";
