//! Ordering Manager
//!
//! Keeps the explicit `order` field of every sibling set consistent with
//! what the user sees, and removes descendants when a parent is deleted.
//! - positioning: slot arithmetic, bulk renumbering, cross-topic moves
//! - cascade: tab/topic deletes with their dependent records

mod positioning;
mod cascade;

pub use positioning::{insert_at, move_item, move_within, next_order, renumber};
pub use cascade::{cascade_targets, delete_tab_cascade, delete_topic_cascade, CascadeReport};
