//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod filter;
mod tab;
mod topic;
mod item;

pub use entity::{Entity, DomainError, DomainResult};
pub use filter::ParentFilter;
pub use tab::{Tab, TabPatch};
pub use topic::{Topic, TopicPatch};
pub use item::{Item, ItemDraft, ItemPatch};
