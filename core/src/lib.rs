//! Tab Marks Core
//!
//! Layered architecture:
//! - domain: Tab / Topic / Item records and their invariants
//! - repository: document store contracts, REST client, in-memory store
//! - ordering: dense sibling ordering and cascading deletes
//! - tree: the loaded tab/topic/item tree and its render instructions
//! - controller: UI actions, store commands and their completions
//! - config: store location and credentials

pub mod config;
pub mod controller;
pub mod domain;
pub mod ordering;
pub mod repository;
pub mod tree;
