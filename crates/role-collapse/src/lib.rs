//! Role Collapse
//!
//! Progressive enhancement that hides older career roles behind a single
//! "Show N more" toggle and remembers the reader's choice in local storage.
//!
//! The controller is a plain state machine over two ports:
//! - [`RoleListView`] mirrors state onto markup
//! - [`PreferenceStore`] persists the expanded flag
//!
//! [`dom`] provides the browser implementations of both.

mod config;
mod controller;
mod store;
mod view;

pub mod dom;

pub use config::{CollapseConfig, MAX_VISIBLE, STORAGE_KEY};
pub use controller::{toggle_label, CollapsibleList, ListState};
pub use store::{read_preference, write_preference, MemoryStore, PreferenceStore, StorageError};
pub use view::{RoleItem, RoleListView};
