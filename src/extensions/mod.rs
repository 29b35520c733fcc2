//! Opt-in models layered beside the core controller API.

mod context_menu;

pub use context_menu::{ContextMenu, ContextMenuAction, ContextMenuItem, OpenContextMenu};
