// Public library interface for storefront-rs
// The debug/validation binaries use the same modules

pub mod config;
pub mod layout;
pub mod source;
pub mod tree;
pub mod ui;

pub use crate::layout::{compute_layout, LayoutConfig, PanelLayout, SizeBounds};
pub use crate::source::types::CategoryRecord;
pub use crate::tree::arena::{CategoryForest, CategoryNode, NodeId};
pub use crate::tree::build_category_tree;
pub use crate::tree::resolve::{resolve_path, PathMatch};
