//! View hierarchy: slotmap-backed arena of the root, scroll view, content view,
//! rows and widgets.

pub mod node;
pub mod tree;

pub use node::{LayoutMode, ViewData, ViewId, ViewKind};
pub use tree::ViewTree;
