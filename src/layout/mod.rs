//! Layout: adjacency constraints, row stacks, and the taffy-backed engine.

pub mod constraint;
pub mod engine;
pub mod stack;

pub use constraint::{compose_rows, Anchor, Constraint};
pub use engine::{IntrinsicSizes, LayoutEngine};
pub use stack::{layout_row, Distribution, RowContainer, StackStyle};
