//! # objectview
//!
//! Dynamic view composition for an object (ad) detail screen.
//!
//! A data source hands an [`ObjectView`](object_view::ObjectView) rows of typed
//! [`Component`](component::Component)s. The view builds a widget per component,
//! flows each row horizontally, stacks the rows vertically inside a scrollable
//! content area, and funnels every widget interaction into one
//! [`ObjectViewDelegate`](event::ObjectViewDelegate).
//!
//! ## Core Systems
//!
//! - **[`component`]**: Closed set of component descriptors
//! - **[`view`]**: Slotmap-backed view hierarchy
//! - **[`layout`]**: Row constraints and the taffy-powered layout engine
//! - **[`widget`]**: Widget trait, per-widget delegates, factory, scroll state
//! - **[`widgets`]**: Built-in widgets: PhoneNumber, MessageButton, IconButton,
//!   CollapsableDescription, Price, Table
//! - **[`event`]**: Event router, description toggle state machine, scheduler
//! - **[`object_view`]**: The composition container
//! - **[`testing`]**: Headless pilot, recording collaborators, tree dumps
//! - **[`geometry`]**: Offset, Size, Region primitives
//! - **[`config`]**: Spacing, text metrics, animation timing

// Foundation
pub mod config;
pub mod error;
pub mod geometry;

// Data model
pub mod component;
pub mod view;

// Layout
pub mod layout;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Composition
pub mod object_view;

// Test support
pub mod testing;

pub use component::Component;
pub use config::ObjectViewConfig;
pub use error::{LayoutError, TransitionError};
pub use event::{ObjectViewDataSource, ObjectViewDelegate};
pub use object_view::ObjectView;
