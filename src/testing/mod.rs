//! Headless testing helpers.
//!
//! [`Pilot`] drives an [`ObjectView`](crate::object_view::ObjectView) on a
//! virtual [`Timeline`](crate::event::Timeline) with a [`StaticDataSource`]
//! and a [`RecordingDelegate`] attached. [`tree_to_string`] dumps the
//! hierarchy with frames for snapshot-style assertions.

pub mod collaborators;
pub mod pilot;
pub mod snapshot;

pub use collaborators::{DelegateEvent, RecordingDelegate, StaticDataSource};
pub use pilot::Pilot;
pub use snapshot::tree_to_string;
