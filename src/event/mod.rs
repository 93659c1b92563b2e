//! Event routing: outward collaborators, the router, the description toggle
//! state machine and the scheduler that drives it.

pub mod delegate;
pub mod router;
pub mod scheduler;
pub mod toggle;

pub use delegate::{ObjectViewDataSource, ObjectViewDelegate};
pub use router::EventRouter;
pub use scheduler::{Animations, Completion, ImmediateScheduler, Scheduler, Timeline};
pub use toggle::{DescriptionToggle, ToggleDirection, ToggleState};
