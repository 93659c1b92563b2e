//! Error types for layout and the description toggle.

use crate::event::toggle::{ToggleDirection, ToggleState};
use crate::layout::constraint::Anchor;
use crate::view::ViewId;

/// Errors from turning the hierarchy and its constraints into frames.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout backend failed: {0}")]
    Backend(#[from] taffy::TaffyError),
    #[error("unsupported constraint on {item:?}.{anchor:?}: {message}")]
    UnsupportedConstraint {
        item: ViewId,
        anchor: Anchor,
        message: String,
    },
}

/// Errors from the expand/collapse state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("toggle is already animating ({state:?})")]
    InFlight { state: ToggleState },
    #[error("cannot {direction:?} while {state:?}")]
    Invalid {
        state: ToggleState,
        direction: ToggleDirection,
    },
    #[error("no transition in flight ({state:?})")]
    NotInFlight { state: ToggleState },
}
