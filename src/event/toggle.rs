//! Expand/collapse state machine for the description widget.
//!
//! ```text
//!   Collapsed --begin(Expand)--> Expanding --finish--> Expanded
//!   Expanded --begin(Collapse)--> Collapsing --finish--> Collapsed
//! ```
//!
//! A transition may only start from a resting state. A tap that arrives
//! while one is in flight is rejected.

use crate::error::TransitionError;

/// Where the description toggle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

impl ToggleState {
    /// Not animating.
    pub fn is_resting(self) -> bool {
        matches!(self, ToggleState::Collapsed | ToggleState::Expanded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    Expand,
    Collapse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescriptionToggle {
    state: ToggleState,
}

impl DescriptionToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Start a transition in `direction`.
    pub fn begin(&mut self, direction: ToggleDirection) -> Result<ToggleState, TransitionError> {
        let next = match (self.state, direction) {
            (ToggleState::Collapsed, ToggleDirection::Expand) => ToggleState::Expanding,
            (ToggleState::Expanded, ToggleDirection::Collapse) => ToggleState::Collapsing,
            (state, _) if !state.is_resting() => {
                return Err(TransitionError::InFlight { state });
            }
            (state, direction) => {
                return Err(TransitionError::Invalid { state, direction });
            }
        };
        self.state = next;
        Ok(next)
    }

    /// Settle the in-flight transition.
    pub fn finish(&mut self) -> Result<ToggleState, TransitionError> {
        let next = match self.state {
            ToggleState::Expanding => ToggleState::Expanded,
            ToggleState::Collapsing => ToggleState::Collapsed,
            state => return Err(TransitionError::NotInFlight { state }),
        };
        self.state = next;
        Ok(next)
    }

    /// Whether the text should be laid out fully. True as soon as an
    /// expansion starts, false as soon as a collapse starts.
    pub fn presents_expanded(&self) -> bool {
        matches!(self.state, ToggleState::Expanding | ToggleState::Expanded)
    }
}
