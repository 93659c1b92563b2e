//! Configuration: spacing units, text metrics, animation timing.
//!
//! [`ObjectViewConfig`] follows the usual builder shape: start from
//! `ObjectViewConfig::default()` and chain `with_*` setters.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing units used by the composition rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Gap between widgets inside a row, and the bottom inset of the last row.
    pub medium: f32,
    /// Horizontal inset of every row, and the gap between rows.
    pub medium_large: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            medium: 8.0,
            medium_large: 16.0,
        }
    }
}

// ---------------------------------------------------------------------------
// TextMetrics
// ---------------------------------------------------------------------------

/// Fixed text metrics used to estimate a widget's natural content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Advance of one character, in points.
    pub char_width: i32,
    /// Height of one line of body text.
    pub line_height: i32,
    /// Height of a tappable control (buttons, toggles).
    pub control_height: i32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8,
            line_height: 20,
            control_height: 44,
        }
    }
}

impl TextMetrics {
    /// Width of a single line of text.
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    /// Width of the widest line in `text`.
    pub fn block_width(&self, text: &str) -> i32 {
        text.lines().map(|line| self.text_width(line)).max().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// ObjectViewConfig
// ---------------------------------------------------------------------------

/// Configuration for an [`ObjectView`](crate::object_view::ObjectView).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectViewConfig {
    pub spacing: Spacing,
    pub metrics: TextMetrics,
    /// Duration of each half of the description toggle choreography.
    pub animation_duration: Duration,
    /// Lines of description text shown while collapsed.
    pub collapsed_line_limit: usize,
}

impl Default for ObjectViewConfig {
    fn default() -> Self {
        Self {
            spacing: Spacing::default(),
            metrics: TextMetrics::default(),
            animation_duration: Duration::from_millis(400),
            collapsed_line_limit: 3,
        }
    }
}

impl ObjectViewConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing units (builder).
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the text metrics (builder).
    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the toggle animation duration (builder).
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Set how many description lines stay visible while collapsed (builder).
    pub fn with_collapsed_line_limit(mut self, lines: usize) -> Self {
        self.collapsed_line_limit = lines;
        self
    }
}
