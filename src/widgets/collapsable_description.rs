//! Collapsable description widget.
//!
//! Shows a few lines of text and a "Show more" button. The expand/collapse
//! choreography itself is run by the event router; the widget only owns
//! its toggle state and the visual bits the choreography flips.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::component::CollapsableDescriptionComponent;
use crate::config::ObjectViewConfig;
use crate::error::TransitionError;
use crate::event::toggle::{DescriptionToggle, ToggleDirection, ToggleState};
use crate::geometry::Size;
use crate::widget::delegate::CollapsableDescriptionWidgetDelegate;
use crate::widget::traits::Widget;

const SHOW_MORE: &str = "Show more";
const SHOW_LESS: &str = "Show less";

pub struct CollapsableDescriptionWidget {
    component: CollapsableDescriptionComponent,
    delegate: Option<Weak<dyn CollapsableDescriptionWidgetDelegate>>,
    toggle: Cell<DescriptionToggle>,
    /// Whether the full text is laid out. Lags the toggle until
    /// [`update_button_title`](Self::update_button_title).
    expanded: Cell<bool>,
    button_showing: Cell<bool>,
    button_title: RefCell<String>,
}

impl CollapsableDescriptionWidget {
    pub fn new(component: CollapsableDescriptionComponent) -> Self {
        Self {
            component,
            delegate: None,
            toggle: Cell::new(DescriptionToggle::new()),
            expanded: Cell::new(false),
            button_showing: Cell::new(true),
            button_title: RefCell::new(SHOW_MORE.to_owned()),
        }
    }

    /// Set the event sink (builder).
    pub fn with_delegate(mut self, delegate: Weak<dyn CollapsableDescriptionWidgetDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn component(&self) -> &CollapsableDescriptionComponent {
        &self.component
    }

    /// The toggle button was tapped.
    pub fn tap_toggle(self: &Rc<Self>) {
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        if self.is_expanded() {
            delegate.did_tap_hide_description(self, &self.component);
        } else {
            delegate.did_tap_expand_description(self, &self.component);
        }
    }

    pub fn toggle_state(&self) -> ToggleState {
        self.toggle.get().state()
    }

    pub fn begin_transition(&self, direction: ToggleDirection) -> Result<ToggleState, TransitionError> {
        let mut toggle = self.toggle.get();
        let state = toggle.begin(direction)?;
        self.toggle.set(toggle);
        Ok(state)
    }

    pub fn finish_transition(&self) -> Result<ToggleState, TransitionError> {
        let mut toggle = self.toggle.get();
        let state = toggle.finish()?;
        self.toggle.set(toggle);
        Ok(state)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn is_button_showing(&self) -> bool {
        self.button_showing.get()
    }

    pub fn set_button_showing(&self, showing: bool) {
        self.button_showing.set(showing);
    }

    pub fn button_title(&self) -> String {
        self.button_title.borrow().clone()
    }

    /// Bring the text and the button title in line with the toggle.
    pub fn update_button_title(&self) {
        let expanded = self.toggle.get().presents_expanded();
        self.expanded.set(expanded);
        *self.button_title.borrow_mut() = if expanded { SHOW_LESS } else { SHOW_MORE }.to_owned();
    }

    fn visible_lines(&self, limit: usize) -> usize {
        let lines = self.component.text.lines().count();
        if self.is_expanded() {
            lines
        } else {
            lines.min(limit)
        }
    }
}

impl Widget for CollapsableDescriptionWidget {
    fn widget_type(&self) -> &'static str {
        "CollapsableDescriptionWidget"
    }

    fn label(&self) -> String {
        self.component
            .title
            .clone()
            .or_else(|| self.component.text.lines().next().map(str::to_owned))
            .unwrap_or_default()
    }

    /// Title line, visible text lines, then the toggle button.
    fn intrinsic_size(&self, config: &ObjectViewConfig) -> Size {
        let metrics = &config.metrics;
        let title_width = self.component.title.as_deref().map(|t| metrics.text_width(t));
        let width = metrics
            .block_width(&self.component.text)
            .max(title_width.unwrap_or(0))
            .max(metrics.text_width(SHOW_LESS));
        let lines = self.visible_lines(config.collapsed_line_limit) as i32 + i32::from(title_width.is_some());
        Size::new(width, lines * metrics.line_height + metrics.control_height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
