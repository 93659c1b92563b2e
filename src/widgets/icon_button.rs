//! Icon button widget: an icon with an optional title.

use std::any::Any;
use std::rc::{Rc, Weak};

use crate::component::IconButtonComponent;
use crate::config::ObjectViewConfig;
use crate::geometry::Size;
use crate::widget::delegate::IconButtonWidgetDelegate;
use crate::widget::traits::Widget;

pub struct IconButtonWidget {
    component: IconButtonComponent,
    delegate: Option<Weak<dyn IconButtonWidgetDelegate>>,
}

impl IconButtonWidget {
    pub fn new(component: IconButtonComponent) -> Self {
        Self {
            component,
            delegate: None,
        }
    }

    /// Set the event sink (builder).
    pub fn with_delegate(mut self, delegate: Weak<dyn IconButtonWidgetDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn component(&self) -> &IconButtonComponent {
        &self.component
    }

    pub fn tap(&self) {
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.did_tap_button(self, &self.component);
        }
    }
}

impl Widget for IconButtonWidget {
    fn widget_type(&self) -> &'static str {
        "IconButtonWidget"
    }

    fn label(&self) -> String {
        if self.component.title.is_empty() {
            format!("[{}]", self.component.icon)
        } else {
            format!("[{}] {}", self.component.icon, self.component.title)
        }
    }

    /// Square icon the height of a control, then the title if there is one.
    fn intrinsic_size(&self, config: &ObjectViewConfig) -> Size {
        let metrics = &config.metrics;
        let title = if self.component.title.is_empty() {
            0
        } else {
            metrics.char_width + metrics.text_width(&self.component.title)
        };
        Size::new(metrics.control_height + title, metrics.control_height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
