//! Phone number widget: a masked number the user can reveal or call.

use std::any::Any;
use std::rc::{Rc, Weak};

use crate::component::PhoneNumberComponent;
use crate::config::ObjectViewConfig;
use crate::geometry::Size;
use crate::widget::delegate::PhoneNumberWidgetDelegate;
use crate::widget::traits::Widget;

/// Shows the component title until the delegate allows the number itself.
pub struct PhoneNumberWidget {
    component: PhoneNumberComponent,
    delegate: Option<Weak<dyn PhoneNumberWidgetDelegate>>,
}

impl PhoneNumberWidget {
    pub fn new(component: PhoneNumberComponent) -> Self {
        Self {
            component,
            delegate: None,
        }
    }

    /// Set the event sink (builder). The widget never keeps it alive.
    pub fn with_delegate(mut self, delegate: Weak<dyn PhoneNumberWidgetDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn component(&self) -> &PhoneNumberComponent {
        &self.component
    }

    fn delegate(&self) -> Option<Rc<dyn PhoneNumberWidgetDelegate>> {
        self.delegate.as_ref()?.upgrade()
    }

    /// The user asked to reveal the number.
    pub fn tap_show(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.did_tap_show_phone_number(self, &self.component);
        }
    }

    /// The user tapped the revealed number.
    pub fn tap_phone_number(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.did_tap_phone_number(self, &self.component);
        }
    }

    /// Whether the number may be shown. `false` without a delegate.
    pub fn can_show_phone_number(&self) -> bool {
        self.delegate()
            .is_some_and(|delegate| delegate.can_show_phone_number(self, &self.component))
    }

    /// Text currently on display: the number once allowed, the title before.
    pub fn display_text(&self) -> &str {
        if self.can_show_phone_number() {
            &self.component.phone_number
        } else {
            &self.component.title
        }
    }
}

impl Widget for PhoneNumberWidget {
    fn widget_type(&self) -> &'static str {
        "PhoneNumberWidget"
    }

    fn label(&self) -> String {
        self.component.title.clone()
    }

    fn intrinsic_size(&self, config: &ObjectViewConfig) -> Size {
        let metrics = &config.metrics;
        let text = metrics
            .text_width(&self.component.title)
            .max(metrics.text_width(&self.component.phone_number));
        Size::new(text + 2 * metrics.char_width, metrics.control_height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
