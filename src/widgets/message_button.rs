//! Message button widget: opens a conversation with the recipient.

use std::any::Any;
use std::rc::{Rc, Weak};

use crate::component::MessageButtonComponent;
use crate::config::ObjectViewConfig;
use crate::geometry::Size;
use crate::widget::delegate::MessageButtonWidgetDelegate;
use crate::widget::traits::Widget;

pub struct MessageButtonWidget {
    component: MessageButtonComponent,
    delegate: Option<Weak<dyn MessageButtonWidgetDelegate>>,
}

impl MessageButtonWidget {
    pub fn new(component: MessageButtonComponent) -> Self {
        Self {
            component,
            delegate: None,
        }
    }

    /// Set the event sink (builder).
    pub fn with_delegate(mut self, delegate: Weak<dyn MessageButtonWidgetDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn component(&self) -> &MessageButtonComponent {
        &self.component
    }

    pub fn tap(&self) {
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.did_tap_send_message(self, &self.component);
        }
    }
}

impl Widget for MessageButtonWidget {
    fn widget_type(&self) -> &'static str {
        "MessageButtonWidget"
    }

    fn label(&self) -> String {
        self.component.title.clone()
    }

    fn intrinsic_size(&self, config: &ObjectViewConfig) -> Size {
        let metrics = &config.metrics;
        Size::new(
            metrics.text_width(&self.component.title) + 2 * metrics.char_width,
            metrics.control_height,
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Sink(RefCell<Vec<String>>);

    impl MessageButtonWidgetDelegate for Sink {
        fn did_tap_send_message(&self, _: &MessageButtonWidget, component: &MessageButtonComponent) {
            self.0.borrow_mut().push(component.recipient_id.clone());
        }
    }

    #[test]
    fn tap_forwards_component() {
        let sink = Rc::new(Sink::default());
        let weak: Weak<dyn MessageButtonWidgetDelegate> = Rc::downgrade(&sink) as Weak<Sink>;
        let widget = MessageButtonWidget::new(MessageButtonComponent::new("u1")).with_delegate(weak);
        widget.tap();
        assert_eq!(*sink.0.borrow(), vec!["u1".to_owned()]);
    }

    #[test]
    fn tap_without_delegate_is_silent() {
        MessageButtonWidget::new(MessageButtonComponent::new("u1")).tap();
    }

    #[test]
    fn intrinsic_size() {
        let widget = MessageButtonWidget::new(MessageButtonComponent::new("u1"));
        // "Send message" = 12 chars.
        assert_eq!(widget.intrinsic_size(&ObjectViewConfig::default()), Size::new(112, 44));
    }
}
