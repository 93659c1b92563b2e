//! Builds the widget for a component and wires it to an event sink.

use std::rc::{Rc, Weak};

use crate::component::Component;
use crate::widget::delegate::{
    CollapsableDescriptionWidgetDelegate, IconButtonWidgetDelegate, MessageButtonWidgetDelegate,
    PhoneNumberWidgetDelegate, WidgetEventSink,
};
use crate::widget::traits::{Widget, WidgetInstance};
use crate::widgets::{
    CollapsableDescriptionWidget, IconButtonWidget, MessageButtonWidget, PhoneNumberWidget, PriceWidget,
    TableWidget,
};

/// Widget for `component`, or `None` for kinds without a built-in widget
/// (link, safe-pay, loan-price, ad-reporter).
///
/// Interactive widgets get a weak handle on `sink`. The returned instance
/// is already opted into constraint-based layout.
pub fn build_widget<S>(component: &Component, sink: &Rc<S>) -> Option<WidgetInstance>
where
    S: WidgetEventSink + 'static,
{
    let widget: Rc<dyn Widget> = match component {
        Component::PhoneNumber(c) => {
            let sink: Weak<dyn PhoneNumberWidgetDelegate> = Rc::downgrade(sink) as Weak<S>;
            Rc::new(PhoneNumberWidget::new(c.clone()).with_delegate(sink))
        }
        Component::MessageButton(c) => {
            let sink: Weak<dyn MessageButtonWidgetDelegate> = Rc::downgrade(sink) as Weak<S>;
            Rc::new(MessageButtonWidget::new(c.clone()).with_delegate(sink))
        }
        Component::IconButton(c) => {
            let sink: Weak<dyn IconButtonWidgetDelegate> = Rc::downgrade(sink) as Weak<S>;
            Rc::new(IconButtonWidget::new(c.clone()).with_delegate(sink))
        }
        Component::CollapsableDescription(c) => {
            let sink: Weak<dyn CollapsableDescriptionWidgetDelegate> = Rc::downgrade(sink) as Weak<S>;
            Rc::new(CollapsableDescriptionWidget::new(c.clone()).with_delegate(sink))
        }
        Component::Price(c) => Rc::new(PriceWidget::new(c.clone())),
        Component::Table(c) => Rc::new(TableWidget::new(c.clone())),
        Component::Link(_) | Component::SafePay(_) | Component::LoanPrice(_) | Component::AdReporter(_) => {
            return None;
        }
    };
    Some(WidgetInstance::new(widget).constrained())
}
