//! Per-widget callback surfaces.
//!
//! Each interactive widget type talks to its own delegate trait. The
//! [`EventRouter`](crate::event::EventRouter) implements all of them and
//! re-expresses every callback on the single outward
//! [`ObjectViewDelegate`](crate::event::ObjectViewDelegate).

use std::rc::Rc;

use crate::component::{
    CollapsableDescriptionComponent, Component, IconButtonComponent, MessageButtonComponent,
    PhoneNumberComponent,
};
use crate::widgets::{CollapsableDescriptionWidget, IconButtonWidget, MessageButtonWidget, PhoneNumberWidget};

pub trait PhoneNumberWidgetDelegate {
    fn did_tap_show_phone_number(&self, widget: &PhoneNumberWidget, component: &PhoneNumberComponent);
    fn did_tap_phone_number(&self, widget: &PhoneNumberWidget, component: &PhoneNumberComponent);
    /// Synchronous query: may the number be revealed?
    fn can_show_phone_number(&self, widget: &PhoneNumberWidget, component: &PhoneNumberComponent) -> bool;
}

pub trait MessageButtonWidgetDelegate {
    fn did_tap_send_message(&self, widget: &MessageButtonWidget, component: &MessageButtonComponent);
}

pub trait IconButtonWidgetDelegate {
    fn did_tap_button(&self, widget: &IconButtonWidget, component: &IconButtonComponent);
}

/// Receives the description toggle taps. The widget is passed as `Rc` so the
/// receiver can keep a weak handle across animation boundaries.
pub trait CollapsableDescriptionWidgetDelegate {
    fn did_tap_expand_description(
        &self,
        widget: &Rc<CollapsableDescriptionWidget>,
        component: &CollapsableDescriptionComponent,
    );
    fn did_tap_hide_description(
        &self,
        widget: &Rc<CollapsableDescriptionWidget>,
        component: &CollapsableDescriptionComponent,
    );
}

/// Which kind of widget emitted a generic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Link,
    SafePay,
    LoanPrice,
    AdReporter,
}

/// Generic "selected" callback shared by link, safe-pay, loan-price and
/// ad-reporter widgets.
pub trait SelectionWidgetDelegate {
    fn did_select_component(&self, source: SelectionSource, component: &Component);
}

/// Everything the widget factory needs from an event sink.
pub trait WidgetEventSink:
    PhoneNumberWidgetDelegate
    + MessageButtonWidgetDelegate
    + IconButtonWidgetDelegate
    + CollapsableDescriptionWidgetDelegate
    + SelectionWidgetDelegate
{
}

impl<T> WidgetEventSink for T where
    T: PhoneNumberWidgetDelegate
        + MessageButtonWidgetDelegate
        + IconButtonWidgetDelegate
        + CollapsableDescriptionWidgetDelegate
        + SelectionWidgetDelegate
{
}
