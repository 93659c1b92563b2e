//! Event router: the single sink every widget reports to.
//!
//! Implements each widget delegate trait and re-expresses the callback on the
//! view's one [`ObjectViewDelegate`](super::ObjectViewDelegate). Holds only a
//! weak back-reference to the view; nothing it does keeps the view, the
//! delegate or a widget alive.

use std::rc::{Rc, Weak};

use crate::component::{
    CollapsableDescriptionComponent, Component, IconButtonComponent, MessageButtonComponent,
    PhoneNumberComponent,
};
use crate::event::delegate::ObjectViewDelegate;
use crate::event::toggle::ToggleDirection;
use crate::object_view::{ObjectView, ViewShared};
use crate::widget::delegate::{
    CollapsableDescriptionWidgetDelegate, IconButtonWidgetDelegate, MessageButtonWidgetDelegate,
    PhoneNumberWidgetDelegate, SelectionSource, SelectionWidgetDelegate,
};
use crate::widgets::{CollapsableDescriptionWidget, IconButtonWidget, MessageButtonWidget, PhoneNumberWidget};

pub struct EventRouter {
    view: Weak<ViewShared>,
}

impl EventRouter {
    pub(crate) fn new(view: Weak<ViewShared>) -> Self {
        Self { view }
    }

    /// Run `f` against the delegate, if both the view and the delegate are
    /// still alive. No view state is borrowed while `f` runs.
    fn with_delegate<R>(&self, f: impl FnOnce(&ObjectView, &dyn ObjectViewDelegate) -> R) -> Option<R> {
        let view = ObjectView::upgrade(&self.view)?;
        let delegate = view.delegate()?;
        Some(f(&view, delegate.as_ref()))
    }

    /// Hide the toggle, notify the delegate, relabel, reveal, settle.
    fn run_toggle(
        &self,
        widget: &Rc<CollapsableDescriptionWidget>,
        component: &CollapsableDescriptionComponent,
        direction: ToggleDirection,
    ) {
        let Some(view) = ObjectView::upgrade(&self.view) else {
            return;
        };
        if let Err(err) = widget.begin_transition(direction) {
            log::debug!("description toggle rejected: {err}");
            return;
        }
        log::debug!("description toggle: {direction:?}");

        let duration = view.config().animation_duration;
        let hide = {
            let view = self.view.clone();
            let widget = Rc::downgrade(widget);
            Box::new(move || {
                relayout(&view);
                if let Some(widget) = widget.upgrade() {
                    widget.set_button_showing(false);
                }
            })
        };
        let swap = {
            let view = self.view.clone();
            let widget = Rc::downgrade(widget);
            let component = component.clone();
            Box::new(move |_finished: bool| {
                let (Some(view), Some(widget)) = (ObjectView::upgrade(&view), widget.upgrade()) else {
                    log::trace!("description toggle dropped: view or widget is gone");
                    return;
                };
                if let Some(delegate) = view.delegate() {
                    match direction {
                        ToggleDirection::Expand => delegate.did_tap_expand_description(&view, &component),
                        ToggleDirection::Collapse => delegate.did_tap_hide_description(&view, &component),
                    }
                }
                widget.update_button_title();
                reveal(&view, &widget);
            })
        };
        view.scheduler().animate(duration, hide, swap);
    }
}

/// Second half of the choreography: show the toggle again, then settle.
fn reveal(view: &ObjectView, widget: &Rc<CollapsableDescriptionWidget>) {
    let animations = {
        let view = view.downgrade();
        let widget = Rc::downgrade(widget);
        Box::new(move || {
            if let Some(widget) = widget.upgrade() {
                widget.set_button_showing(true);
            }
            relayout(&view);
        })
    };
    let completion = {
        let widget = Rc::downgrade(widget);
        Box::new(move |_finished: bool| {
            let Some(widget) = widget.upgrade() else {
                return;
            };
            match widget.finish_transition() {
                Ok(state) => log::debug!("description toggle settled: {state:?}"),
                Err(err) => log::debug!("description toggle already settled: {err}"),
            }
        })
    };
    view.scheduler().animate(view.config().animation_duration, animations, completion);
}

fn relayout(view: &Weak<ViewShared>) {
    if let Some(view) = ObjectView::upgrade(view) {
        if let Err(err) = view.layout_if_needed() {
            log::warn!("layout during description toggle failed: {err}");
        }
    }
}

impl PhoneNumberWidgetDelegate for EventRouter {
    fn did_tap_show_phone_number(&self, _widget: &PhoneNumberWidget, component: &PhoneNumberComponent) {
        self.with_delegate(|view, delegate| delegate.did_tap_show_phone_number(view, component));
    }

    fn did_tap_phone_number(&self, _widget: &PhoneNumberWidget, component: &PhoneNumberComponent) {
        self.with_delegate(|view, delegate| delegate.did_tap_phone_number(view, component));
    }

    fn can_show_phone_number(&self, _widget: &PhoneNumberWidget, component: &PhoneNumberComponent) -> bool {
        self.with_delegate(|view, delegate| delegate.can_show_phone_number(view, component))
            .unwrap_or(false)
    }
}

impl MessageButtonWidgetDelegate for EventRouter {
    fn did_tap_send_message(&self, _widget: &MessageButtonWidget, component: &MessageButtonComponent) {
        self.with_delegate(|view, delegate| delegate.did_tap_send_message(view, component));
    }
}

impl IconButtonWidgetDelegate for EventRouter {
    fn did_tap_button(&self, _widget: &IconButtonWidget, component: &IconButtonComponent) {
        self.with_delegate(|view, delegate| delegate.did_tap_button(view, component));
    }
}

impl CollapsableDescriptionWidgetDelegate for EventRouter {
    fn did_tap_expand_description(
        &self,
        widget: &Rc<CollapsableDescriptionWidget>,
        component: &CollapsableDescriptionComponent,
    ) {
        self.run_toggle(widget, component, ToggleDirection::Expand);
    }

    fn did_tap_hide_description(
        &self,
        widget: &Rc<CollapsableDescriptionWidget>,
        component: &CollapsableDescriptionComponent,
    ) {
        self.run_toggle(widget, component, ToggleDirection::Collapse);
    }
}

impl SelectionWidgetDelegate for EventRouter {
    /// Accepted and dropped: the outward delegate has no selection method yet.
    fn did_select_component(&self, source: SelectionSource, component: &Component) {
        log::trace!("{source:?} selected {}", component.kind_name());
    }
}
