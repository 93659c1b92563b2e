//! In-memory data source and a delegate that records what it receives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::component::{
    CollapsableDescriptionComponent, Component, IconButtonComponent, MessageButtonComponent,
    PhoneNumberComponent,
};
use crate::event::delegate::{ObjectViewDataSource, ObjectViewDelegate};
use crate::object_view::ObjectView;

// ---------------------------------------------------------------------------
// StaticDataSource
// ---------------------------------------------------------------------------

/// Serves a fixed arrangement, replaceable between reloads.
#[derive(Default)]
pub struct StaticDataSource {
    rows: RefCell<Vec<Vec<Component>>>,
    requests: Cell<usize>,
}

impl StaticDataSource {
    pub fn new(rows: Vec<Vec<Component>>) -> Self {
        Self {
            rows: RefCell::new(rows),
            requests: Cell::new(0),
        }
    }

    pub fn set_components(&self, rows: Vec<Vec<Component>>) {
        *self.rows.borrow_mut() = rows;
    }

    /// How many times the arrangement was requested.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl ObjectViewDataSource for StaticDataSource {
    fn components(&self, _view: &ObjectView) -> Vec<Vec<Component>> {
        self.requests.set(self.requests.get() + 1);
        self.rows.borrow().clone()
    }
}

// ---------------------------------------------------------------------------
// RecordingDelegate
// ---------------------------------------------------------------------------

/// One delegate call, keyed by the component's identifying field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegateEvent {
    ShowPhoneNumber(String),
    CallPhoneNumber(String),
    CanShowPhoneNumber(String),
    SendMessage(String),
    ButtonTap(String),
    ExpandDescription(String),
    HideDescription(String),
}

type Hook = Rc<dyn Fn(&DelegateEvent)>;

/// Records every call in order. Answers `can_show_phone_number` with a
/// settable flag and can run a hook after each recorded call.
#[derive(Default)]
pub struct RecordingDelegate {
    events: RefCell<Vec<DelegateEvent>>,
    can_show: Cell<bool>,
    hook: RefCell<Option<Hook>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn set_can_show(&self, allow: bool) {
        self.can_show.set(allow);
    }

    /// Run `hook` after every recorded call. The hook may re-enter the view.
    pub fn set_hook(&self, hook: impl Fn(&DelegateEvent) + 'static) {
        *self.hook.borrow_mut() = Some(Rc::new(hook));
    }

    fn record(&self, event: DelegateEvent) {
        self.events.borrow_mut().push(event.clone());
        let hook = self.hook.borrow().clone();
        if let Some(hook) = hook {
            hook(&event);
        }
    }
}

impl ObjectViewDelegate for RecordingDelegate {
    fn did_tap_show_phone_number(&self, _view: &ObjectView, component: &PhoneNumberComponent) {
        self.record(DelegateEvent::ShowPhoneNumber(component.phone_number.clone()));
    }

    fn did_tap_phone_number(&self, _view: &ObjectView, component: &PhoneNumberComponent) {
        self.record(DelegateEvent::CallPhoneNumber(component.phone_number.clone()));
    }

    fn can_show_phone_number(&self, _view: &ObjectView, component: &PhoneNumberComponent) -> bool {
        self.record(DelegateEvent::CanShowPhoneNumber(component.phone_number.clone()));
        self.can_show.get()
    }

    fn did_tap_send_message(&self, _view: &ObjectView, component: &MessageButtonComponent) {
        self.record(DelegateEvent::SendMessage(component.recipient_id.clone()));
    }

    fn did_tap_button(&self, _view: &ObjectView, component: &IconButtonComponent) {
        self.record(DelegateEvent::ButtonTap(component.icon.clone()));
    }

    fn did_tap_expand_description(&self, _view: &ObjectView, component: &CollapsableDescriptionComponent) {
        self.record(DelegateEvent::ExpandDescription(component.text.clone()));
    }

    fn did_tap_hide_description(&self, _view: &ObjectView, component: &CollapsableDescriptionComponent) {
        self.record(DelegateEvent::HideDescription(component.text.clone()));
    }
}
