//! Outward collaborator traits of an [`ObjectView`].
//!
//! Both are held weakly by the view; the host owns them.

use std::rc::Rc;

use crate::component::{
    CollapsableDescriptionComponent, Component, IconButtonComponent, MessageButtonComponent,
    PhoneNumberComponent,
};
use crate::object_view::ObjectView;
use crate::widget::Widget;

/// Supplies the arrangement: rows of components, top to bottom.
pub trait ObjectViewDataSource {
    /// Requested fresh on every [`ObjectView::reload_data`].
    fn components(&self, view: &ObjectView) -> Vec<Vec<Component>>;

    /// Override hook for a custom widget. The built-in factory path never
    /// consults it.
    fn custom_component_view(&self, _component: &Component, _view: &ObjectView) -> Option<Rc<dyn Widget>> {
        None
    }
}

/// Receives every widget interaction, one method per event kind.
///
/// All methods default to no-ops; `can_show_phone_number` defaults to `false`.
pub trait ObjectViewDelegate {
    fn did_tap_show_phone_number(&self, _view: &ObjectView, _component: &PhoneNumberComponent) {}

    fn did_tap_phone_number(&self, _view: &ObjectView, _component: &PhoneNumberComponent) {}

    fn can_show_phone_number(&self, _view: &ObjectView, _component: &PhoneNumberComponent) -> bool {
        false
    }

    fn did_tap_send_message(&self, _view: &ObjectView, _component: &MessageButtonComponent) {}

    fn did_tap_button(&self, _view: &ObjectView, _component: &IconButtonComponent) {}

    /// Expansion was requested. The delegate may change the underlying
    /// content; layout is recomputed when the toggle reappears.
    fn did_tap_expand_description(&self, _view: &ObjectView, _component: &CollapsableDescriptionComponent) {}

    fn did_tap_hide_description(&self, _view: &ObjectView, _component: &CollapsableDescriptionComponent) {}
}
