//! Widget system: trait, delegates, factory, scrolling.

pub mod delegate;
pub mod factory;
pub mod scroll;
pub mod traits;

pub use delegate::{
    CollapsableDescriptionWidgetDelegate, IconButtonWidgetDelegate, MessageButtonWidgetDelegate,
    PhoneNumberWidgetDelegate, SelectionSource, SelectionWidgetDelegate, WidgetEventSink,
};
pub use factory::build_widget;
pub use scroll::ScrollState;
pub use traits::{Widget, WidgetInstance};
