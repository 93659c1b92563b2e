//! Built-in widgets, one per renderable component kind.

pub mod collapsable_description;
pub mod icon_button;
pub mod message_button;
pub mod phone_number;
pub mod price;
pub mod table;

pub use collapsable_description::CollapsableDescriptionWidget;
pub use icon_button::IconButtonWidget;
pub use message_button::MessageButtonWidget;
pub use phone_number::PhoneNumberWidget;
pub use price::PriceWidget;
pub use table::TableWidget;
