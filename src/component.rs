//! Component model: the closed set of descriptors a data source can arrange.
//!
//! Components are immutable values. The data source owns them and hands out a
//! fresh arrangement on every rebuild; widgets keep a clone of the component
//! they were built from so it can be passed back to the delegate.

/// Phone number, hidden until the user asks to see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberComponent {
    pub phone_number: String,
    pub title: String,
}

impl PhoneNumberComponent {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            title: "Show phone number".to_owned(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// "Send message" button addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageButtonComponent {
    pub recipient_id: String,
    pub title: String,
}

impl MessageButtonComponent {
    pub fn new(recipient_id: impl Into<String>) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            title: "Send message".to_owned(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Generic button with an icon, e.g. "report" or "share".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconButtonComponent {
    pub icon: String,
    pub title: String,
}

impl IconButtonComponent {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Long description text that starts collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsableDescriptionComponent {
    pub title: Option<String>,
    pub text: String,
}

impl CollapsableDescriptionComponent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Price display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceComponent {
    pub title: String,
    pub value: String,
}

impl PriceComponent {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// One title/detail line of a [`TableComponent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub title: String,
    pub detail: String,
}

impl TableRow {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Key/value table, e.g. the technical details of an ad.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableComponent {
    pub title: Option<String>,
    pub rows: Vec<TableRow>,
}

impl TableComponent {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { title: None, rows }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Link to an external page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkComponent {
    pub title: String,
    pub url: String,
}

/// Safe-payment offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafePayComponent {
    pub title: String,
}

/// Loan price calculator entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanPriceComponent {
    pub title: String,
    pub price: String,
}

/// "Report this ad" entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdReporterComponent {
    pub title: String,
}

/// A typed descriptor of one renderable unit of content.
///
/// The variant set is closed. Variants without a widget in this crate
/// (`Link`, `SafePay`, `LoanPrice`, `AdReporter`) are accepted in an
/// arrangement and contribute nothing to the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    PhoneNumber(PhoneNumberComponent),
    MessageButton(MessageButtonComponent),
    IconButton(IconButtonComponent),
    CollapsableDescription(CollapsableDescriptionComponent),
    Price(PriceComponent),
    Table(TableComponent),
    Link(LinkComponent),
    SafePay(SafePayComponent),
    LoanPrice(LoanPriceComponent),
    AdReporter(AdReporterComponent),
}

impl Component {
    /// Variant name, for logging and tree dumps.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Component::PhoneNumber(_) => "PhoneNumber",
            Component::MessageButton(_) => "MessageButton",
            Component::IconButton(_) => "IconButton",
            Component::CollapsableDescription(_) => "CollapsableDescription",
            Component::Price(_) => "Price",
            Component::Table(_) => "Table",
            Component::Link(_) => "Link",
            Component::SafePay(_) => "SafePay",
            Component::LoanPrice(_) => "LoanPrice",
            Component::AdReporter(_) => "AdReporter",
        }
    }
}

macro_rules! impl_from_payload {
    ($($payload:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Component {
                fn from(payload: $payload) -> Self {
                    Component::$variant(payload)
                }
            }
        )*
    };
}

impl_from_payload! {
    PhoneNumberComponent => PhoneNumber,
    MessageButtonComponent => MessageButton,
    IconButtonComponent => IconButton,
    CollapsableDescriptionComponent => CollapsableDescription,
    PriceComponent => Price,
    TableComponent => Table,
    LinkComponent => Link,
    SafePayComponent => SafePay,
    LoanPriceComponent => LoanPrice,
    AdReporterComponent => AdReporter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_payload_wraps_variant() {
        let component: Component = PhoneNumberComponent::new("+4712345678").into();
        match component {
            Component::PhoneNumber(ref phone) => assert_eq!(phone.phone_number, "+4712345678"),
            ref other => panic!("unexpected variant {other:?}"),
        }
        assert_eq!(component.kind_name(), "PhoneNumber");
    }

    #[test]
    fn builders_override_defaults() {
        let message = MessageButtonComponent::new("u1").with_title("Contact seller");
        assert_eq!(message.recipient_id, "u1");
        assert_eq!(message.title, "Contact seller");

        let description = CollapsableDescriptionComponent::new("text").with_title("About");
        assert_eq!(description.title.as_deref(), Some("About"));
    }

    #[test]
    fn kind_names_are_distinct() {
        let components: Vec<Component> = vec![
            PhoneNumberComponent::new("1").into(),
            MessageButtonComponent::new("u").into(),
            IconButtonComponent::new("flag").into(),
            CollapsableDescriptionComponent::new("d").into(),
            PriceComponent::new("Price", "100").into(),
            TableComponent::default().into(),
            LinkComponent { title: "t".into(), url: "u".into() }.into(),
            SafePayComponent { title: "t".into() }.into(),
            LoanPriceComponent { title: "t".into(), price: "p".into() }.into(),
            AdReporterComponent { title: "t".into() }.into(),
        ];
        let mut names: Vec<_> = components.iter().map(Component::kind_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), components.len());
    }
}
