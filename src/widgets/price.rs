//! Price widget: title over value. Emits no events.

use std::any::Any;
use std::rc::Rc;

use crate::component::PriceComponent;
use crate::config::ObjectViewConfig;
use crate::geometry::Size;
use crate::widget::traits::Widget;

pub struct PriceWidget {
    component: PriceComponent,
}

impl PriceWidget {
    pub fn new(component: PriceComponent) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &PriceComponent {
        &self.component
    }
}

impl Widget for PriceWidget {
    fn widget_type(&self) -> &'static str {
        "PriceWidget"
    }

    fn label(&self) -> String {
        self.component.value.clone()
    }

    fn intrinsic_size(&self, config: &ObjectViewConfig) -> Size {
        let metrics = &config.metrics;
        let width = metrics
            .text_width(&self.component.title)
            .max(metrics.text_width(&self.component.value));
        Size::new(width, 2 * metrics.line_height)
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

    #[test]
    fn two_lines_as_wide_as_longest() {
        let widget = PriceWidget::new(PriceComponent::new("Price", "12 500 kr"));
        assert_eq!(widget.intrinsic_size(&ObjectViewConfig::default()), Size::new(72, 40));
        assert_eq!(widget.label(), "12 500 kr");
    }
}
