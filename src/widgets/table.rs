//! Table widget: optional title plus one line per title/detail row.

use std::any::Any;
use std::rc::Rc;

use crate::component::TableComponent;
use crate::config::ObjectViewConfig;
use crate::geometry::Size;
use crate::widget::traits::Widget;

pub struct TableWidget {
    component: TableComponent,
}

impl TableWidget {
    pub fn new(component: TableComponent) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &TableComponent {
        &self.component
    }
}

impl Widget for TableWidget {
    fn widget_type(&self) -> &'static str {
        "TableWidget"
    }

    fn label(&self) -> String {
        self.component
            .title
            .clone()
            .unwrap_or_else(|| format!("{} rows", self.component.rows.len()))
    }

    /// Title and detail columns are separated by two character widths.
    fn intrinsic_size(&self, config: &ObjectViewConfig) -> Size {
        let metrics = &config.metrics;
        let title = self.component.title.as_deref().map(|t| metrics.text_width(t));
        let widest_row = self
            .component
            .rows
            .iter()
            .map(|row| {
                metrics.text_width(&row.title) + 2 * metrics.char_width + metrics.text_width(&row.detail)
            })
            .max()
            .unwrap_or(0);
        let lines = self.component.rows.len() as i32 + i32::from(title.is_some());
        Size::new(widest_row.max(title.unwrap_or(0)), lines * metrics.line_height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
