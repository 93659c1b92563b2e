//! Widget trait and the instance wrapper handed out by the factory.
//!
//! Drawing is not this crate's concern: a widget only reports its type name,
//! a short label for inspection, and its natural content size, which drives
//! proportional distribution inside a row.

use std::any::Any;
use std::rc::Rc;

use crate::config::ObjectViewConfig;
use crate::geometry::{Region, Size};
use crate::view::LayoutMode;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every widget placed in a row.
///
/// Object-safe; widgets are shared as `Rc<dyn Widget>` so interaction
/// callbacks can hand the concrete widget to the router.
pub trait Widget {
    /// Type name, e.g. `"PhoneNumberWidget"`.
    fn widget_type(&self) -> &'static str;

    /// Short human-readable label (button title, price, first line of text).
    fn label(&self) -> String {
        String::new()
    }

    /// Natural content size under the given metrics.
    fn intrinsic_size(&self, config: &ObjectViewConfig) -> Size;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Convert into `Rc<dyn Any>` so a shared widget can be downcast.
    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
}

// ---------------------------------------------------------------------------
// WidgetInstance
// ---------------------------------------------------------------------------

/// A constructed widget plus how it participates in layout.
#[derive(Clone)]
pub struct WidgetInstance {
    pub widget: Rc<dyn Widget>,
    pub layout_mode: LayoutMode,
}

impl WidgetInstance {
    /// Wrap a widget. Like any freshly made view it keeps a zero frame until
    /// it opts into constraint-based layout.
    pub fn new(widget: Rc<dyn Widget>) -> Self {
        Self {
            widget,
            layout_mode: LayoutMode::Frame(Region::ZERO),
        }
    }

    /// Opt into constraint-based layout (builder).
    pub fn constrained(mut self) -> Self {
        self.layout_mode = LayoutMode::Constraints;
        self
    }
}

impl std::fmt::Debug for WidgetInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetInstance")
            .field("widget_type", &self.widget.widget_type())
            .field("layout_mode", &self.layout_mode)
            .finish()
    }
}
