//! Node types: ViewId, ViewData, ViewKind, LayoutMode.

use slotmap::new_key_type;

use crate::geometry::Region;
use crate::layout::stack::StackStyle;

new_key_type! {
    /// Unique identifier for a view in the hierarchy. Copy, lightweight (u64).
    pub struct ViewId;
}

/// What a node in the hierarchy represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewKind {
    /// The composition container itself (hierarchy root).
    ObjectView,
    /// Scrollable viewport pinned to the root.
    ScrollView,
    /// Content area inside the scroll view; rows are its subviews.
    ContentView,
    /// Horizontal row of widgets.
    Row(StackStyle),
    /// A widget built from one component. Carries the widget type name.
    Widget(&'static str),
}

impl ViewKind {
    /// Short name used in tree dumps and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::ObjectView => "ObjectView",
            ViewKind::ScrollView => "ScrollView",
            ViewKind::ContentView => "ContentView",
            ViewKind::Row(_) => "Row",
            ViewKind::Widget(name) => *name,
        }
    }
}

/// How a view's frame is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// The frame is set explicitly and translated as-is.
    Frame(Region),
    /// The frame comes from constraint-based layout.
    Constraints,
}

/// Data associated with a single view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewData {
    pub kind: ViewKind,
    pub layout_mode: LayoutMode,
    /// Hidden views keep their node but take no space.
    pub hidden: bool,
}

impl ViewData {
    /// A view laid out by constraints.
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            layout_mode: LayoutMode::Constraints,
            hidden: false,
        }
    }

    /// A view with an explicit frame.
    pub fn with_frame(kind: ViewKind, frame: Region) -> Self {
        Self {
            kind,
            layout_mode: LayoutMode::Frame(frame),
            hidden: false,
        }
    }

    /// Set the layout mode (builder).
    pub fn layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    pub fn is_row(&self) -> bool {
        matches!(self.kind, ViewKind::Row(_))
    }

    pub fn is_widget(&self) -> bool {
        matches!(self.kind, ViewKind::Widget(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_constraints() {
        let data = ViewData::new(ViewKind::ContentView);
        assert_eq!(data.layout_mode, LayoutMode::Constraints);
        assert!(!data.hidden);
    }

    #[test]
    fn with_frame_keeps_region() {
        let frame = Region::new(0, 0, 375, 667);
        let data = ViewData::with_frame(ViewKind::ObjectView, frame);
        assert_eq!(data.layout_mode, LayoutMode::Frame(frame));
    }

    #[test]
    fn kind_predicates() {
        assert!(ViewData::new(ViewKind::Row(StackStyle::row(8.0))).is_row());
        assert!(ViewData::new(ViewKind::Widget("PriceWidget")).is_widget());
        assert!(!ViewData::new(ViewKind::ScrollView).is_widget());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ViewKind::Widget("TableWidget").name(), "TableWidget");
        assert_eq!(ViewKind::Row(StackStyle::row(8.0)).name(), "Row");
    }

    #[test]
    fn view_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<ViewId>();
    }
}
