//! Row layout: horizontal stacks of widgets.
//!
//! A row is a horizontal flow of sibling widgets with a fixed gap between them.
//! With [`Distribution::FillProportionally`] each widget's share of the row width
//! is proportional to its natural content width; [`Distribution::FillEqually`]
//! gives every widget the same width.

use crate::view::{ViewData, ViewId, ViewKind, ViewTree};
use crate::widget::WidgetInstance;

/// How a row splits its width between its widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    FillEqually,
    FillProportionally,
}

/// Arrangement parameters of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackStyle {
    pub distribution: Distribution,
    /// Gap between adjacent widgets.
    pub spacing: f32,
}

impl StackStyle {
    /// The style every composed row uses: proportional fill with `spacing` gaps.
    pub fn row(spacing: f32) -> Self {
        Self {
            distribution: Distribution::FillProportionally,
            spacing,
        }
    }
}

/// A row that made it into the hierarchy, with its widgets in order.
pub struct RowContainer {
    pub id: ViewId,
    pub widgets: Vec<(ViewId, WidgetInstance)>,
}

/// Insert a row holding `widgets` as the last subview of `content`.
///
/// Widgets keep their input order, left to right. A row with no widgets is
/// never inserted and `None` is returned, so it reserves no space.
pub fn layout_row(
    tree: &mut ViewTree,
    content: ViewId,
    style: StackStyle,
    widgets: Vec<WidgetInstance>,
) -> Option<RowContainer> {
    if widgets.is_empty() {
        return None;
    }

    let id = tree.add_subview(content, ViewData::new(ViewKind::Row(style)));
    let widgets = widgets
        .into_iter()
        .map(|instance| {
            let data = ViewData::new(ViewKind::Widget(instance.widget.widget_type()))
                .layout_mode(instance.layout_mode);
            (tree.add_subview(id, data), instance)
        })
        .collect();

    Some(RowContainer { id, widgets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::component::PriceComponent;
    use crate::view::LayoutMode;
    use crate::widgets::PriceWidget;

    fn price(value: &str) -> WidgetInstance {
        WidgetInstance::new(Rc::new(PriceWidget::new(PriceComponent::new("Price", value))))
            .constrained()
    }

    fn content_tree() -> (ViewTree, ViewId) {
        let mut tree = ViewTree::new();
        let root = tree.insert_root(ViewData::new(ViewKind::ObjectView));
        let content = tree.add_subview(root, ViewData::new(ViewKind::ContentView));
        (tree, content)
    }

    #[test]
    fn empty_row_is_not_inserted() {
        let (mut tree, content) = content_tree();
        assert!(layout_row(&mut tree, content, StackStyle::row(8.0), Vec::new()).is_none());
        assert!(tree.subviews(content).is_empty());
    }

    #[test]
    fn widgets_keep_input_order() {
        let (mut tree, content) = content_tree();
        let row = layout_row(
            &mut tree,
            content,
            StackStyle::row(8.0),
            vec![price("1"), price("2"), price("3")],
        )
        .unwrap();

        assert_eq!(tree.subviews(content), &[row.id]);
        let ids: Vec<ViewId> = row.widgets.iter().map(|(id, _)| *id).collect();
        assert_eq!(tree.subviews(row.id), ids.as_slice());
    }

    #[test]
    fn row_carries_style_and_widgets_use_constraints() {
        let (mut tree, content) = content_tree();
        let row = layout_row(&mut tree, content, StackStyle::row(8.0), vec![price("1")]).unwrap();

        match tree.get(row.id).unwrap().kind {
            ViewKind::Row(style) => {
                assert_eq!(style.distribution, Distribution::FillProportionally);
                assert_eq!(style.spacing, 8.0);
            }
            other => panic!("expected a row, got {other:?}"),
        }
        let (widget_id, _) = row.widgets[0];
        let data = tree.get(widget_id).unwrap();
        assert_eq!(data.kind, ViewKind::Widget("PriceWidget"));
        assert_eq!(data.layout_mode, LayoutMode::Constraints);
    }
}
