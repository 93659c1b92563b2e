//! TaffyTree wrapper for layout computation.
//!
//! [`LayoutEngine`] mirrors the view hierarchy into a taffy flexbox tree,
//! translates the row constraints into margins, runs layout, and hands the
//! results back as [`Region`]s relative to each view's superview.
//!
//! Mapping summary:
//! - `ObjectView` -> flex column with the explicit frame size
//! - `ScrollView` -> 100% x 100% of the root, vertical scroll overflow
//! - `ContentView` -> full scroll width, intrinsic height (never shrinks)
//! - `Row` -> flex row with `gap = spacing`, margins from its constraints
//! - `Widget` -> flex item, `flex-basis: 0`, grow factor from the distribution,
//!   minimum height from its intrinsic size

use std::collections::{HashMap, HashSet};

use slotmap::SecondaryMap;
use taffy::prelude::*;

use crate::error::LayoutError;
use crate::geometry::Region;
use crate::view::{LayoutMode, ViewId, ViewKind, ViewTree};

use super::constraint::{Anchor, Constraint};
use super::stack::Distribution;

/// Intrinsic (natural content) sizes of the widget views, keyed by view.
pub type IntrinsicSizes = SecondaryMap<ViewId, crate::geometry::Size>;

/// Wraps a [`TaffyTree`] and keeps a mapping from [`ViewId`]s to taffy nodes.
pub struct LayoutEngine {
    tree: TaffyTree<ViewId>,
    node_map: HashMap<ViewId, NodeId>,
    root: Option<NodeId>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: HashMap::new(),
            root: None,
        }
    }

    /// Synchronize the taffy tree with the view hierarchy.
    ///
    /// Stale taffy nodes are removed, live ones are created or restyled, and
    /// parent/child links are rebuilt to mirror the hierarchy.
    pub fn sync_tree(
        &mut self,
        views: &ViewTree,
        constraints: &[Constraint],
        intrinsic: &IntrinsicSizes,
    ) -> Result<(), LayoutError> {
        let Some(view_root) = views.root() else {
            self.clear();
            return Ok(());
        };

        let live = views.walk_depth_first(view_root);
        let live_set: HashSet<ViewId> = live.iter().copied().collect();

        let stale: Vec<ViewId> = self
            .node_map
            .keys()
            .filter(|id| !live_set.contains(id))
            .copied()
            .collect();
        for id in stale {
            if let Some(node) = self.node_map.remove(&id) {
                self.tree.remove(node)?;
            }
        }

        for &id in &live {
            let style = style_for(views, id, constraints, intrinsic)?;
            match self.node_map.get(&id) {
                Some(&node) => self.tree.set_style(node, style)?,
                None => {
                    let node = self.tree.new_leaf_with_context(style, id)?;
                    self.node_map.insert(id, node);
                }
            }
        }

        for &id in &live {
            let children: Vec<NodeId> = views
                .subviews(id)
                .iter()
                .filter_map(|child| self.node_map.get(child).copied())
                .collect();
            if let Some(&node) = self.node_map.get(&id) {
                self.tree.set_children(node, &children)?;
            }
        }

        self.root = self.node_map.get(&view_root).copied();
        Ok(())
    }

    /// Run layout from the root within `available` points.
    pub fn compute(&mut self, available: crate::geometry::Size) -> Result<(), LayoutError> {
        if let Some(root) = self.root {
            self.tree.compute_layout(
                root,
                taffy::geometry::Size {
                    width: AvailableSpace::Definite(available.width as f32),
                    height: AvailableSpace::Definite(available.height as f32),
                },
            )?;
        }
        Ok(())
    }

    /// Frame of a view relative to its superview, rounded to whole points.
    pub fn frame(&self, id: ViewId) -> Option<Region> {
        let node = self.node_map.get(&id)?;
        let layout = self.tree.layout(*node).ok()?;
        Some(to_region(layout))
    }

    /// Frames of every synced view.
    pub fn frames(&self) -> HashMap<ViewId, Region> {
        self.node_map
            .iter()
            .filter_map(|(&id, &node)| Some((id, to_region(self.tree.layout(node).ok()?))))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Drop every taffy node and mapping.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.node_map.clear();
        self.root = None;
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn to_region(layout: &Layout) -> Region {
    Region {
        x: layout.location.x.round() as i32,
        y: layout.location.y.round() as i32,
        width: layout.size.width.round() as i32,
        height: layout.size.height.round() as i32,
    }
}

fn zero_rect() -> taffy::geometry::Rect<LengthPercentageAuto> {
    taffy::geometry::Rect {
        left: LengthPercentageAuto::from_length(0.0),
        right: LengthPercentageAuto::from_length(0.0),
        top: LengthPercentageAuto::from_length(0.0),
        bottom: LengthPercentageAuto::from_length(0.0),
    }
}

/// Build the taffy style of one view.
fn style_for(
    views: &ViewTree,
    id: ViewId,
    constraints: &[Constraint],
    intrinsic: &IntrinsicSizes,
) -> Result<Style, LayoutError> {
    let mut style = Style::default();
    let Some(data) = views.get(id) else {
        return Ok(style);
    };
    if data.hidden {
        style.display = Display::None;
        return Ok(style);
    }

    style.display = Display::Flex;
    style.flex_direction = FlexDirection::Column;

    match data.kind {
        ViewKind::ObjectView => {}
        ViewKind::ScrollView => {
            style.size = taffy::geometry::Size {
                width: Dimension::from_percent(1.0),
                height: Dimension::from_percent(1.0),
            };
            style.overflow = taffy::geometry::Point {
                x: taffy::style::Overflow::Visible,
                y: taffy::style::Overflow::Scroll,
            };
        }
        ViewKind::ContentView => {
            style.size.width = Dimension::from_percent(1.0);
            style.flex_shrink = 0.0;
            style.align_items = Some(AlignItems::Stretch);
        }
        ViewKind::Row(stack) => {
            style.flex_direction = FlexDirection::Row;
            style.flex_shrink = 0.0;
            style.align_items = Some(AlignItems::Stretch);
            style.gap = taffy::geometry::Size {
                width: LengthPercentage::from_length(stack.spacing),
                height: LengthPercentage::ZERO,
            };
            style.margin = row_margins(views, id, constraints)?;
        }
        ViewKind::Widget(_) => {
            let size = intrinsic.get(id).copied().unwrap_or_default();
            style.flex_basis = Dimension::from_length(0.0);
            style.flex_shrink = 1.0;
            style.flex_grow = grow_factor(views, id, intrinsic);
            style.min_size.height = Dimension::from_length(size.height.max(0) as f32);
        }
    }

    if let LayoutMode::Frame(frame) = data.layout_mode {
        style.size = taffy::geometry::Size {
            width: Dimension::from_length(frame.width as f32),
            height: Dimension::from_length(frame.height as f32),
        };
        if views.superview(id).is_some() {
            style.position = Position::Absolute;
            style.inset = taffy::geometry::Rect {
                left: LengthPercentageAuto::from_length(frame.x as f32),
                top: LengthPercentageAuto::from_length(frame.y as f32),
                right: LengthPercentageAuto::AUTO,
                bottom: LengthPercentageAuto::AUTO,
            };
        }
    }

    Ok(style)
}

/// Grow factor of a widget inside its row.
///
/// Proportional rows grow by intrinsic width; a row whose widgets all report
/// zero width falls back to equal shares.
fn grow_factor(views: &ViewTree, id: ViewId, intrinsic: &IntrinsicSizes) -> f32 {
    let Some(row) = views.superview(id) else {
        return 0.0;
    };
    let distribution = match views.get(row).map(|data| data.kind) {
        Some(ViewKind::Row(stack)) => stack.distribution,
        _ => return 0.0,
    };
    let width_of = |view: ViewId| intrinsic.get(view).map_or(0, |size| size.width.max(0)) as f32;

    match distribution {
        Distribution::FillEqually => 1.0,
        Distribution::FillProportionally => {
            let total: f32 = views.subviews(row).iter().map(|&sibling| width_of(sibling)).sum();
            if total > 0.0 {
                width_of(id)
            } else {
                1.0
            }
        }
    }
}

/// Translate the constraints of a row into flex margins.
///
/// Rows are flex items of the content column, so only shapes a column can
/// express are accepted: edges pinned to the content view, and a top edge
/// placed below the immediately preceding sibling.
fn row_margins(
    views: &ViewTree,
    id: ViewId,
    constraints: &[Constraint],
) -> Result<taffy::geometry::Rect<LengthPercentageAuto>, LayoutError> {
    let mut margin = zero_rect();
    let Some(content) = views.superview(id) else {
        return Ok(margin);
    };
    let siblings = views.subviews(content);
    let position = siblings.iter().position(|&sibling| sibling == id);
    let unsupported = |c: &Constraint, message: &str| LayoutError::UnsupportedConstraint {
        item: c.item,
        anchor: c.anchor,
        message: message.to_owned(),
    };

    for c in constraints.iter().filter(|c| c.item == id) {
        let pinned_to_content = c.target == content && c.target_anchor == c.anchor;
        match c.anchor {
            Anchor::Leading if pinned_to_content => {
                margin.left = LengthPercentageAuto::from_length(c.constant);
            }
            Anchor::Trailing if pinned_to_content => {
                margin.right = LengthPercentageAuto::from_length(-c.constant);
            }
            Anchor::Top if pinned_to_content => {
                if position != Some(0) {
                    return Err(unsupported(c, "only the first row can pin to the content top"));
                }
                margin.top = LengthPercentageAuto::from_length(c.constant);
            }
            Anchor::Top if c.target_anchor == Anchor::Bottom => {
                let above = position
                    .filter(|&index| index > 0)
                    .map(|index| siblings[index - 1]);
                if above != Some(c.target) {
                    return Err(unsupported(c, "top must follow the preceding row"));
                }
                margin.top = LengthPercentageAuto::from_length(c.constant);
            }
            Anchor::Bottom if pinned_to_content => {
                if position != Some(siblings.len().saturating_sub(1)) {
                    return Err(unsupported(c, "only the last row can pin to the content bottom"));
                }
                margin.bottom = LengthPercentageAuto::from_length(-c.constant);
            }
            _ => return Err(unsupported(c, "target is neither the content view nor the previous row")),
        }
    }

    Ok(margin)
}
