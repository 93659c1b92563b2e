//! Adjacency constraints and the vertical composition rules for rows.
//!
//! A [`Constraint`] reads `item.anchor == target.target_anchor + constant`.
//! [`compose_rows`] produces the full constraint set for the visible rows of a
//! content view; the layout engine turns it into frames.

use crate::config::Spacing;
use crate::view::ViewId;

/// An edge of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Bottom,
    Leading,
    Trailing,
}

/// `item.anchor == target.target_anchor + constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub item: ViewId,
    pub anchor: Anchor,
    pub target: ViewId,
    pub target_anchor: Anchor,
    pub constant: f32,
}

impl Constraint {
    /// Pin `item.anchor` to the same edge of `target`, offset by `constant`.
    pub fn pin(item: ViewId, anchor: Anchor, target: ViewId, constant: f32) -> Self {
        Self {
            item,
            anchor,
            target,
            target_anchor: anchor,
            constant,
        }
    }

    /// Place `item.top` below `above.bottom` with a gap of `constant`.
    pub fn below(item: ViewId, above: ViewId, constant: f32) -> Self {
        Self {
            item,
            anchor: Anchor::Top,
            target: above,
            target_anchor: Anchor::Bottom,
            constant,
        }
    }
}

/// Build the constraints that stack `rows` (visible rows, top to bottom)
/// inside `content`.
///
/// - every row is inset `medium_large` from the leading and trailing edges;
/// - a single row spans the content from top to bottom;
/// - otherwise the first row pins to the content top, every later row sits
///   `medium_large` below the previous visible row, and the last row also
///   keeps `medium` clear of the content bottom.
///
/// Empty rows never reach this point, so the row above is always
/// `rows[index - 1]`.
pub fn compose_rows(content: ViewId, rows: &[ViewId], spacing: &Spacing) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(rows.len() * 4);
    let last = rows.len().saturating_sub(1);

    for (index, &row) in rows.iter().enumerate() {
        constraints.push(Constraint::pin(row, Anchor::Leading, content, spacing.medium_large));
        constraints.push(Constraint::pin(row, Anchor::Trailing, content, -spacing.medium_large));

        if rows.len() == 1 {
            constraints.push(Constraint::pin(row, Anchor::Top, content, 0.0));
            constraints.push(Constraint::pin(row, Anchor::Bottom, content, 0.0));
            continue;
        }

        if index == 0 {
            constraints.push(Constraint::pin(row, Anchor::Top, content, 0.0));
            continue;
        }
        constraints.push(Constraint::below(row, rows[index - 1], spacing.medium_large));
        if index == last {
            constraints.push(Constraint::pin(row, Anchor::Bottom, content, -spacing.medium));
        }
    }

    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slotmap::SlotMap;

    fn ids(count: usize) -> (ViewId, Vec<ViewId>) {
        let mut keys: SlotMap<ViewId, ()> = SlotMap::with_key();
        let content = keys.insert(());
        let rows = (0..count).map(|_| keys.insert(())).collect();
        (content, rows)
    }

    fn for_item(constraints: &[Constraint], item: ViewId, anchor: Anchor) -> Option<Constraint> {
        constraints
            .iter()
            .copied()
            .find(|c| c.item == item && c.anchor == anchor)
    }

    #[test]
    fn no_rows_no_constraints() {
        let (content, _) = ids(0);
        assert!(compose_rows(content, &[], &Spacing::default()).is_empty());
    }

    #[test]
    fn single_row_spans_content() {
        let (content, rows) = ids(1);
        let constraints = compose_rows(content, &rows, &Spacing::default());
        assert_eq!(
            constraints,
            vec![
                Constraint::pin(rows[0], Anchor::Leading, content, 16.0),
                Constraint::pin(rows[0], Anchor::Trailing, content, -16.0),
                Constraint::pin(rows[0], Anchor::Top, content, 0.0),
                Constraint::pin(rows[0], Anchor::Bottom, content, 0.0),
            ]
        );
    }

    #[test]
    fn two_rows_first_and_last() {
        let (content, rows) = ids(2);
        let constraints = compose_rows(content, &rows, &Spacing::default());

        assert_eq!(
            for_item(&constraints, rows[0], Anchor::Top),
            Some(Constraint::pin(rows[0], Anchor::Top, content, 0.0))
        );
        assert_eq!(for_item(&constraints, rows[0], Anchor::Bottom), None);
        assert_eq!(
            for_item(&constraints, rows[1], Anchor::Top),
            Some(Constraint::below(rows[1], rows[0], 16.0))
        );
        assert_eq!(
            for_item(&constraints, rows[1], Anchor::Bottom),
            Some(Constraint::pin(rows[1], Anchor::Bottom, content, -8.0))
        );
    }

    #[test]
    fn middle_rows_have_no_bottom_constraint() {
        let (content, rows) = ids(4);
        let constraints = compose_rows(content, &rows, &Spacing::default());

        for i in 1..rows.len() {
            assert_eq!(
                for_item(&constraints, rows[i], Anchor::Top),
                Some(Constraint::below(rows[i], rows[i - 1], 16.0))
            );
        }
        assert_eq!(for_item(&constraints, rows[1], Anchor::Bottom), None);
        assert_eq!(for_item(&constraints, rows[2], Anchor::Bottom), None);
        assert!(for_item(&constraints, rows[3], Anchor::Bottom).is_some());
    }

    #[test]
    fn every_row_is_inset_horizontally() {
        let (content, rows) = ids(3);
        let constraints = compose_rows(content, &rows, &Spacing::default());
        for &row in &rows {
            assert_eq!(for_item(&constraints, row, Anchor::Leading).unwrap().constant, 16.0);
            assert_eq!(for_item(&constraints, row, Anchor::Trailing).unwrap().constant, -16.0);
        }
        assert_eq!(constraints.len(), 3 * 2 + 3 + 1);
    }

    #[test]
    fn custom_spacing_is_used() {
        let (content, rows) = ids(2);
        let spacing = Spacing { medium: 4.0, medium_large: 10.0 };
        let constraints = compose_rows(content, &rows, &spacing);
        assert_eq!(for_item(&constraints, rows[1], Anchor::Top).unwrap().constant, 10.0);
        assert_eq!(for_item(&constraints, rows[1], Anchor::Bottom).unwrap().constant, -4.0);
    }
}
