//! Plain-text dumps of an object view's hierarchy.

use crate::object_view::ObjectView;
use crate::view::{ViewId, ViewTree};

/// Dump the hierarchy, one view per line, indented by depth.
///
/// Each line holds the view kind, its frame relative to the superview as
/// `x,y wxh` (`-` before the first layout pass), and the widget label in
/// quotes when there is one. Lines are joined with `'\n'` and the output has
/// no trailing newline.
///
/// ```text
/// ObjectView 0,0 400x800
///   ScrollView 0,0 400x800
///     ContentView 0,0 400x40
///       Row 16,0 368x40
///         PriceWidget 0,0 368x40 "1 000 kr"
/// ```
pub fn tree_to_string(view: &ObjectView) -> String {
    let root = view.root_view();
    let ids = view.with_tree(|tree| {
        tree.walk_depth_first(root)
            .into_iter()
            .filter_map(|id| Some((id, tree.get(id)?.kind.name(), depth(tree, id))))
            .collect::<Vec<_>>()
    });

    ids.into_iter()
        .map(|(id, name, depth)| {
            let mut line = format!("{}{}", "  ".repeat(depth), name);
            match view.frame_of(id) {
                Some(frame) => {
                    line.push_str(&format!(" {},{} {}x{}", frame.x, frame.y, frame.width, frame.height));
                }
                None => line.push_str(" -"),
            }
            if let Some(label) = view.widget(id).map(|widget| widget.label()) {
                if !label.is_empty() {
                    line.push_str(&format!(" {label:?}"));
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn depth(tree: &ViewTree, id: ViewId) -> usize {
    let mut depth = 0;
    let mut current = id;
    while let Some(parent) = tree.superview(current) {
        depth += 1;
        current = parent;
    }
    depth
}
