//! View hierarchy: add/remove subviews, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{ViewData, ViewId};

const NO_SUBVIEWS: &[ViewId] = &[];

/// The view hierarchy, backed by a slotmap arena.
///
/// Superview/subview links live in secondary maps, so removing a subtree is
/// O(subtree size) and lookups are O(1). Subview order is insertion order.
#[derive(Debug)]
pub struct ViewTree {
    nodes: SlotMap<ViewId, ViewData>,
    subviews: SecondaryMap<ViewId, Vec<ViewId>>,
    superview: SecondaryMap<ViewId, ViewId>,
    root: Option<ViewId>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            subviews: SecondaryMap::new(),
            superview: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert the root view. Replaces nothing: the first inserted root wins.
    pub fn insert_root(&mut self, data: ViewData) -> ViewId {
        let id = self.nodes.insert(data);
        self.subviews.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Append a new view as the last subview of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` is not in the tree.
    pub fn add_subview(&mut self, parent: ViewId, data: ViewData) -> ViewId {
        debug_assert!(self.nodes.contains_key(parent), "superview does not exist");
        let id = self.nodes.insert(data);
        self.subviews.insert(id, Vec::new());
        self.superview.insert(id, parent);
        self.subviews
            .get_mut(parent)
            .expect("superview must have a subview list")
            .push(id);
        id
    }

    /// Remove a view and its whole subtree.
    ///
    /// Returns the ids that were removed (the view first), or an empty vec if
    /// `id` was not in the tree.
    pub fn remove_from_superview(&mut self, id: ViewId) -> Vec<ViewId> {
        if !self.nodes.contains_key(id) {
            return Vec::new();
        }

        if let Some(parent) = self.superview.remove(id) {
            if let Some(siblings) = self.subviews.get_mut(parent) {
                siblings.retain(|&child| child != id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut removed = Vec::new();
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.subviews.remove(current) {
                queue.extend(kids);
            }
            self.superview.remove(current);
            if self.nodes.remove(current).is_some() {
                removed.push(current);
            }
        }
        removed
    }

    /// Remove every subview of `parent` (and their subtrees), keeping `parent`.
    pub fn remove_all_subviews(&mut self, parent: ViewId) -> Vec<ViewId> {
        let children = self.subviews(parent).to_vec();
        children
            .into_iter()
            .flat_map(|child| self.remove_from_superview(child))
            .collect()
    }

    pub fn superview(&self, id: ViewId) -> Option<ViewId> {
        self.superview.get(id).copied()
    }

    /// Subviews of `id` in order. Empty for leaves and unknown ids.
    pub fn subviews(&self, id: ViewId) -> &[ViewId] {
        self.subviews.get(id).map(Vec::as_slice).unwrap_or(NO_SUBVIEWS)
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut ViewData> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<ViewId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal from `start`.
    pub fn walk_depth_first(&self, start: ViewId) -> Vec<ViewId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.subviews(current).iter().rev());
        }
        result
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}
