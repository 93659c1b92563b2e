//! The composition container.
//!
//! An [`ObjectView`] owns a small view hierarchy:
//!
//! ```text
//! ObjectView (explicit frame)
//! └── ScrollView (pinned to the root)
//!     └── ContentView (scroll width, intrinsic height)
//!         ├── Row ── widgets
//!         └── Row ── widgets
//! ```
//!
//! [`reload_data`](ObjectView::reload_data) tears down every row and rebuilds
//! from the data source. [`layout_if_needed`](ObjectView::layout_if_needed)
//! turns the row constraints into frames.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::SecondaryMap;

use crate::config::ObjectViewConfig;
use crate::error::LayoutError;
use crate::event::delegate::{ObjectViewDataSource, ObjectViewDelegate};
use crate::event::router::EventRouter;
use crate::event::scheduler::Scheduler;
use crate::geometry::Region;
use crate::layout::constraint::{compose_rows, Constraint};
use crate::layout::engine::{IntrinsicSizes, LayoutEngine};
use crate::layout::stack::{layout_row, StackStyle};
use crate::view::{LayoutMode, ViewData, ViewId, ViewKind, ViewTree};
use crate::widget::factory::build_widget;
use crate::widget::scroll::ScrollState;
use crate::widget::traits::{Widget, WidgetInstance};

// ---------------------------------------------------------------------------
// Hierarchy
// ---------------------------------------------------------------------------

struct Hierarchy {
    views: ViewTree,
    root: ViewId,
    scroll: ViewId,
    content: ViewId,
    /// Visible rows, top to bottom.
    rows: Vec<ViewId>,
    widgets: SecondaryMap<ViewId, WidgetInstance>,
    constraints: Vec<Constraint>,
    layout: LayoutEngine,
    intrinsic: IntrinsicSizes,
    scroll_state: ScrollState,
    needs_layout: bool,
}

impl Hierarchy {
    fn new() -> Self {
        let mut views = ViewTree::new();
        let root = views.insert_root(ViewData::with_frame(ViewKind::ObjectView, Region::ZERO));
        let scroll = views.add_subview(root, ViewData::new(ViewKind::ScrollView));
        let content = views.add_subview(scroll, ViewData::new(ViewKind::ContentView));
        Self {
            views,
            root,
            scroll,
            content,
            rows: Vec::new(),
            widgets: SecondaryMap::new(),
            constraints: Vec::new(),
            layout: LayoutEngine::new(),
            intrinsic: IntrinsicSizes::new(),
            scroll_state: ScrollState::default(),
            needs_layout: true,
        }
    }

    /// Remove every row and widget. Returns the dropped widgets so they are
    /// released after the borrow ends.
    fn teardown(&mut self) -> Vec<WidgetInstance> {
        let removed = self.views.remove_all_subviews(self.content);
        let dropped = removed
            .iter()
            .filter_map(|&id| {
                self.intrinsic.remove(id);
                self.widgets.remove(id)
            })
            .collect();
        self.rows.clear();
        self.constraints.clear();
        self.needs_layout = true;
        dropped
    }

    fn root_frame(&self) -> Region {
        match self.views.get(self.root).map(|data| data.layout_mode) {
            Some(LayoutMode::Frame(frame)) => frame,
            _ => Region::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// ObjectView
// ---------------------------------------------------------------------------

pub(crate) struct ViewShared {
    config: ObjectViewConfig,
    data_source: RefCell<Option<Weak<dyn ObjectViewDataSource>>>,
    delegate: RefCell<Option<Weak<dyn ObjectViewDelegate>>>,
    hierarchy: RefCell<Hierarchy>,
    router: Rc<EventRouter>,
    scheduler: Rc<dyn Scheduler>,
}

/// Handle to a composition container. Clones share the same view.
///
/// Single-threaded. No internal borrow is held while the data source, the
/// delegate or a scheduled continuation runs, so all of them may call back
/// into the view (including [`reload_data`](Self::reload_data)).
#[derive(Clone)]
pub struct ObjectView {
    shared: Rc<ViewShared>,
}

impl ObjectView {
    /// A view with the default configuration.
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self::with_config(ObjectViewConfig::default(), scheduler)
    }

    pub fn with_config(config: ObjectViewConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        let shared = Rc::new_cyclic(|weak: &Weak<ViewShared>| ViewShared {
            config,
            data_source: RefCell::new(None),
            delegate: RefCell::new(None),
            hierarchy: RefCell::new(Hierarchy::new()),
            router: Rc::new(EventRouter::new(weak.clone())),
            scheduler,
        });
        Self { shared }
    }

    pub(crate) fn upgrade(weak: &Weak<ViewShared>) -> Option<Self> {
        weak.upgrade().map(|shared| Self { shared })
    }

    pub(crate) fn downgrade(&self) -> Weak<ViewShared> {
        Rc::downgrade(&self.shared)
    }

    pub fn config(&self) -> &ObjectViewConfig {
        &self.shared.config
    }

    pub(crate) fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.shared.scheduler)
    }

    /// The sink every built widget reports to.
    pub fn router(&self) -> Rc<EventRouter> {
        Rc::clone(&self.shared.router)
    }

    // -- collaborators -------------------------------------------------------

    /// Attach the data source. Held weakly.
    pub fn set_data_source<D: ObjectViewDataSource + 'static>(&self, source: &Rc<D>) {
        let weak: Weak<dyn ObjectViewDataSource> = Rc::downgrade(source) as Weak<D>;
        *self.shared.data_source.borrow_mut() = Some(weak);
    }

    pub fn clear_data_source(&self) {
        self.shared.data_source.borrow_mut().take();
    }

    pub fn data_source(&self) -> Option<Rc<dyn ObjectViewDataSource>> {
        self.shared.data_source.borrow().as_ref()?.upgrade()
    }

    /// Attach the delegate. Held weakly.
    pub fn set_delegate<D: ObjectViewDelegate + 'static>(&self, delegate: &Rc<D>) {
        let weak: Weak<dyn ObjectViewDelegate> = Rc::downgrade(delegate) as Weak<D>;
        *self.shared.delegate.borrow_mut() = Some(weak);
    }

    pub fn clear_delegate(&self) {
        self.shared.delegate.borrow_mut().take();
    }

    pub fn delegate(&self) -> Option<Rc<dyn ObjectViewDelegate>> {
        self.shared.delegate.borrow().as_ref()?.upgrade()
    }

    // -- rebuild -------------------------------------------------------------

    /// Tear down every row and rebuild from the data source.
    ///
    /// Without a data source the view is left empty. Rows whose components
    /// all lack a widget are skipped and the next row stacks below the last
    /// visible one.
    pub fn reload_data(&self) {
        let dropped = self.shared.hierarchy.borrow_mut().teardown();
        drop(dropped);

        let Some(source) = self.data_source() else {
            log::debug!("reload_data: no data source, view left empty");
            return;
        };
        let arrangement = source.components(self);
        drop(source);

        let config = &self.shared.config;
        let mut guard = self.shared.hierarchy.borrow_mut();
        let hierarchy = &mut *guard;
        // The data source may have reloaded us while it ran. Those rows give
        // way to this arrangement.
        let stale = hierarchy.teardown();
        if !stale.is_empty() {
            log::debug!("reload_data: replacing {} widgets from a nested reload", stale.len());
        }

        for (index, components) in arrangement.iter().enumerate() {
            let widgets: Vec<WidgetInstance> = components
                .iter()
                .filter_map(|component| {
                    let instance = build_widget(component, &self.shared.router);
                    if instance.is_none() {
                        log::trace!("row {index}: no widget for {}", component.kind_name());
                    }
                    instance
                })
                .collect();

            let style = StackStyle::row(config.spacing.medium);
            match layout_row(&mut hierarchy.views, hierarchy.content, style, widgets) {
                Some(row) => {
                    hierarchy.rows.push(row.id);
                    for (id, instance) in row.widgets {
                        hierarchy.widgets.insert(id, instance);
                    }
                }
                None => log::trace!("row {index}: empty, skipped"),
            }
        }

        hierarchy.constraints = compose_rows(hierarchy.content, &hierarchy.rows, &config.spacing);
        hierarchy.needs_layout = true;
        log::debug!(
            "reload_data: {} of {} rows visible, {} widgets",
            hierarchy.rows.len(),
            arrangement.len(),
            hierarchy.widgets.len()
        );
        drop(guard);
        drop(stale);
    }

    // -- layout --------------------------------------------------------------

    /// Set the root frame. Layout is recomputed on the next
    /// [`layout_if_needed`](Self::layout_if_needed).
    pub fn set_frame(&self, frame: Region) {
        let mut hierarchy = self.shared.hierarchy.borrow_mut();
        let root = hierarchy.root;
        if let Some(data) = hierarchy.views.get_mut(root) {
            if data.layout_mode == LayoutMode::Frame(frame) {
                return;
            }
            data.layout_mode = LayoutMode::Frame(frame);
        }
        hierarchy.needs_layout = true;
    }

    /// The root frame as last set.
    pub fn frame(&self) -> Region {
        self.shared.hierarchy.borrow().root_frame()
    }

    pub fn needs_layout(&self) -> bool {
        self.shared.hierarchy.borrow().needs_layout
    }

    /// Mark the layout stale.
    pub fn set_needs_layout(&self) {
        self.shared.hierarchy.borrow_mut().needs_layout = true;
    }

    /// Recompute frames if the hierarchy, the root frame or any widget's
    /// intrinsic size changed since the last pass.
    pub fn layout_if_needed(&self) -> Result<(), LayoutError> {
        let config = &self.shared.config;
        let mut guard = self.shared.hierarchy.borrow_mut();
        let hierarchy = &mut *guard;

        let mut dirty = hierarchy.needs_layout;
        for (id, instance) in &hierarchy.widgets {
            let size = instance.widget.intrinsic_size(config);
            if hierarchy.intrinsic.get(id) != Some(&size) {
                hierarchy.intrinsic.insert(id, size);
                dirty = true;
            }
        }
        if !dirty {
            return Ok(());
        }

        hierarchy
            .layout
            .sync_tree(&hierarchy.views, &hierarchy.constraints, &hierarchy.intrinsic)?;
        hierarchy.layout.compute(hierarchy.root_frame().size())?;

        let content = hierarchy.layout.frame(hierarchy.content).unwrap_or(Region::ZERO);
        let viewport = hierarchy.layout.frame(hierarchy.scroll).unwrap_or(Region::ZERO);
        hierarchy.scroll_state.resize(content.size(), viewport.size());
        hierarchy.needs_layout = false;
        log::trace!(
            "layout: content {}x{} in viewport {}x{}",
            content.width,
            content.height,
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    /// Frame of `id` relative to its superview, from the last layout pass.
    pub fn frame_of(&self, id: ViewId) -> Option<Region> {
        self.shared.hierarchy.borrow().layout.frame(id)
    }

    // -- inspection ----------------------------------------------------------

    pub fn root_view(&self) -> ViewId {
        self.shared.hierarchy.borrow().root
    }

    pub fn scroll_view(&self) -> ViewId {
        self.shared.hierarchy.borrow().scroll
    }

    pub fn content_view(&self) -> ViewId {
        self.shared.hierarchy.borrow().content
    }

    /// Visible rows, top to bottom.
    pub fn rows(&self) -> Vec<ViewId> {
        self.shared.hierarchy.borrow().rows.clone()
    }

    /// Widget views of `row`, left to right.
    pub fn widgets_in_row(&self, row: ViewId) -> Vec<ViewId> {
        self.shared.hierarchy.borrow().views.subviews(row).to_vec()
    }

    pub fn widget(&self, id: ViewId) -> Option<Rc<dyn Widget>> {
        let hierarchy = self.shared.hierarchy.borrow();
        hierarchy.widgets.get(id).map(|instance| Rc::clone(&instance.widget))
    }

    /// The widget at `id` as its concrete type.
    pub fn widget_as<T: Widget + 'static>(&self, id: ViewId) -> Option<Rc<T>> {
        self.widget(id)?.into_any().downcast::<T>().ok()
    }

    /// Every widget of type `T`, in row order.
    pub fn widgets_of<T: Widget + 'static>(&self) -> Vec<Rc<T>> {
        self.rows()
            .into_iter()
            .flat_map(|row| self.widgets_in_row(row))
            .filter_map(|id| self.widget_as::<T>(id))
            .collect()
    }

    /// The full constraint set of the current rows.
    pub fn constraints(&self) -> Vec<Constraint> {
        self.shared.hierarchy.borrow().constraints.clone()
    }

    /// Constraints whose item is `id`.
    pub fn constraints_for(&self, id: ViewId) -> Vec<Constraint> {
        self.shared
            .hierarchy
            .borrow()
            .constraints
            .iter()
            .filter(|c| c.item == id)
            .copied()
            .collect()
    }

    /// Run `f` against the view hierarchy.
    pub fn with_tree<R>(&self, f: impl FnOnce(&ViewTree) -> R) -> R {
        f(&self.shared.hierarchy.borrow().views)
    }

    // -- scrolling -----------------------------------------------------------

    pub fn scroll_state(&self) -> ScrollState {
        self.shared.hierarchy.borrow().scroll_state.clone()
    }

    /// Scroll to an absolute offset, clamped to the content.
    pub fn scroll_to(&self, x: i32, y: i32) {
        self.shared.hierarchy.borrow_mut().scroll_state.scroll_to(x, y);
    }

    pub fn scroll_by(&self, dx: i32, dy: i32) {
        self.shared.hierarchy.borrow_mut().scroll_state.scroll_by(dx, dy);
    }

    /// Bring a visible row fully on screen. Returns false when `row` has no
    /// frame yet or is not one of the current rows.
    pub fn scroll_row_to_visible(&self, row: ViewId) -> bool {
        let mut hierarchy = self.shared.hierarchy.borrow_mut();
        if !hierarchy.rows.contains(&row) {
            return false;
        }
        let Some(frame) = hierarchy.layout.frame(row) else {
            return false;
        };
        hierarchy.scroll_state.scroll_to_visible(frame);
        true
    }
}

impl std::fmt::Debug for ObjectView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hierarchy = self.shared.hierarchy.borrow();
        f.debug_struct("ObjectView")
            .field("frame", &hierarchy.root_frame())
            .field("rows", &hierarchy.rows.len())
            .field("widgets", &hierarchy.widgets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::component::{Component, PriceComponent};
    use crate::event::scheduler::ImmediateScheduler;
    use crate::testing::StaticDataSource;

    fn price(value: &str) -> Component {
        PriceComponent::new("Price", value).into()
    }

    fn view() -> ObjectView {
        ObjectView::new(Rc::new(ImmediateScheduler))
    }

    #[test]
    fn fresh_view_has_fixed_skeleton() {
        let view = view();
        view.with_tree(|tree| {
            assert_eq!(tree.len(), 3);
            assert_eq!(tree.superview(view.content_view()), Some(view.scroll_view()));
            assert_eq!(tree.superview(view.scroll_view()), Some(view.root_view()));
        });
        assert!(view.rows().is_empty());
        assert_eq!(view.frame(), Region::ZERO);
    }

    #[test]
    fn reload_without_source_empties_view() {
        let view = view();
        let source = Rc::new(StaticDataSource::new(vec![vec![price("1")]]));
        view.set_data_source(&source);
        view.reload_data();
        assert_eq!(view.rows().len(), 1);

        view.clear_data_source();
        view.reload_data();
        assert!(view.rows().is_empty());
        assert!(view.constraints().is_empty());
        view.with_tree(|tree| assert_eq!(tree.len(), 3));
    }

    #[test]
    fn data_source_is_held_weakly() {
        let view = view();
        let source = Rc::new(StaticDataSource::new(vec![vec![price("1")]]));
        view.set_data_source(&source);
        drop(source);
        assert!(view.data_source().is_none());
        view.reload_data();
        assert!(view.rows().is_empty());
    }

    #[test]
    fn widget_as_downcasts() {
        use crate::widgets::{PhoneNumberWidget, PriceWidget};

        let view = view();
        let source = Rc::new(StaticDataSource::new(vec![vec![price("1")]]));
        view.set_data_source(&source);
        view.reload_data();
        let id = view.widgets_in_row(view.rows()[0])[0];
        assert!(view.widget_as::<PriceWidget>(id).is_some());
        assert!(view.widget_as::<PhoneNumberWidget>(id).is_none());
        assert_eq!(view.widgets_of::<PriceWidget>().len(), 1);
    }

    #[test]
    fn layout_only_when_dirty() {
        let view = view();
        let source = Rc::new(StaticDataSource::new(vec![vec![price("1")]]));
        view.set_data_source(&source);
        view.reload_data();
        view.set_frame(Region::new(0, 0, 400, 800));
        assert!(view.needs_layout());
        view.layout_if_needed().unwrap();
        assert!(!view.needs_layout());

        view.set_frame(Region::new(0, 0, 400, 800));
        assert!(!view.needs_layout());
        view.set_frame(Region::new(0, 0, 320, 800));
        assert!(view.needs_layout());
    }

    #[test]
    fn constraints_for_filters_by_item() {
        let view = view();
        let source = Rc::new(StaticDataSource::new(vec![vec![price("1")], vec![price("2")]]));
        view.set_data_source(&source);
        view.reload_data();
        let rows = view.rows();
        // leading, trailing, top.
        assert_eq!(view.constraints_for(rows[0]).len(), 3);
        // leading, trailing, top, bottom.
        assert_eq!(view.constraints_for(rows[1]).len(), 4);
        assert_eq!(view.constraints().len(), 7);
    }
}
