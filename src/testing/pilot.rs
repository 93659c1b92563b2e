//! Pilot: drives an object view headlessly on a virtual clock.

use std::rc::Rc;
use std::time::Duration;

use crate::component::Component;
use crate::error::LayoutError;
use crate::event::scheduler::Timeline;
use crate::geometry::Region;
use crate::object_view::ObjectView;
use crate::widget::traits::Widget;

use super::collaborators::{RecordingDelegate, StaticDataSource};
use super::snapshot::tree_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// An object view wired to a [`Timeline`], a [`StaticDataSource`] and a
/// [`RecordingDelegate`], all owned here so the view's weak references stay
/// valid for the pilot's lifetime.
///
/// ```ignore
/// let pilot = Pilot::new(400, 800, vec![vec![PriceComponent::new("Price", "1").into()]])?;
/// assert_eq!(pilot.view().rows().len(), 1);
/// ```
pub struct Pilot {
    view: ObjectView,
    timeline: Rc<Timeline>,
    source: Rc<StaticDataSource>,
    delegate: Rc<RecordingDelegate>,
}

impl Pilot {
    /// Build, reload and lay out a `width` x `height` view.
    pub fn new(width: i32, height: i32, rows: Vec<Vec<Component>>) -> Result<Self, LayoutError> {
        let timeline = Rc::new(Timeline::new());
        let view = ObjectView::new(timeline.clone());
        let source = Rc::new(StaticDataSource::new(rows));
        let delegate = Rc::new(RecordingDelegate::new());
        view.set_data_source(&source);
        view.set_delegate(&delegate);
        view.set_frame(Region::new(0, 0, width, height));

        let pilot = Self {
            view,
            timeline,
            source,
            delegate,
        };
        pilot.reload()?;
        Ok(pilot)
    }

    pub fn view(&self) -> &ObjectView {
        &self.view
    }

    pub fn timeline(&self) -> &Rc<Timeline> {
        &self.timeline
    }

    pub fn source(&self) -> &Rc<StaticDataSource> {
        &self.source
    }

    pub fn delegate(&self) -> &Rc<RecordingDelegate> {
        &self.delegate
    }

    /// Reload from the data source and lay out.
    pub fn reload(&self) -> Result<(), LayoutError> {
        self.view.reload_data();
        self.view.layout_if_needed()
    }

    /// Advance the clock by `elapsed`, then lay out. Returns how many
    /// completions ran.
    pub fn advance(&self, elapsed: Duration) -> Result<usize, LayoutError> {
        let ran = self.timeline.advance(elapsed);
        self.view.layout_if_needed()?;
        Ok(ran)
    }

    /// Run every pending transition to the end, then lay out.
    pub fn settle(&self) -> Result<usize, LayoutError> {
        let ran = self.timeline.run_until_idle();
        self.view.layout_if_needed()?;
        Ok(ran)
    }

    /// The `n`th widget of type `T`, in row order.
    pub fn widget<T: Widget + 'static>(&self, n: usize) -> Option<Rc<T>> {
        self.view.widgets_of::<T>().into_iter().nth(n)
    }

    /// Frame of the `n`th visible row, relative to the content view.
    pub fn row_frame(&self, n: usize) -> Option<Region> {
        let row = *self.view.rows().get(n)?;
        self.view.frame_of(row)
    }

    pub fn content_frame(&self) -> Option<Region> {
        self.view.frame_of(self.view.content_view())
    }

    pub fn tree(&self) -> String {
        tree_to_string(&self.view)
    }
}
