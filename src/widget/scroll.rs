//! Vertical scrolling of the content view inside the scroll view.
//!
//! The content is as wide as the viewport, so in practice only `y` moves, but
//! both axes are clamped the same way.

use crate::geometry::{Offset, Region, Size};

/// Where the viewport sits over the content, plus the two sizes from the last
/// layout pass that bound it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: Offset,
    content: Size,
    viewport: Size,
}

impl ScrollState {
    pub fn new(content: Size, viewport: Size) -> Self {
        Self {
            offset: Offset::ZERO,
            content,
            viewport,
        }
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Furthest the viewport can travel; zero on an axis the content fits.
    pub fn max_scroll(&self) -> Offset {
        Offset::new(
            self.content.width - self.viewport.width,
            self.content.height - self.viewport.height,
        )
        .clamped_to(Offset::new(i32::MAX, i32::MAX))
    }

    pub fn scroll_to(&mut self, x: i32, y: i32) {
        self.offset = Offset::new(x, y).clamped_to(self.max_scroll());
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.offset = (self.offset + Offset::new(dx, dy)).clamped_to(self.max_scroll());
    }

    pub fn is_scrollable_y(&self) -> bool {
        self.max_scroll().y > 0
    }

    /// Whether any part of `frame`, in content coordinates, is on screen.
    pub fn is_visible(&self, frame: Region) -> bool {
        frame.bottom() > self.offset.y && frame.y < self.offset.y + self.viewport.height
    }

    /// Move the least distance that shows all of `frame`. A frame taller
    /// than the viewport is aligned to its top edge.
    pub fn scroll_to_visible(&mut self, frame: Region) {
        let top = self.offset.y;
        let bottom = top + self.viewport.height;
        let y = if frame.y < top || frame.height > self.viewport.height {
            frame.y
        } else if frame.bottom() > bottom {
            frame.bottom() - self.viewport.height
        } else {
            return;
        };
        self.scroll_to(self.offset.x, y);
    }

    /// Take the sizes from a fresh layout pass. The offset is pulled back in
    /// if the content shrank.
    pub fn resize(&mut self, content: Size, viewport: Size) {
        self.content = content;
        self.viewport = viewport;
        self.offset = self.offset.clamped_to(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // 400 points of overflow.
    fn long_ad() -> ScrollState {
        ScrollState::new(Size::new(400, 1200), Size::new(400, 800))
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut state = ScrollState::new(Size::new(400, 300), Size::new(400, 800));
        assert_eq!(state.max_scroll(), Offset::ZERO);
        assert!(!state.is_scrollable_y());
        state.scroll_by(0, 50);
        assert_eq!(state.offset, Offset::ZERO);
    }

    #[test]
    fn positions_are_clamped() {
        let mut state = long_ad();
        assert_eq!(state.max_scroll(), Offset::new(0, 400));
        state.scroll_to(50, 1000);
        assert_eq!(state.offset, Offset::new(0, 400));
        state.scroll_by(0, -450);
        assert_eq!(state.offset, Offset::ZERO);
        state.scroll_by(0, 100);
        state.scroll_by(0, 150);
        assert_eq!(state.offset.y, 250);
    }

    #[test]
    fn visibility_uses_the_viewport_window() {
        let mut state = long_ad();
        state.scroll_to(0, 300);
        assert!(!state.is_visible(Region::new(16, 0, 368, 44)));
        assert!(state.is_visible(Region::new(16, 280, 368, 44)));
        assert!(state.is_visible(Region::new(16, 1090, 368, 44)));
        assert!(!state.is_visible(Region::new(16, 1100, 368, 44)));
    }

    #[test]
    fn scroll_to_visible_moves_the_least_distance() {
        let mut state = long_ad();
        state.scroll_to_visible(Region::new(16, 900, 368, 44));
        assert_eq!(state.offset.y, 144);

        // Already on screen.
        state.scroll_to_visible(Region::new(16, 500, 368, 44));
        assert_eq!(state.offset.y, 144);

        state.scroll_to_visible(Region::new(16, 60, 368, 44));
        assert_eq!(state.offset.y, 60);

        state.scroll_to_visible(Region::new(16, 100, 368, 1000));
        assert_eq!(state.offset.y, 100);
    }

    #[test]
    fn shrinking_content_pulls_the_offset_back() {
        let mut state = long_ad();
        state.scroll_to(0, 400);
        state.resize(Size::new(400, 900), Size::new(400, 800));
        assert_eq!(state.offset.y, 100);
        assert_eq!(state.content_size(), Size::new(400, 900));
        assert_eq!(state.viewport_size(), Size::new(400, 800));
    }
}
