//! Point geometry for frames and scroll positions.
//!
//! Everything is measured in whole points. The layout engine rounds its float
//! output before building these values.

use std::ops::Add;

/// Displacement in points. Used for scroll positions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp each axis into `0..=max` on that axis.
    #[inline]
    pub fn clamped_to(self, max: Offset) -> Offset {
        Offset::new(self.x.clamp(0, max.x.max(0)), self.y.clamp(0, max.y.max(0)))
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, delta: Offset) -> Offset {
        Offset::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Extent of a frame or intrinsic measurement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A frame: origin relative to the superview, plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub const ZERO: Region = Region::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the last row of points covered by this frame.
    #[inline]
    pub fn bottom(self) -> i32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_add_per_axis() {
        assert_eq!(Offset::new(0, 60) + Offset::new(5, -25), Offset::new(5, 35));
    }

    #[test]
    fn clamped_to_keeps_offsets_in_range() {
        let max = Offset::new(0, 60);
        assert_eq!(Offset::new(12, 90).clamped_to(max), Offset::new(0, 60));
        assert_eq!(Offset::new(-3, -1).clamped_to(max), Offset::ZERO);
        assert_eq!(Offset::new(0, 30).clamped_to(max), Offset::new(0, 30));
        // A negative bound behaves as zero.
        assert_eq!(Offset::new(4, 4).clamped_to(Offset::new(-10, -10)), Offset::ZERO);
    }

    #[test]
    fn region_bottom_and_size() {
        let row = Region::new(16, 60, 368, 44);
        assert_eq!(row.bottom(), 104);
        assert_eq!(row.size(), Size::new(368, 44));
    }
}
