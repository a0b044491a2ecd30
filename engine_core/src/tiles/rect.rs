// engine_core/src/tiles/rect.rs
use glam::IVec2;

/// Integer axis-aligned box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 { self.x }
    pub fn right(&self) -> i32 { self.x.saturating_add(self.w) }
    pub fn top(&self) -> i32 { self.y }
    pub fn bottom(&self) -> i32 { self.y.saturating_add(self.h) }

    /// Move the box so its left edge sits at `left`.
    pub fn set_left(&mut self, left: i32) { self.x = left; }
    /// Move the box so its right edge sits at `right`.
    pub fn set_right(&mut self, right: i32) { self.x = right.saturating_sub(self.w); }
    /// Move the box so its top edge sits at `top`.
    pub fn set_top(&mut self, top: i32) { self.y = top; }
    /// Move the box so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: i32) { self.y = bottom.saturating_sub(self.h); }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
