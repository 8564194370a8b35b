//! Rectangle type for collision and drawing
//!
//! Every entity in the platformers is an axis-aligned rectangle; all
//! collision checks are rectangle-overlap tests and all resolution is
//! edge snapping.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by top-left position and size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Strict overlap test: shared edges do not count as overlap,
    /// so a body resting exactly on a platform top is not colliding.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.x = x - self.w;
    }

    /// Move so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.x = x;
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Move so the top edge sits at `y`
    pub fn set_top(&mut self, y: f32) {
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Resting exactly on top of b
        let b = Rect::new(0.0, 10.0, 10.0, 10.0);
        // Side by side with a
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_edge_snapping() {
        let mut r = Rect::new(3.0, 7.0, 20.0, 30.0);

        r.set_right(120.0);
        assert!((r.x - 100.0).abs() < 0.001);

        r.set_bottom(360.0);
        assert!((r.y - 330.0).abs() < 0.001);

        r.set_left(0.0);
        r.set_top(0.0);
        assert!((r.right() - 20.0).abs() < 0.001);
        assert!((r.bottom() - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_center_accessors() {
        let r = Rect::new(100.0, 300.0, 20.0, 20.0);
        assert!((r.center_x() - 110.0).abs() < 0.001);
        assert!((r.center_y() - 310.0).abs() < 0.001);
    }
}
