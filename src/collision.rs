//! Axis-aligned collision primitives.
//!
//! Kinematics in this game are continuous (sub-pixel lane easing, speeds in
//! px/s), so colliders are f32 rectangles rather than SDL's integer `Rect`.
//! Conversion to `Rect` happens only at the render boundary.

use sdl2::rect::Rect;

/// An axis-aligned f32 rectangle used for overlap testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Collider {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Collider { x, y, w, h }
    }

    /// Builds a collider from its center point and full extent.
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Collider {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Returns a copy scaled by `factor` on both axes, re-centered.
    ///
    /// Used to tighten hit-boxes relative to sprite bounds: a factor below
    /// 1.0 tolerates visual overlap at the sprite edges before a collision
    /// registers.
    pub fn shrunk(&self, factor: f32) -> Self {
        let (cx, cy) = self.center();
        Collider::centered(cx, cy, self.w * factor, self.h * factor)
    }

    /// AABB intersection test. Edges that merely touch do not intersect.
    pub fn intersects(&self, other: &Collider) -> bool {
        let x_overlap = self.x < other.right() && self.right() > other.x;
        let y_overlap = self.y < other.bottom() && self.bottom() > other.y;
        x_overlap && y_overlap
    }

    /// Integer rectangle for the render pass.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.w.max(0.0).round() as u32,
            self.h.max(0.0).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlapping() {
        let a = Collider::new(0.0, 0.0, 32.0, 32.0);
        let b = Collider::new(16.0, 16.0, 32.0, 32.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a)); // Symmetric
    }

    #[test]
    fn test_intersects_touching_edges() {
        // Rectangles sharing an edge do not count as intersecting
        let a = Collider::new(0.0, 0.0, 32.0, 32.0);
        let b = Collider::new(32.0, 0.0, 32.0, 32.0);

        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_separated() {
        let a = Collider::new(0.0, 0.0, 32.0, 32.0);
        let b = Collider::new(100.0, 100.0, 32.0, 32.0);

        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_contained() {
        let large = Collider::new(0.0, 0.0, 100.0, 100.0);
        let small = Collider::new(25.0, 25.0, 50.0, 50.0);

        assert!(large.intersects(&small));
        assert!(small.intersects(&large));
    }

    #[test]
    fn test_centered_constructor() {
        let c = Collider::centered(50.0, 40.0, 20.0, 10.0);

        assert_eq!(c.x, 40.0);
        assert_eq!(c.y, 35.0);
        assert_eq!(c.center(), (50.0, 40.0));
    }

    #[test]
    fn test_shrunk_keeps_center() {
        let c = Collider::new(10.0, 10.0, 100.0, 40.0);
        let s = c.shrunk(0.7);

        assert_eq!(s.center(), c.center());
        assert!((s.w - 70.0).abs() < f32::EPSILON);
        assert!((s.h - 28.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_shrunk_boxes_can_miss_where_full_boxes_hit() {
        // Sprites overlap by a sliver at the edges; tightened boxes do not
        let a = Collider::new(0.0, 0.0, 100.0, 100.0);
        let b = Collider::new(95.0, 0.0, 100.0, 100.0);

        assert!(a.intersects(&b));
        assert!(!a.shrunk(0.7).intersects(&b.shrunk(0.7)));
    }
}
