//! Axis-aligned rectangle math
//!
//! All entities and UI controls are AABBs; intersection and out-of-bounds
//! tests here are the only geometry the simulation needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square rect centered on `center`
    pub fn centered(center: Vec2, side: f32) -> Self {
        Self {
            pos: center - Vec2::splat(side / 2.0),
            size: Vec2::splat(side),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Axis-aligned intersection test (edge contact does not count,
    /// matching SDL_HasIntersection)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.max().x
            && other.pos.x < self.max().x
            && self.pos.y < other.max().y
            && other.pos.y < self.max().y
    }

    /// True if the rect lies entirely outside a `(0,0)..(w,h)` arena
    pub fn outside_arena(&self, w: f32, h: f32) -> bool {
        self.max().x < 0.0 || self.pos.x > w || self.max().y < 0.0 || self.pos.y > h
    }

    /// Point containment (for pointer hit tests on buttons)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.max().x
            && point.y >= self.pos.y
            && point.y < self.max().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_outside_arena_requires_full_exit() {
        // Straddling the boundary is still inside
        let straddling = Rect::new(-16.0, 100.0, 32.0, 32.0);
        assert!(!straddling.outside_arena(800.0, 600.0));

        let gone_left = Rect::new(-33.0, 100.0, 32.0, 32.0);
        assert!(gone_left.outside_arena(800.0, 600.0));

        let gone_down = Rect::new(100.0, 601.0, 32.0, 32.0);
        assert!(gone_down.outside_arena(800.0, 600.0));
    }

    #[test]
    fn test_contains_point() {
        let btn = Rect::new(300.0, 250.0, 200.0, 60.0);
        assert!(btn.contains(Vec2::new(400.0, 280.0)));
        assert!(!btn.contains(Vec2::new(299.0, 280.0)));
        assert!(!btn.contains(Vec2::new(400.0, 310.0)));
    }

    proptest::proptest! {
        #[test]
        fn intersection_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            proptest::prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn rect_never_outside_arena_while_center_inside(
            x in 0.0f32..768.0, y in 0.0f32..568.0,
        ) {
            let r = Rect::new(x, y, 32.0, 32.0);
            proptest::prop_assert!(!r.outside_arena(800.0, 600.0));
        }
    }
}
