//! Axis-aligned rectangle tests
//!
//! Hitboxes are not sprite rectangles: both the craft and every obstacle
//! segment collide through an inward-padded box so near misses stay misses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Shrink by `padding` on each side (so width loses `2 * padding.x`)
    pub fn inset(&self, padding: Vec2) -> Self {
        Self::new(
            self.x + padding.x,
            self.y + padding.y,
            self.w - padding.x * 2.0,
            self.h - padding.y * 2.0,
        )
    }
}

/// Point strictly inside `rect` (a point on an edge is outside)
#[inline]
pub fn contains(rect: &Rect, x: f32, y: f32) -> bool {
    x > rect.x && x < rect.right() && y > rect.y && y < rect.bottom()
}

/// Separating-axis overlap test; rectangles that only touch do not overlap
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
