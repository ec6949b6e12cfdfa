//! Axis-aligned rectangles
//!
//! Every entity collides as a box. Coordinates are screen space: x grows to the
//! right, y grows downward, the playfield spans `[0, width] x [0, height]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle stored as its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// The playfield itself
    pub fn playfield(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True when no part of `self` lies inside `bounds`
    pub fn is_fully_outside(&self, bounds: &Rect) -> bool {
        self.bottom() < bounds.top()
            || self.top() > bounds.bottom()
            || self.right() < bounds.left()
            || self.left() > bounds.right()
    }

    /// True when `self` lies entirely within `bounds` (edges inclusive)
    pub fn is_within(&self, bounds: &Rect) -> bool {
        self.left() >= bounds.left()
            && self.right() <= bounds.right()
            && self.top() >= bounds.top()
            && self.bottom() <= bounds.bottom()
    }

    /// Shift the rectangle so it lies inside `bounds`, one side at a time.
    ///
    /// A rectangle larger than `bounds` ends up aligned to the right/bottom edge.
    pub fn clamped_within(&self, bounds: &Rect) -> Rect {
        let mut min = self.min;
        min.x = min.x.max(bounds.left());
        min.x = min.x.min(bounds.right() - self.size.x);
        min.y = min.y.max(bounds.top());
        min.y = min.y.min(bounds.bottom() - self.size.y);
        Rect::new(min, self.size)
    }
}
