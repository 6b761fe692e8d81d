//! Axis-aligned geometry for bricks, paddle, power-ups and balls
//!
//! Field coordinates grow right (x) and down (y); the origin is the top-left
//! corner of the play area.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Measured play-field size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host has measured a real size
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Same vertical extent and horizontal center, new width
    pub fn with_width_centered(&self, width: f32) -> Rect {
        let cx = self.center_x();
        Rect::new(cx - width / 2.0, self.top, cx + width / 2.0, self.bottom)
    }

    /// Shift horizontally so the rectangle sits inside `[min_x, max_x]`
    ///
    /// A rectangle wider than the range is pinned to `min_x`.
    pub fn clamped_x(&self, min_x: f32, max_x: f32) -> Rect {
        if self.left < min_x || self.width() > max_x - min_x {
            self.offset(min_x - self.left, 0.0)
        } else if self.right > max_x {
            self.offset(max_x - self.right, 0.0)
        } else {
            *self
        }
    }
}

/// A circle (balls)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}
