//! Axis-aligned box collider and the [`Aabb`] it produces.
//!
//! A [`BoxCollider`] is attached next to a
//! [`MapPosition`](super::mapposition::MapPosition); the world-space box is
//! `position + offset` extended by `size`. Screen coordinates are used
//! throughout: `y` grows downwards, so `top < bottom`.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from its top-left corner and size.
    /// Handles negative size by normalizing to proper min/max.
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        let p0 = Vec2::new(x, y);
        let p1 = p0 + Vec2::new(w, h);
        Self {
            min: p0.min(p1),
            max: p0.max(p1),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// True when `other` lies entirely inside this box (edges inclusive).
    pub fn contains(&self, other: &Aabb) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    /// Same box moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Same box grown by `dx` on the left and right and `dy` on the top and bottom.
    pub fn padded(&self, dx: f32, dy: f32) -> Self {
        let pad = Vec2::new(dx, dy);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space box of the collider for a given entity position.
    pub fn aabb(&self, position: Vec2) -> Aabb {
        let p0 = position + self.offset;
        Aabb::from_xywh(p0.x, p0.y, self.size.x, self.size.y)
    }

    /// Entity position that places the collider's top-left corner at `min`.
    pub fn position_for(&self, min: Vec2) -> Vec2 {
        min - self.offset
    }
}
