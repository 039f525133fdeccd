//! Level extent resources used by the out-of-bounds check.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::boxcollider::Aabb;

/// The level's background rectangle in unshifted world coordinates.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    pub background: Aabb,
}

impl LevelBounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            background: Aabb::from_xywh(x, y, w, h),
        }
    }

    /// Region an actor must stay inside: the background moved by the world
    /// shift, with `margin` added above and below.
    pub fn playable_area(&self, shift: &WorldShift, margin: f32) -> Aabb {
        self.background.translated(shift.offset).padded(0.0, margin)
    }
}

/// Offset applied to the scene by the scrolling camera.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldShift {
    pub offset: Vec2,
}

impl WorldShift {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
        }
    }
}
