//! Obstacle components owned by the level.
//!
//! Every collidable piece of level geometry carries a
//! [`BoxCollider`](super::boxcollider::BoxCollider), a
//! [`MapPosition`](super::mapposition::MapPosition) and one of the
//! components below:
//!
//! - [`Obstacle`] – solid or conditional geometry resolved by the collision pass
//! - [`Hazard`] – spikes and enemies; contact is reported, never resolved
//! - [`LevelExit`] – contact requests the next level
//!
//! Switches and doors live in [`super::switch`] and [`super::door`].

use bevy_ecs::prelude::Component;

use crate::physics::oscillator::Oscillator;

/// Kind-specific data for an obstacle; selects the side policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObstacleKind {
    /// Level boundary walls; solid on every side.
    Wall,
    /// Fixed platform; solid on every side.
    Static,
    /// One-way platform, solid only for landings shallower than `tolerance`.
    Directional { tolerance: f32 },
    /// Platform travelling between two waypoints; carries its riders.
    Moving(Oscillator),
    /// Older one-way platform variant with its own landing rules.
    Transparent,
}

/// Collision group an obstacle belongs to. Groups resolve in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObstacleGroup {
    Walls,
    Static,
    Directional,
    Moving,
    Transparent,
}

impl ObstacleGroup {
    pub const ORDER: [ObstacleGroup; 5] = [
        ObstacleGroup::Walls,
        ObstacleGroup::Static,
        ObstacleGroup::Directional,
        ObstacleGroup::Moving,
        ObstacleGroup::Transparent,
    ];
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn wall() -> Self {
        Self {
            kind: ObstacleKind::Wall,
        }
    }

    pub fn platform() -> Self {
        Self {
            kind: ObstacleKind::Static,
        }
    }

    pub fn directional(tolerance: f32) -> Self {
        Self {
            kind: ObstacleKind::Directional { tolerance },
        }
    }

    pub fn moving(oscillator: Oscillator) -> Self {
        Self {
            kind: ObstacleKind::Moving(oscillator),
        }
    }

    pub fn transparent() -> Self {
        Self {
            kind: ObstacleKind::Transparent,
        }
    }

    pub fn group(&self) -> ObstacleGroup {
        match self.kind {
            ObstacleKind::Wall => ObstacleGroup::Walls,
            ObstacleKind::Static => ObstacleGroup::Static,
            ObstacleKind::Directional { .. } => ObstacleGroup::Directional,
            ObstacleKind::Moving(_) => ObstacleGroup::Moving,
            ObstacleKind::Transparent => ObstacleGroup::Transparent,
        }
    }
}

/// Damaging contact. Lethal hazards (spikes) report death, others damage.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hazard {
    pub lethal: bool,
}

impl Hazard {
    pub fn spikes() -> Self {
        Self { lethal: true }
    }

    pub fn enemy() -> Self {
        Self { lethal: false }
    }
}

/// Exit zone; the first actor to touch it requests `next_level`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelExit {
    pub next_level: u32,
    pub triggered: bool,
}

impl LevelExit {
    pub fn new(next_level: u32) -> Self {
        Self {
            next_level,
            triggered: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_group_follows_kind() {
        assert_eq!(Obstacle::wall().group(), ObstacleGroup::Walls);
        assert_eq!(Obstacle::platform().group(), ObstacleGroup::Static);
        assert_eq!(Obstacle::directional(30.0).group(), ObstacleGroup::Directional);
        let osc = Oscillator::new(Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(1.0, 0.0));
        assert_eq!(Obstacle::moving(osc).group(), ObstacleGroup::Moving);
        assert_eq!(Obstacle::transparent().group(), ObstacleGroup::Transparent);
    }

    #[test]
    fn test_group_order_is_walls_first() {
        let mut sorted = ObstacleGroup::ORDER;
        sorted.sort();
        assert_eq!(sorted, ObstacleGroup::ORDER);
        assert_eq!(ObstacleGroup::ORDER[0], ObstacleGroup::Walls);
    }
}
