//! Kinematic body component integrated on a throttled sub-tick cadence.
//!
//! The [`RigidBody`] component stores velocity, a per-step acceleration
//! accumulator, a gravity scalar and a per-axis speed limit. The physics
//! step itself lives in [`crate::physics::integrator`]; this component only
//! holds state.
//!
//! The sub-tick counter makes most bodies integrate every N render ticks
//! (see [`PhysicsConfig::smoothing`](crate::resources::gameconfig::PhysicsConfig)).
//! Bodies with [`Cadence::Immediate`] skip the throttle and step every tick.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// How often a body runs the physics step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cadence {
    /// Step once every N ticks, N being the configured smoothing divisor.
    #[default]
    Throttled,
    /// Step every tick (bosses, camera followers).
    Immediate,
}

/// Kinematic body storing velocity, pending acceleration and gravity.
///
/// # Fields
/// - `velocity` - Displacement applied per physics step
/// - `acceleration` - Accumulated for the next step, zeroed after it
/// - `gravity` - Added to `acceleration.y` each step while `gravity_enabled`
/// - `max_speed` - Per-axis clamp applied to velocity
/// - `sub_tick` - Ticks counted since the last physics step
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::with_physics(1.2, 12.0);
/// rb.velocity.x = 4.0;
/// rb.acceleration.y -= 2.0;
/// ```
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per physics step.
    pub velocity: Vec2,
    /// Acceleration accumulated for the next step.
    pub acceleration: Vec2,
    /// Gravity scalar added to the vertical acceleration each step.
    pub gravity: f32,
    /// Whether gravity contributes to the next step.
    pub gravity_enabled: bool,
    /// Maximum absolute value of each velocity component.
    pub max_speed: f32,
    /// Render ticks counted since the last physics step.
    pub sub_tick: u32,
    /// Integration cadence.
    pub cadence: Cadence,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest with no gravity and no speed limit.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            gravity: 0.0,
            gravity_enabled: false,
            max_speed: f32::INFINITY,
            sub_tick: 0,
            cadence: Cadence::Throttled,
        }
    }

    /// Create a RigidBody with gravity enabled and a speed limit.
    pub fn with_physics(gravity: f32, max_speed: f32) -> Self {
        Self {
            gravity,
            gravity_enabled: true,
            max_speed,
            ..Self::new()
        }
    }

    /// Switch the integration cadence.
    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Whether the body is moving at all.
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Clamp each velocity component to `[-max_speed, max_speed]`, keeping its sign.
    pub fn clamp_velocity(&mut self) {
        let limit = self.max_speed;
        self.velocity.x = self.velocity.x.clamp(-limit, limit);
        self.velocity.y = self.velocity.y.clamp(-limit, limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert_eq!(rb.acceleration, Vec2::ZERO);
        assert!(!rb.gravity_enabled);
        assert!(rb.max_speed.is_infinite());
        assert_eq!(rb.cadence, Cadence::Throttled);
    }

    #[test]
    fn test_with_physics_enables_gravity() {
        let rb = RigidBody::with_physics(1.5, 10.0);
        assert!(rb.gravity_enabled);
        assert_eq!(rb.gravity, 1.5);
        assert_eq!(rb.max_speed, 10.0);
    }

    #[test]
    fn test_clamp_velocity_keeps_sign() {
        let mut rb = RigidBody::with_physics(0.0, 5.0);
        rb.velocity = Vec2::new(-9.0, 7.0);
        rb.clamp_velocity();
        assert_eq!(rb.velocity, Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_clamp_velocity_leaves_slow_bodies() {
        let mut rb = RigidBody::with_physics(0.0, 5.0);
        rb.velocity = Vec2::new(2.0, -3.0);
        rb.clamp_velocity();
        assert_eq!(rb.velocity, Vec2::new(2.0, -3.0));
    }
}
