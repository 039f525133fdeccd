//! Fixed-cadence velocity/position integration.
//!
//! [`integrate`] is called once per render tick and runs [`step`] only when
//! the body's sub-tick counter reaches the smoothing divisor. Skipped ticks
//! still consume a counter increment. [`immediate_update`] runs the step
//! unconditionally.

use glam::Vec2;

use crate::components::rigidbody::RigidBody;

/// Count one render tick and run the physics step when it is due.
///
/// Returns `true` when the step ran. A `smoothing` of 0 or 1 steps every tick.
pub fn integrate(body: &mut RigidBody, position: &mut Vec2, smoothing: u32) -> bool {
    body.sub_tick += 1;
    if body.sub_tick < smoothing.max(1) {
        return false;
    }
    body.sub_tick = 0;
    step(body, position);
    true
}

/// Run the physics step now, ignoring the sub-tick throttle.
pub fn immediate_update(body: &mut RigidBody, position: &mut Vec2) {
    step(body, position);
}

/// One physics step: gravity, acceleration, speed clamp, position, reset.
///
/// The clamp runs after acceleration so `|velocity| <= max_speed` holds per
/// axis once the step completes.
pub fn step(body: &mut RigidBody, position: &mut Vec2) {
    if body.gravity_enabled {
        body.acceleration.y += body.gravity;
    }
    body.velocity += body.acceleration;
    body.clamp_velocity();
    *position += body.velocity;
    body.acceleration = Vec2::ZERO;
}
