//! Body integration.
//!
//! Throttled bodies advance through
//! [`integrate`](crate::physics::integrator::integrate) with the configured
//! smoothing divisor; immediate ones step every tick. A performed step
//! clears the actor's `can_jump`: only a landing in the following collision
//! pass grants it again. Moving platforms count their own ticks in
//! [`crate::systems::platforms`].
use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::rigidbody::{Cadence, RigidBody};
use crate::physics::integrator::{immediate_update, integrate};
use crate::resources::gameconfig::PhysicsConfig;

pub fn integrate_bodies(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&mut Actor>), Without<Obstacle>>,
    config: Res<PhysicsConfig>,
) {
    for (mut position, mut rigidbody, actor) in query.iter_mut() {
        let stepped = match rigidbody.cadence {
            Cadence::Throttled => integrate(&mut rigidbody, &mut position.pos, config.smoothing),
            Cadence::Immediate => {
                immediate_update(&mut rigidbody, &mut position.pos);
                true
            }
        };
        if let (true, Some(mut actor)) = (stepped, actor) {
            actor.can_jump = false;
        }
    }
}
