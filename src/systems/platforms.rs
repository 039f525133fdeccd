//! Moving platform stepping.
//!
//! Advances the [`Oscillator`](crate::physics::oscillator::Oscillator) of
//! every moving obstacle. A platform with a [`RigidBody`] follows the body's
//! cadence, so a throttled platform moves on the same ticks as the throttled
//! actors riding it; without a body it steps every tick. On ticks without a
//! step the oscillator rests and carries nobody.
use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Obstacle, ObstacleKind};
use crate::components::rigidbody::{Cadence, RigidBody};
use crate::physics::integrator::integrate;
use crate::resources::gameconfig::PhysicsConfig;

pub fn oscillate_platforms(
    mut query: Query<(&mut Obstacle, &mut MapPosition, Option<&mut RigidBody>), Without<Actor>>,
    config: Res<PhysicsConfig>,
) {
    for (mut obstacle, mut position, rigidbody) in query.iter_mut() {
        let ObstacleKind::Moving(oscillator) = &mut obstacle.kind else {
            continue;
        };
        let due = match rigidbody {
            Some(mut rigidbody) if rigidbody.cadence == Cadence::Throttled => {
                integrate(&mut rigidbody, &mut position.pos, config.smoothing)
            }
            _ => true,
        };
        if due {
            oscillator.step(&mut position.pos);
        } else {
            oscillator.rest();
        }
    }
}
