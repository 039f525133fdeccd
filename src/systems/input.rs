//! Intent-to-velocity controller for input-driven actors.
//!
//! Reads each actor's [`MoveIntent`] and sets its horizontal velocity from
//! the [`Jumper`] tuning. A jump is only honoured while the actor is
//! standing on something (`can_jump`); it replaces the vertical velocity and
//! spends the jump.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::Actor;
use crate::components::inputcontrolled::{Jumper, MoveIntent};
use crate::components::rigidbody::RigidBody;

/// Apply the current intent of every controlled actor.
pub fn apply_move_intent(mut query: Query<(&MoveIntent, &Jumper, &mut Actor, &mut RigidBody)>) {
    for (intent, jumper, mut actor, mut rigidbody) in query.iter_mut() {
        rigidbody.velocity.x = intent.horizontal() * jumper.run_speed;

        if intent.jump && actor.can_jump {
            rigidbody.velocity.y = -jumper.jump_speed;
            actor.can_jump = false;
            debug!("actor {} jumps", actor.id);
        }
    }
}
