//! Switch contacts and door dependency updates.
//!
//! [`switch_contacts`] turns off armed switches touched by a moving actor
//! and announces each one twice: a [`SwitchToggled`] for the door pass of
//! the same tick and a [`GameSignal::SwitchDeactivated`] for the
//! controller. [`door_dependencies`] then strikes the switch off every
//! door waiting on it.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::door::Door;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::switch::Switch;
use crate::events::signal::{GameSignal, SwitchToggled};

pub fn switch_contacts(
    actors: Query<(&Actor, &MapPosition, &BoxCollider, &RigidBody)>,
    mut switches: Query<(&mut Switch, &MapPosition, &BoxCollider), Without<Actor>>,
    mut toggled: MessageWriter<SwitchToggled>,
    mut signals: MessageWriter<GameSignal>,
) {
    for (actor, actor_pos, actor_collider, rigidbody) in actors.iter() {
        let actor_box = actor_collider.aabb(actor_pos.pos);
        for (mut switch, position, collider) in switches.iter_mut() {
            if !actor_box.overlaps(&collider.aabb(position.pos)) {
                continue;
            }
            if switch.on_contact(rigidbody.is_moving()) {
                info!("actor {} turned off switch {}", actor.id, switch.id);
                toggled.write(SwitchToggled {
                    switch_id: switch.id,
                });
                signals.write(GameSignal::SwitchDeactivated {
                    switch_id: switch.id,
                });
            }
        }
    }
}

pub fn door_dependencies(
    mut toggled: MessageReader<SwitchToggled>,
    mut doors: Query<&mut Door>,
    mut signals: MessageWriter<GameSignal>,
) {
    for event in toggled.read() {
        for mut door in doors.iter_mut() {
            if door.on_switch_event(event.switch_id) {
                info!("door {} opened", door.id);
                signals.write(GameSignal::DoorOpened { door_id: door.id });
            }
        }
    }
}
