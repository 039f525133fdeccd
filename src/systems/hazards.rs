//! Hazard, boundary and exit checks.
//!
//! None of these move anything: they only report to the controller through
//! [`GameSignal`]. Hazard and boundary signals repeat every tick the
//! condition holds; an exit fires once per level instance.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Hazard, LevelExit};
use crate::events::signal::GameSignal;
use crate::resources::gameconfig::PhysicsConfig;
use crate::resources::levelbounds::{LevelBounds, WorldShift};

/// Lethal hazards report `Death`, the rest `Damage`.
pub fn hazard_contacts(
    actors: Query<(&Actor, &MapPosition, &BoxCollider)>,
    hazards: Query<(&Hazard, &MapPosition, &BoxCollider), Without<Actor>>,
    mut signals: MessageWriter<GameSignal>,
) {
    for (actor, actor_pos, actor_collider) in actors.iter() {
        let actor_box = actor_collider.aabb(actor_pos.pos);
        for (hazard, position, collider) in hazards.iter() {
            if !actor_box.overlaps(&collider.aabb(position.pos)) {
                continue;
            }
            let signal = if hazard.lethal {
                GameSignal::Death { actor_id: actor.id }
            } else {
                GameSignal::Damage { actor_id: actor.id }
            };
            debug!("actor {} hit a hazard: {:?}", actor.id, signal);
            signals.write(signal);
        }
    }
}

/// Report `Death` for every actor not fully inside the playable area.
pub fn out_of_bounds_check(
    actors: Query<(&Actor, &MapPosition, &BoxCollider)>,
    bounds: Option<Res<LevelBounds>>,
    shift: Option<Res<WorldShift>>,
    config: Res<PhysicsConfig>,
    mut signals: MessageWriter<GameSignal>,
) {
    let Some(bounds) = bounds else {
        return;
    };
    let shift = shift.map(|s| *s).unwrap_or_default();
    let area = bounds.playable_area(&shift, config.bounds_margin);

    for (actor, position, collider) in actors.iter() {
        if !area.contains(&collider.aabb(position.pos)) {
            debug!("actor {} is out of bounds", actor.id);
            signals.write(GameSignal::Death { actor_id: actor.id });
        }
    }
}

pub fn level_exit_check(
    actors: Query<(&Actor, &MapPosition, &BoxCollider)>,
    mut exits: Query<(&mut LevelExit, &MapPosition, &BoxCollider), Without<Actor>>,
    mut signals: MessageWriter<GameSignal>,
) {
    for (mut exit, position, collider) in exits.iter_mut() {
        if exit.triggered {
            continue;
        }
        let exit_box = collider.aabb(position.pos);
        let reached_by = actors
            .iter()
            .find(|(_, actor_pos, actor_collider)| {
                actor_collider.aabb(actor_pos.pos).overlaps(&exit_box)
            })
            .map(|(actor, _, _)| actor.id);
        if let Some(actor_id) = reached_by {
            exit.triggered = true;
            info!("actor {} reached the exit to level {}", actor_id, exit.next_level);
            signals.write(GameSignal::LevelTransition {
                next_level: exit.next_level,
            });
        }
    }
}
