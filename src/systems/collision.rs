//! Actor/obstacle collision pass.
//!
//! Snapshots every obstacle once, then resolves each actor against the
//! groups in [`ObstacleGroup::ORDER`], followed by the closed doors which
//! behave as walls. Corrections made by a later group win over earlier
//! ones. The resolved box, velocity and jump flag are written back to the
//! actor.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::actor::Actor;
use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::door::Door;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Obstacle, ObstacleGroup, ObstacleKind};
use crate::components::rigidbody::RigidBody;
use crate::physics::resolver::{Mover, resolve};
use crate::resources::gameconfig::PhysicsConfig;

const DOOR_KIND: ObstacleKind = ObstacleKind::Wall;

pub fn collision_resolver(
    mut actors: Query<(&mut Actor, &mut MapPosition, &BoxCollider, &mut RigidBody)>,
    obstacles: Query<(&Obstacle, &MapPosition, &BoxCollider), Without<Actor>>,
    doors: Query<(&Door, &MapPosition, &BoxCollider), Without<Actor>>,
    config: Res<PhysicsConfig>,
) {
    let settings = config.resolve_settings();

    let snapshot: Vec<(ObstacleGroup, Aabb, ObstacleKind)> = obstacles
        .iter()
        .map(|(obstacle, position, collider)| {
            (obstacle.group(), collider.aabb(position.pos), obstacle.kind)
        })
        .collect();
    let closed_doors: Vec<Aabb> = doors
        .iter()
        .filter(|(door, _, _)| door.is_closed)
        .map(|(_, position, collider)| collider.aabb(position.pos))
        .collect();

    for (mut actor, mut position, collider, mut rigidbody) in actors.iter_mut() {
        let mut mover = Mover::new(
            collider.aabb(position.pos),
            rigidbody.velocity,
            actor.can_jump,
        );

        for group in ObstacleGroup::ORDER {
            let sides = resolve(
                &mut mover,
                snapshot
                    .iter()
                    .filter(|(g, _, _)| *g == group)
                    .map(|(_, aabb, kind)| (aabb, kind)),
                &settings,
            );
            if !sides.is_empty() {
                trace!("actor {} vs {:?}: {:?}", actor.id, group, sides);
            }
        }
        resolve(
            &mut mover,
            closed_doors.iter().map(|aabb| (aabb, &DOOR_KIND)),
            &settings,
        );

        position.pos = collider.position_for(mover.min);
        rigidbody.velocity = mover.velocity;
        actor.can_jump = mover.can_jump;
    }
}
