//! World setup, the tick schedule, level spawning and the mode controller.
//!
//! The engine core is a bevy [`World`] plus one chained [`Schedule`] built
//! by [`build_tick_schedule`]. Everything a level spawns is tagged with
//! [`LevelEntity`] so [`clear_level`] can tear it down before the next one
//! is loaded. [`ModeController`] sits outside the world and reacts to the
//! [`GameSignal`]s drained from the
//! [`SignalBridge`](crate::resources::signalbridge::SignalBridge).

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use glam::Vec2;
use log::{debug, info, warn};

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::door::Door;
use crate::components::inputcontrolled::{Jumper, MoveIntent};
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Hazard, LevelExit, Obstacle};
use crate::components::rigidbody::{Cadence, RigidBody};
use crate::components::switch::Switch;
use crate::events::signal::GameSignal;
use crate::physics::oscillator::Oscillator;
use crate::resources::gameconfig::PhysicsConfig;
use crate::resources::level::{LevelData, RectData};
use crate::resources::levelbounds::{LevelBounds, WorldShift};
use crate::resources::signalbridge::setup_signals;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::collision_resolver;
use crate::systems::hazards::{hazard_contacts, level_exit_check, out_of_bounds_check};
use crate::systems::input::apply_move_intent;
use crate::systems::movement::integrate_bodies;
use crate::systems::platforms::oscillate_platforms;
use crate::systems::signals::{forward_signals, update_signal_messages, update_switch_messages};
use crate::systems::switches::{door_dependencies, switch_contacts};
use crate::systems::time::update_world_time;

/// Tags every entity spawned from a [`LevelData`].
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct LevelEntity;

/// Create a world holding the configuration and every resource the tick
/// schedule reads.
pub fn build_world(config: PhysicsConfig) -> World {
    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldShift::default());
    setup_signals(&mut world);
    world
}

/// The per-tick system order.
///
/// input → platforms → integration → collision → switches → doors →
/// hazards → bounds → exit → forward signals → advance message queues.
pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            apply_move_intent,
            oscillate_platforms,
            integrate_bodies,
            collision_resolver,
            switch_contacts,
            door_dependencies,
            hazard_contacts,
            out_of_bounds_check,
            level_exit_check,
            forward_signals,
            update_switch_messages,
            update_signal_messages,
        )
            .chain(),
    );
    schedule
}

/// Advance the simulation by one tick.
pub fn tick(world: &mut World, schedule: &mut Schedule) {
    update_world_time(world);
    schedule.run(world);
}

fn collider(rect: &RectData) -> (MapPosition, BoxCollider) {
    (
        MapPosition {
            pos: rect.position(),
        },
        BoxCollider::new(rect.w, rect.h),
    )
}

/// Spawn every actor and obstacle of `level` and install its bounds.
pub fn spawn_level(world: &mut World, level: &LevelData, config: &PhysicsConfig) {
    let bg = &level.background;
    world.insert_resource(LevelBounds::new(bg.x, bg.y, bg.w, bg.h));
    world.insert_resource(WorldShift::default());

    for actor in &level.actors {
        let cadence = if actor.immediate {
            Cadence::Immediate
        } else {
            Cadence::Throttled
        };
        let (position, hitbox) = collider(&actor.rect);
        let mut entity = world.spawn((
            LevelEntity,
            Actor::new(actor.id),
            position,
            hitbox.with_offset(actor.hitbox_offset),
            RigidBody::with_physics(config.gravity, config.max_speed).with_cadence(cadence),
        ));
        if actor.controlled {
            entity.insert((
                MoveIntent::default(),
                Jumper::new(config.run_speed, config.jump_speed),
            ));
        }
    }

    for rect in &level.walls {
        world.spawn((LevelEntity, Obstacle::wall(), collider(rect)));
    }
    for rect in &level.platforms {
        world.spawn((LevelEntity, Obstacle::platform(), collider(rect)));
    }
    for platform in &level.directional {
        let tolerance = platform.tolerance.unwrap_or(config.directional_tolerance);
        world.spawn((
            LevelEntity,
            Obstacle::directional(tolerance),
            collider(&platform.rect),
        ));
    }
    for platform in &level.moving {
        world.spawn((
            LevelEntity,
            Obstacle::moving(Oscillator::new(platform.a, platform.b, platform.speed)),
            MapPosition { pos: platform.a },
            BoxCollider::new(platform.w, platform.h),
            RigidBody::new(),
        ));
    }
    for rect in &level.transparent {
        world.spawn((LevelEntity, Obstacle::transparent(), collider(rect)));
    }
    for switch in &level.switches {
        world.spawn((LevelEntity, Switch::new(switch.id), collider(&switch.rect)));
    }
    for door in &level.doors {
        world.spawn((
            LevelEntity,
            Door::new(door.id, door.waiting_for.iter().copied()),
            collider(&door.rect),
        ));
    }
    for hazard in &level.hazards {
        world.spawn((
            LevelEntity,
            Hazard {
                lethal: hazard.lethal,
            },
            collider(&hazard.rect),
        ));
    }
    if let Some(exit) = &level.exit {
        world.spawn((LevelEntity, LevelExit::new(exit.next_level), collider(&exit.rect)));
    }

    info!(
        "Spawned level {}: {} actors, {} walls, {} platforms, {} directional, {} moving, {} transparent, {} switches, {} doors, {} hazards",
        level.id,
        level.actors.len(),
        level.walls.len(),
        level.platforms.len(),
        level.directional.len(),
        level.moving.len(),
        level.transparent.len(),
        level.switches.len(),
        level.doors.len(),
        level.hazards.len()
    );
}

/// Despawn everything the current level spawned.
pub fn clear_level(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<LevelEntity>>()
        .iter(world)
        .collect();
    let count = entities.len();
    for entity in entities {
        world.despawn(entity);
    }
    world.remove_resource::<LevelBounds>();
    debug!("Cleared {} level entities", count);
}

/// Replace the current level with `level`.
pub fn load_level(world: &mut World, level: &LevelData) {
    clear_level(world);
    let config = world.resource::<PhysicsConfig>().clone();
    spawn_level(world, level, &config);
}

/// Set the intent of the controlled actor with `actor_id`.
pub fn set_intent(world: &mut World, actor_id: u32, intent: MoveIntent) {
    let mut query = world.query::<(&Actor, &mut MoveIntent)>();
    for (actor, mut current) in query.iter_mut(world) {
        if actor.id == actor_id {
            *current = intent;
        }
    }
}

/// Position of the actor with `actor_id`, if it exists.
pub fn actor_position(world: &mut World, actor_id: u32) -> Option<Vec2> {
    let mut query = world.query::<(&Actor, &MapPosition)>();
    query
        .iter(world)
        .find(|(actor, _)| actor.id == actor_id)
        .map(|(_, position)| position.pos)
}

// ==================== MODE CONTROLLER ====================

const DEFAULT_LIVES: u32 = 3;
const DEFAULT_HEALTH: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeState {
    Playing,
    GameOver,
}

/// What the runner has to do after a batch of signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAction {
    /// Respawn the current level from scratch.
    Reload(u32),
    /// Load another level.
    Load(u32),
    GameOver,
}

/// Lives, health and level progression, driven only by drained signals.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeController {
    pub level: u32,
    pub lives: u32,
    pub health: u32,
    pub max_health: u32,
    pub state: ModeState,
    pub switches_off: u32,
    pub doors_opened: u32,
}

impl ModeController {
    pub fn new(level: u32) -> Self {
        Self::with_lives(level, DEFAULT_LIVES)
    }

    pub fn with_lives(level: u32, lives: u32) -> Self {
        Self {
            level,
            lives,
            health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
            state: ModeState::Playing,
            switches_off: 0,
            doors_opened: 0,
        }
    }

    /// Handle the signals of one frame, oldest first.
    ///
    /// The first signal that changes the level ends the batch: signals after
    /// it belong to a level instance that is about to be thrown away.
    pub fn process(&mut self, signals: &[GameSignal]) -> Option<ModeAction> {
        if self.state == ModeState::GameOver {
            return None;
        }
        for signal in signals {
            let action = match *signal {
                GameSignal::SwitchDeactivated { switch_id } => {
                    self.switches_off += 1;
                    debug!("switch {} off", switch_id);
                    None
                }
                GameSignal::DoorOpened { door_id } => {
                    self.doors_opened += 1;
                    debug!("door {} open", door_id);
                    None
                }
                GameSignal::Damage { actor_id } => {
                    self.health = self.health.saturating_sub(1);
                    info!("actor {} damaged, health {}", actor_id, self.health);
                    if self.health == 0 {
                        Some(self.lose_life())
                    } else {
                        None
                    }
                }
                GameSignal::Death { actor_id } => {
                    info!("actor {} died", actor_id);
                    Some(self.lose_life())
                }
                GameSignal::LevelTransition { next_level } => {
                    info!("level {} complete, next {}", self.level, next_level);
                    self.level = next_level;
                    self.health = self.max_health;
                    Some(ModeAction::Load(next_level))
                }
            };
            if action.is_some() {
                return action;
            }
        }
        None
    }

    fn lose_life(&mut self) -> ModeAction {
        self.lives = self.lives.saturating_sub(1);
        self.health = self.max_health;
        if self.lives == 0 {
            warn!("game over on level {}", self.level);
            self.state = ModeState::GameOver;
            ModeAction::GameOver
        } else {
            info!("{} lives left, reloading level {}", self.lives, self.level);
            ModeAction::Reload(self.level)
        }
    }
}
