//! Engine tick integration tests: integration, collision groups, switches,
//! doors, hazards, bounds, exits and the outbound signal channel.

use bevy_ecs::prelude::*;
use glam::Vec2;

use ledgekit::components::actor::Actor;
use ledgekit::components::boxcollider::BoxCollider;
use ledgekit::components::door::Door;
use ledgekit::components::inputcontrolled::{Jumper, MoveIntent};
use ledgekit::components::mapposition::MapPosition;
use ledgekit::components::obstacle::{Hazard, LevelExit, Obstacle};
use ledgekit::components::rigidbody::{Cadence, RigidBody};
use ledgekit::components::switch::Switch;
use ledgekit::events::signal::GameSignal;
use ledgekit::game::{build_tick_schedule, build_world, set_intent, tick};
use ledgekit::physics::oscillator::Oscillator;
use ledgekit::resources::gameconfig::PhysicsConfig;
use ledgekit::resources::levelbounds::LevelBounds;
use ledgekit::resources::signalbridge::SignalBridge;
use ledgekit::systems::movement::integrate_bodies;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(smoothing: u32) -> World {
    build_world(PhysicsConfig {
        smoothing,
        ..PhysicsConfig::new()
    })
}

/// A body with no gravity, moving at `velocity`, stepping every tick.
fn drifting(velocity: Vec2) -> RigidBody {
    let mut rb = RigidBody::new().with_cadence(Cadence::Immediate);
    rb.velocity = velocity;
    rb
}

/// A body with gravity 1, stepping every tick.
fn falling() -> RigidBody {
    RigidBody::with_physics(1.0, 100.0).with_cadence(Cadence::Immediate)
}

fn spawn_actor(world: &mut World, id: u32, x: f32, y: f32, w: f32, h: f32, rb: RigidBody) -> Entity {
    world
        .spawn((
            Actor::new(id),
            MapPosition::new(x, y),
            BoxCollider::new(w, h),
            rb,
        ))
        .id()
}

fn spawn_obstacle(world: &mut World, obstacle: Obstacle, x: f32, y: f32, w: f32, h: f32) -> Entity {
    world
        .spawn((obstacle, MapPosition::new(x, y), BoxCollider::new(w, h)))
        .id()
}

/// Message cursors live in the schedule's system state, so a test must keep
/// using the same schedule across ticks.
fn run_ticks(world: &mut World, schedule: &mut Schedule, n: usize) {
    for _ in 0..n {
        tick(world, schedule);
    }
}

fn pos(world: &World, entity: Entity) -> Vec2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

fn drain(world: &World) -> Vec<GameSignal> {
    world.resource::<SignalBridge>().drain()
}

// ==================== INTEGRATION TESTS ====================

#[test]
fn test_throttled_body_steps_every_nth_tick() {
    let mut world = make_world(3);
    let slow = spawn_actor(
        &mut world,
        0,
        0.0,
        0.0,
        10.0,
        10.0,
        drifting(Vec2::new(1.0, 0.0)).with_cadence(Cadence::Throttled),
    );
    let fast = spawn_actor(&mut world, 1, 0.0, 50.0, 10.0, 10.0, drifting(Vec2::new(1.0, 0.0)));

    let mut schedule = build_tick_schedule();
    tick(&mut world, &mut schedule);
    tick(&mut world, &mut schedule);
    assert!(approx_eq(pos(&world, slow).x, 0.0));
    assert!(approx_eq(pos(&world, fast).x, 2.0));

    tick(&mut world, &mut schedule);
    assert!(approx_eq(pos(&world, slow).x, 1.0));

    for _ in 0..3 {
        tick(&mut world, &mut schedule);
    }
    assert!(approx_eq(pos(&world, slow).x, 2.0));
    assert!(approx_eq(pos(&world, fast).x, 6.0));
}

#[test]
fn test_integrate_bodies_clamps_speed() {
    let mut world = make_world(1);
    let mut rb = RigidBody::with_physics(5.0, 8.0).with_cadence(Cadence::Immediate);
    rb.velocity = Vec2::new(-20.0, 6.0);
    let e = spawn_actor(&mut world, 0, 0.0, 0.0, 10.0, 10.0, rb);

    let mut schedule = Schedule::default();
    schedule.add_systems(integrate_bodies);
    schedule.run(&mut world);

    let rb = world.get::<RigidBody>(e).unwrap();
    assert!(approx_eq(rb.velocity.x, -8.0));
    assert!(approx_eq(rb.velocity.y, 8.0));
    assert!(approx_eq(pos(&world, e).y, 8.0));
}

// ==================== COLLISION TESTS ====================

#[test]
fn test_falling_actor_lands_on_platform() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    let actor = spawn_actor(&mut world, 0, 40.0, 40.0, 10.0, 10.0, drifting(Vec2::new(0.0, 5.0)));
    spawn_obstacle(&mut world, Obstacle::platform(), 30.0, 50.0, 30.0, 10.0);

    run_ticks(&mut world, &mut schedule, 1);

    let p = pos(&world, actor);
    assert!(approx_eq(p.y + 10.0, 50.0));
    let rb = world.get::<RigidBody>(actor).unwrap();
    assert!(approx_eq(rb.velocity.y, 0.0));
    assert!(world.get::<Actor>(actor).unwrap().can_jump);
}

#[test]
fn test_directional_platform_catches_from_above_only() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    let above = spawn_actor(&mut world, 0, 40.0, 35.0, 10.0, 10.0, drifting(Vec2::new(0.0, 10.0)));
    let below = spawn_actor(&mut world, 1, 140.0, 62.0, 10.0, 10.0, drifting(Vec2::new(0.0, -5.0)));
    spawn_obstacle(&mut world, Obstacle::directional(30.0), 0.0, 50.0, 100.0, 10.0);
    spawn_obstacle(&mut world, Obstacle::directional(30.0), 100.0, 50.0, 100.0, 10.0);

    run_ticks(&mut world, &mut schedule, 1);

    assert!(approx_eq(pos(&world, above).y, 40.0));
    assert!(world.get::<Actor>(above).unwrap().can_jump);

    assert!(approx_eq(pos(&world, below).y, 57.0));
    let rb = world.get::<RigidBody>(below).unwrap();
    assert!(approx_eq(rb.velocity.y, -5.0));
    assert!(!world.get::<Actor>(below).unwrap().can_jump);
}

#[test]
fn test_moving_platform_carries_rider() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    let rider = spawn_actor(&mut world, 0, 10.0, 90.0, 10.0, 10.0, falling());
    let platform = world
        .spawn((
            Obstacle::moving(Oscillator::new(
                Vec2::new(0.0, 100.0),
                Vec2::new(100.0, 100.0),
                Vec2::new(2.0, 0.0),
            )),
            MapPosition::new(0.0, 100.0),
            BoxCollider::new(40.0, 10.0),
        ))
        .id();

    run_ticks(&mut world, &mut schedule, 5);

    assert!(approx_eq(pos(&world, platform).x, 10.0));
    let p = pos(&world, rider);
    assert!(approx_eq(p.x, 20.0));
    assert!(approx_eq(p.y, 90.0));
}

#[test]
fn test_throttled_rider_stays_on_throttled_platform() {
    let mut world = build_world(PhysicsConfig::new());
    let mut schedule = build_tick_schedule();
    let rider = spawn_actor(
        &mut world,
        0,
        10.0,
        90.0,
        10.0,
        10.0,
        RigidBody::with_physics(1.0, 100.0),
    );
    let platform = world
        .spawn((
            Obstacle::moving(Oscillator::new(
                Vec2::new(0.0, 100.0),
                Vec2::new(200.0, 100.0),
                Vec2::new(2.0, 0.0),
            )),
            MapPosition::new(0.0, 100.0),
            BoxCollider::new(40.0, 10.0),
            RigidBody::new(),
        ))
        .id();

    // Default smoothing 2: ten steps for both.
    run_ticks(&mut world, &mut schedule, 20);

    assert!(approx_eq(pos(&world, platform).x, 20.0));
    let p = pos(&world, rider);
    assert!(approx_eq(p.x, 30.0));
    assert!(approx_eq(p.y, 90.0));
    assert!(world.get::<Actor>(rider).unwrap().can_jump);
}

#[test]
fn test_closed_door_blocks_open_door_does_not() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    let blocked = spawn_actor(&mut world, 0, 0.0, 0.0, 10.0, 10.0, drifting(Vec2::new(5.0, 0.0)));
    let free = spawn_actor(&mut world, 1, 0.0, 100.0, 10.0, 10.0, drifting(Vec2::new(5.0, 0.0)));
    world.spawn((
        Door::new(1, [9]),
        MapPosition::new(12.0, -20.0),
        BoxCollider::new(10.0, 50.0),
    ));
    world.spawn((
        Door::new(2, [0u32; 0]),
        MapPosition::new(12.0, 80.0),
        BoxCollider::new(10.0, 50.0),
    ));

    run_ticks(&mut world, &mut schedule, 1);

    assert!(approx_eq(pos(&world, blocked).x, 2.0));
    assert!(approx_eq(pos(&world, free).x, 5.0));
}

#[test]
fn test_jump_from_ground() {
    let mut world = make_world(1);
    let player = spawn_actor(&mut world, 0, 50.0, 90.0, 10.0, 10.0, falling());
    world
        .entity_mut(player)
        .insert((MoveIntent::default(), Jumper::new(4.0, 14.0)));
    spawn_obstacle(&mut world, Obstacle::wall(), 0.0, 100.0, 200.0, 20.0);

    let mut schedule = build_tick_schedule();
    tick(&mut world, &mut schedule);
    assert!(world.get::<Actor>(player).unwrap().can_jump);
    assert!(approx_eq(pos(&world, player).y, 90.0));

    set_intent(
        &mut world,
        0,
        MoveIntent {
            right: true,
            jump: true,
            ..Default::default()
        },
    );
    tick(&mut world, &mut schedule);

    let p = pos(&world, player);
    assert!(approx_eq(p.x, 54.0));
    assert!(approx_eq(p.y, 77.0));
    assert!(approx_eq(world.get::<RigidBody>(player).unwrap().velocity.y, -13.0));
    assert!(!world.get::<Actor>(player).unwrap().can_jump);
}

// ==================== SWITCH / DOOR TESTS ====================

#[test]
fn test_switch_opens_door_and_signals_in_order() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    spawn_actor(&mut world, 0, 0.0, 0.0, 10.0, 10.0, drifting(Vec2::new(2.0, 0.0)));
    world.spawn((Switch::new(1), MapPosition::new(10.0, 0.0), BoxCollider::new(10.0, 10.0)));
    let door = world
        .spawn((
            Door::new(7, [1]),
            MapPosition::new(300.0, 0.0),
            BoxCollider::new(10.0, 50.0),
        ))
        .id();
    let other = world
        .spawn((
            Door::new(8, [1, 2]),
            MapPosition::new(400.0, 0.0),
            BoxCollider::new(10.0, 50.0),
        ))
        .id();

    run_ticks(&mut world, &mut schedule, 1);

    assert_eq!(
        drain(&world),
        vec![
            GameSignal::SwitchDeactivated { switch_id: 1 },
            GameSignal::DoorOpened { door_id: 7 },
        ]
    );
    assert!(!world.get::<Door>(door).unwrap().is_closed);
    assert!(world.get::<Door>(other).unwrap().is_closed);

    run_ticks(&mut world, &mut schedule, 2);
    assert!(drain(&world).is_empty());
}

#[test]
fn test_resting_actor_does_not_trip_switch() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    spawn_actor(&mut world, 0, 5.0, 0.0, 10.0, 10.0, drifting(Vec2::ZERO));
    let switch = world
        .spawn((Switch::new(1), MapPosition::new(10.0, 0.0), BoxCollider::new(10.0, 10.0)))
        .id();

    run_ticks(&mut world, &mut schedule, 3);

    assert!(world.get::<Switch>(switch).unwrap().is_on);
    assert!(drain(&world).is_empty());
}

// ==================== HAZARD / BOUNDS / EXIT TESTS ====================

#[test]
fn test_hazards_report_death_or_damage() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    spawn_actor(&mut world, 4, 0.0, 0.0, 10.0, 10.0, drifting(Vec2::ZERO));
    world.spawn((Hazard::spikes(), MapPosition::new(5.0, 5.0), BoxCollider::new(10.0, 10.0)));
    world.spawn((Hazard::enemy(), MapPosition::new(-5.0, 0.0), BoxCollider::new(8.0, 8.0)));

    run_ticks(&mut world, &mut schedule, 1);

    let signals = drain(&world);
    assert_eq!(signals.len(), 2);
    assert!(signals.contains(&GameSignal::Death { actor_id: 4 }));
    assert!(signals.contains(&GameSignal::Damage { actor_id: 4 }));
}

#[test]
fn test_out_of_bounds_reports_death_once_per_tick() {
    let mut world = make_world(1);
    world.insert_resource(LevelBounds::new(0.0, 0.0, 200.0, 100.0));
    spawn_actor(&mut world, 3, 50.0, 250.0, 10.0, 10.0, drifting(Vec2::ZERO));
    spawn_actor(&mut world, 5, 50.0, 150.0, 10.0, 10.0, drifting(Vec2::ZERO));

    let mut schedule = build_tick_schedule();
    tick(&mut world, &mut schedule);
    assert_eq!(drain(&world), vec![GameSignal::Death { actor_id: 3 }]);
    tick(&mut world, &mut schedule);
    assert_eq!(drain(&world), vec![GameSignal::Death { actor_id: 3 }]);
}

#[test]
fn test_level_exit_fires_once() {
    let mut world = make_world(1);
    let mut schedule = build_tick_schedule();
    spawn_actor(&mut world, 0, 0.0, 0.0, 10.0, 10.0, drifting(Vec2::ZERO));
    let exit = world
        .spawn((LevelExit::new(2), MapPosition::new(5.0, 0.0), BoxCollider::new(10.0, 10.0)))
        .id();

    run_ticks(&mut world, &mut schedule, 3);

    assert_eq!(drain(&world), vec![GameSignal::LevelTransition { next_level: 2 }]);
    assert!(world.get::<LevelExit>(exit).unwrap().triggered);
}
