//! ledgekit library.
//!
//! A 2D platformer collision and physics core on top of `bevy_ecs`:
//! throttled integration, bearing-angle side classification with per-kind
//! obstacle policies, oscillating platforms, switch/door dependencies and
//! hazard/boundary checks. State changes leave the core as
//! [`GameSignal`](events::signal::GameSignal)s through an owned channel.

pub mod components;
pub mod events;
pub mod game;
pub mod physics;
pub mod resources;
pub mod systems;
