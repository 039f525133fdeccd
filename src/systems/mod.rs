//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation. They are
//! chained in a fixed order by [`crate::game::build_tick_schedule`].
//!
//! Submodules overview
//! - [`collision`] – resolve actors against every obstacle group and closed doors
//! - [`hazards`] – hazard contacts, out-of-bounds check, level exit
//! - [`input`] – translate movement intent into velocity and jumps
//! - [`movement`] – integrate rigid bodies on their cadence
//! - [`platforms`] – step moving platforms between their waypoints
//! - [`signals`] – forward game signals to the outbound channel
//! - [`switches`] – switch contacts and door dependency updates
//! - [`time`] – advance the tick counter

pub mod collision;
pub mod hazards;
pub mod input;
pub mod movement;
pub mod platforms;
pub mod signals;
pub mod switches;
pub mod time;
