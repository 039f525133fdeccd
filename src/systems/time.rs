//! Tick counter update.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, before the tick schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Count one simulation tick.
pub fn update_world_time(world: &mut World) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.frame_count += 1;
}
