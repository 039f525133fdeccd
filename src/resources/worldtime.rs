use bevy_ecs::prelude::Resource;

/// Tick counter for the simulation. Physics is tick-based, not time-based.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldTime {
    pub frame_count: u64,
}
