use bevy_ecs::prelude::Component;

/// Marks an entity as subject to collision resolution (player, boss).
///
/// `id` is what hazard and boundary signals report back to the controller.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: u32,
    /// Granted when the actor lands on something, cleared by every physics step.
    pub can_jump: bool,
}

impl Actor {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            can_jump: false,
        }
    }
}
