use bevy_ecs::prelude::Component;

/// Floor switch, armed when the level loads.
///
/// Switching off is one-way: nothing turns a switch back on until the level
/// is reloaded and the entity respawned.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Switch {
    pub id: u32,
    pub is_on: bool,
}

impl Switch {
    pub fn new(id: u32) -> Self {
        Self { id, is_on: true }
    }

    /// Contact from an actor. Only a moving actor trips an armed switch.
    ///
    /// Returns `true` when the switch was turned off by this contact.
    pub fn on_contact(&mut self, actor_moving: bool) -> bool {
        if !actor_moving || !self.is_on {
            return false;
        }
        self.is_on = false;
        true
    }
}
