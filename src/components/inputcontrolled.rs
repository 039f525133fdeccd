//! Input-controlled movement components.
//!
//! - [`MoveIntent`] – the directions and jump requested this tick
//! - [`Jumper`] – how strongly the actor runs and jumps
//!
//! The controller (keyboard handler, autopilot, replay) writes `MoveIntent`;
//! [`crate::systems::input::apply_move_intent`] turns it into velocity.

use bevy_ecs::prelude::Component;

/// Movement intent for the current tick.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MoveIntent {
    /// Horizontal direction: -1, 0 or 1. Opposite keys cancel out.
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Run and jump tuning for an input-driven actor.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Jumper {
    /// Horizontal velocity while a direction is held.
    pub run_speed: f32,
    /// Upward velocity given by a jump.
    pub jump_speed: f32,
}

impl Jumper {
    pub fn new(run_speed: f32, jump_speed: f32) -> Self {
        Self {
            run_speed,
            jump_speed,
        }
    }
}
