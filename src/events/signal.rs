//! Outbound game signals and in-tick switch notifications.
//!
//! [`GameSignal`] is everything the core reports to the mode controller.
//! Systems write it as a bevy message; [`crate::systems::signals::forward_signals`]
//! pushes each one into the [`SignalBridge`](crate::resources::signalbridge::SignalBridge)
//! channel that the controller drains once per frame. Nothing in the core
//! calls back into controller logic.
//!
//! [`SwitchToggled`] stays inside the tick: the switch pass writes it and the
//! door pass reads it in the same frame.

use bevy_ecs::message::Message;

/// State transitions reported to the controller.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    /// A switch was turned off by an actor.
    SwitchDeactivated { switch_id: u32 },
    /// A door's waiting set ran empty and it opened.
    DoorOpened { door_id: u32 },
    /// Non-lethal hazard contact.
    Damage { actor_id: u32 },
    /// Lethal hazard contact or out of bounds.
    Death { actor_id: u32 },
    /// An actor reached the level exit.
    LevelTransition { next_level: u32 },
}

/// A switch turned off this tick; consumed by the door pass.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchToggled {
    pub switch_id: u32,
}
