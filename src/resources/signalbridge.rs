//! Outbound signal queue between the tick systems and the mode controller.
//!
//! Use [`setup_signals`] once while building the world. It inserts the
//! [`SignalBridge`] and the message queues the tick systems write to. The
//! controller drains the bridge once per frame with [`SignalBridge::drain`].

use crate::events::signal::{GameSignal, SwitchToggled};
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Channel owned by the core; the controller only ever reads from it.
#[derive(Resource)]
pub struct SignalBridge {
    /// Sender fed by [`crate::systems::signals::forward_signals`].
    pub tx_signal: Sender<GameSignal>,
    /// Receiver drained by the controller.
    pub rx_signal: Receiver<GameSignal>,
}

impl SignalBridge {
    pub fn new() -> Self {
        let (tx_signal, rx_signal) = unbounded::<GameSignal>();
        Self {
            tx_signal,
            rx_signal,
        }
    }

    /// Take every signal queued so far, oldest first.
    pub fn drain(&self) -> Vec<GameSignal> {
        self.rx_signal.try_iter().collect()
    }
}

impl Default for SignalBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the signal bridge and the message queues used inside the tick.
pub fn setup_signals(world: &mut World) {
    world.insert_resource(SignalBridge::new());
    world.insert_resource(Messages::<GameSignal>::default());
    world.insert_resource(Messages::<SwitchToggled>::default());
}
