//! Outbound signal forwarding.
//!
//! [`forward_signals`] copies every [`GameSignal`] written during the tick
//! into the [`SignalBridge`] channel. The `update_*` systems advance the
//! message queues once per tick and run last in the schedule.
use bevy_ecs::prelude::*;

use crate::events::signal::{GameSignal, SwitchToggled};
use crate::resources::signalbridge::SignalBridge;

pub fn forward_signals(bridge: Res<SignalBridge>, mut reader: MessageReader<GameSignal>) {
    for signal in reader.read() {
        // The bridge owns the receiver, so the channel cannot be disconnected.
        let _ = bridge.tx_signal.send(*signal);
    }
}

pub fn update_signal_messages(mut msgs: ResMut<Messages<GameSignal>>) {
    msgs.update();
}

pub fn update_switch_messages(mut msgs: ResMut<Messages<SwitchToggled>>) {
    msgs.update();
}
