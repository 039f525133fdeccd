//! Event types exchanged by the tick systems and the outside world.
//!
//! Submodules:
//! - [`signal`] – outbound [`GameSignal`](signal::GameSignal)s and the in-tick
//!   [`SwitchToggled`](signal::SwitchToggled) notification
pub mod signal;
