//! Pure physics and collision algorithms.
//!
//! Nothing in here touches the ECS world; the systems in
//! [`crate::systems`] pull component data out, call into these modules and
//! write the results back.
//!
//! - [`integrator`] – throttled velocity/position integration
//! - [`oscillator`] – two-waypoint moving-platform state machine
//! - [`resolver`] – per-kind side policy for actor/obstacle overlaps
//! - [`side`] – collision side classification (bearing and least-penetration)

pub mod integrator;
pub mod oscillator;
pub mod resolver;
pub mod side;
