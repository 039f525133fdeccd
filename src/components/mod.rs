//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: kinematic state for actors, level geometry and the
//! switch/door puzzle pieces.
//!
//! Submodules overview:
//! - [`actor`] – marks an entity for collision resolution; id and jump flag
//! - [`boxcollider`] – axis-aligned boxes and the rectangular collider
//! - [`door`] – door waiting on a set of switches
//! - [`inputcontrolled`] – movement intent and run/jump tuning
//! - [`mapposition`] – world-space position (top-left) for an entity
//! - [`obstacle`] – obstacle kinds, hazards and level exits
//! - [`rigidbody`] – kinematic body: velocity, acceleration, gravity, cadence
//! - [`switch`] – one-way floor switch

pub mod actor;
pub mod boxcollider;
pub mod door;
pub mod inputcontrolled;
pub mod mapposition;
pub mod obstacle;
pub mod rigidbody;
pub mod switch;
