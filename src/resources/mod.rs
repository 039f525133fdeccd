//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `gameconfig` – physics and collision tuning loaded from INI
//! - `level` – level descriptions loaded from JSON
//! - `levelbounds` – level background extent and the camera world shift
//! - `signalbridge` – outbound channel for game signals
//! - `worldtime` – tick counter
pub mod gameconfig;
pub mod level;
pub mod levelbounds;
pub mod signalbridge;
pub mod worldtime;
