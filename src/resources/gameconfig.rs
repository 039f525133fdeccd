//! Physics configuration resource.
//!
//! Tuning for the integrator, the collision resolver and the player
//! controller, loaded from an INI file. Every value has a safe default so
//! a missing or partial file still produces a playable setup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! smoothing = 2
//! gravity = 1.0
//! max_speed = 12.0
//!
//! [collision]
//! classifier = bearing
//! directional_tolerance = 30.0
//! transparent_tolerance = 10.0
//!
//! [bounds]
//! margin = 100.0
//!
//! [player]
//! run_speed = 4.0
//! jump_speed = 14.0
//!
//! [loop]
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::physics::resolver::ResolveSettings;
use crate::physics::side::SideStrategy;

/// Default safe values for startup
const DEFAULT_SMOOTHING: u32 = 2;
const DEFAULT_GRAVITY: f32 = 1.0;
const DEFAULT_MAX_SPEED: f32 = 12.0;
const DEFAULT_DIRECTIONAL_TOLERANCE: f32 = 30.0;
const DEFAULT_TRANSPARENT_TOLERANCE: f32 = 10.0;
const DEFAULT_BOUNDS_MARGIN: f32 = 100.0;
const DEFAULT_RUN_SPEED: f32 = 4.0;
const DEFAULT_JUMP_SPEED: f32 = 14.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Physics configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    /// Render ticks per physics step for throttled bodies.
    pub smoothing: u32,
    /// Gravity added to a body's vertical acceleration every step.
    pub gravity: f32,
    /// Per-axis velocity limit.
    pub max_speed: f32,
    /// Side classification strategy.
    pub classifier: SideStrategy,
    /// Default landing tolerance for directional platforms.
    pub directional_tolerance: f32,
    /// Landing tolerance for transparent platforms struck on their `Top` side.
    pub transparent_tolerance: f32,
    /// Vertical padding added around the level background for the bounds check.
    pub bounds_margin: f32,
    /// Horizontal velocity of input-driven actors.
    pub run_speed: f32,
    /// Upward velocity of a jump.
    pub jump_speed: f32,
    /// Ticks per second of the driving loop.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            gravity: DEFAULT_GRAVITY,
            max_speed: DEFAULT_MAX_SPEED,
            classifier: SideStrategy::Bearing,
            directional_tolerance: DEFAULT_DIRECTIONAL_TOLERANCE,
            transparent_tolerance: DEFAULT_TRANSPARENT_TOLERANCE,
            bounds_margin: DEFAULT_BOUNDS_MARGIN,
            run_speed: DEFAULT_RUN_SPEED,
            jump_speed: DEFAULT_JUMP_SPEED,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [physics] section
        if let Some(smoothing) = config.getuint("physics", "smoothing").ok().flatten() {
            self.smoothing = smoothing as u32;
        }
        if let Some(gravity) = config.getfloat("physics", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }
        if let Some(max_speed) = config.getfloat("physics", "max_speed").ok().flatten() {
            self.max_speed = max_speed as f32;
        }

        // [collision] section
        if let Some(name) = config.get("collision", "classifier") {
            match name.parse::<SideStrategy>() {
                Ok(strategy) => self.classifier = strategy,
                Err(e) => warn!("{}, keeping {:?}", e, self.classifier),
            }
        }
        if let Some(t) = config
            .getfloat("collision", "directional_tolerance")
            .ok()
            .flatten()
        {
            self.directional_tolerance = t as f32;
        }
        if let Some(t) = config
            .getfloat("collision", "transparent_tolerance")
            .ok()
            .flatten()
        {
            self.transparent_tolerance = t as f32;
        }

        // [bounds] section
        if let Some(margin) = config.getfloat("bounds", "margin").ok().flatten() {
            self.bounds_margin = margin as f32;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "run_speed").ok().flatten() {
            self.run_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("player", "jump_speed").ok().flatten() {
            self.jump_speed = speed as f32;
        }

        // [loop] section
        if let Some(fps) = config.getuint("loop", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        info!(
            "Loaded config: smoothing={}, gravity={}, max_speed={}, classifier={:?}, tolerances={}/{}, margin={}, fps={}",
            self.smoothing,
            self.gravity,
            self.max_speed,
            self.classifier,
            self.directional_tolerance,
            self.transparent_tolerance,
            self.bounds_margin,
            self.target_fps
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("physics", "smoothing", Some(self.smoothing.to_string()));
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("physics", "max_speed", Some(self.max_speed.to_string()));

        let classifier = match self.classifier {
            SideStrategy::Bearing => "bearing",
            SideStrategy::MinimumTranslation => "mtv",
        };
        config.set("collision", "classifier", Some(classifier.to_string()));
        config.set(
            "collision",
            "directional_tolerance",
            Some(self.directional_tolerance.to_string()),
        );
        config.set(
            "collision",
            "transparent_tolerance",
            Some(self.transparent_tolerance.to_string()),
        );

        config.set("bounds", "margin", Some(self.bounds_margin.to_string()));

        config.set("player", "run_speed", Some(self.run_speed.to_string()));
        config.set("player", "jump_speed", Some(self.jump_speed.to_string()));

        config.set("loop", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Resolver settings derived from this configuration.
    pub fn resolve_settings(&self) -> ResolveSettings {
        ResolveSettings {
            classifier: self.classifier,
            transparent_tolerance: self.transparent_tolerance,
        }
    }
}
