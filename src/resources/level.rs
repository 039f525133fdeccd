//! Level data loaded from JSON.
//!
//! A [`LevelData`] describes one hand-authored level: its background extent,
//! the actors to spawn and every obstacle group. Rectangles are written as
//! flat `x`, `y`, `w`, `h` fields; points as `[x, y]` arrays.
//!
//! ```json
//! {
//!   "id": 1,
//!   "background": { "x": 0, "y": 0, "w": 800, "h": 600 },
//!   "actors": [ { "id": 0, "x": 40, "y": 500, "w": 16, "h": 24, "controlled": true } ],
//!   "walls": [ { "x": 0, "y": 580, "w": 800, "h": 20 } ],
//!   "moving": [ { "w": 60, "h": 10, "a": [100, 400], "b": [300, 400], "speed": [2, 0] } ],
//!   "doors": [ { "id": 1, "x": 700, "y": 520, "w": 20, "h": 60, "waiting_for": [1, 2] } ],
//!   "exit": { "x": 760, "y": 540, "w": 20, "h": 40, "next_level": 2 }
//! }
//! ```
//!
//! Spawning into the world is done by [`crate::game::spawn_level`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RectData {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectData {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ActorData {
    pub id: u32,
    #[serde(flatten)]
    pub rect: RectData,
    /// Driven by [`MoveIntent`](crate::components::inputcontrolled::MoveIntent).
    #[serde(default)]
    pub controlled: bool,
    /// Integrates every tick instead of on the throttled cadence.
    #[serde(default)]
    pub immediate: bool,
    /// Collider offset from the actor position (`x`, `y`), e.g. `[-8, -24]`
    /// for a bottom-centre pivot.
    #[serde(default)]
    pub hitbox_offset: Vec2,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DirectionalData {
    #[serde(flatten)]
    pub rect: RectData,
    /// Falls back to the configured directional tolerance.
    #[serde(default)]
    pub tolerance: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MovingData {
    pub w: f32,
    pub h: f32,
    pub a: Vec2,
    pub b: Vec2,
    pub speed: Vec2,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SwitchData {
    pub id: u32,
    #[serde(flatten)]
    pub rect: RectData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DoorData {
    pub id: u32,
    #[serde(flatten)]
    pub rect: RectData,
    #[serde(default)]
    pub waiting_for: Vec<u32>,
}

fn default_lethal() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HazardData {
    #[serde(flatten)]
    pub rect: RectData,
    #[serde(default = "default_lethal")]
    pub lethal: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ExitData {
    #[serde(flatten)]
    pub rect: RectData,
    pub next_level: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelData {
    pub id: u32,
    pub background: RectData,
    #[serde(default)]
    pub actors: Vec<ActorData>,
    #[serde(default)]
    pub walls: Vec<RectData>,
    #[serde(default)]
    pub platforms: Vec<RectData>,
    #[serde(default)]
    pub directional: Vec<DirectionalData>,
    #[serde(default)]
    pub moving: Vec<MovingData>,
    #[serde(default)]
    pub transparent: Vec<RectData>,
    #[serde(default)]
    pub switches: Vec<SwitchData>,
    #[serde(default)]
    pub doors: Vec<DoorData>,
    #[serde(default)]
    pub hazards: Vec<HazardData>,
    #[serde(default)]
    pub exit: Option<ExitData>,
}

impl LevelData {
    /// Load a level from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
            .map_err(|e| format!("Failed to parse level {}: {}", path.display(), e))
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
