//! Data-driven game balance
//!
//! Balance values ship in `tuning.json` at the repo root and are compiled
//! into the binary. Defaults match the shipped file, so a malformed edit
//! degrades to stock balance instead of breaking the game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal cruise speed (pixels per frame)
    pub flight_speed: f32,
    /// Vertical drift speed (pixels per frame)
    pub climb_speed: f32,
    /// Bird footprint for headless runs (pixels)
    pub bird_size: Vec2,
    /// Can footprint for headless runs (pixels)
    pub can_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            flight_speed: consts::FLIGHT_SPEED,
            climb_speed: consts::CLIMB_SPEED,
            bird_size: Vec2::from_array(consts::BIRD_SIZE),
            can_size: Vec2::from_array(consts::CAN_SIZE),
        }
    }
}

impl Tuning {
    /// Parse tuning values from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the bundled tuning file
    pub fn load() -> Self {
        match Self::from_json(include_str!("../tuning.json")) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("tuning.json is malformed, using defaults: {err}");
                Self::default()
            }
        }
    }
}
