//! Data-driven game balance
//!
//! Every gameplay constant in one serde struct so balance tweaks are a JSON
//! edit, not a recompile. Defaults mirror `crate::consts`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay tuning values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Dino sprite size (square)
    pub dino_size: f32,
    /// Peak jump height above the ground rest position
    pub jump_height: f32,
    /// Total jump length in ticks; first half ascends, second descends
    pub jump_duration_ticks: u32,
    /// Dino horizontal position as a fraction of screen width
    pub dino_x_ratio: f32,

    /// Obstacle sprite size (square)
    pub obstacle_size: f32,
    /// Leftward movement per tick
    pub obstacle_speed: f32,
    /// Per-tick spawn probability in percent
    pub spawn_chance_percent: u32,
    /// Minimum spacing between consecutive spawns, in obstacle widths
    pub min_gap_widths: f32,

    /// Ground line position as a fraction of screen height
    pub ground_ratio: f32,
    /// Nominal delay between ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Hit-box scale applied before collision tests
    pub collision_shrink: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dino_size: consts::DINO_SIZE,
            jump_height: consts::DINO_JUMP_HEIGHT,
            jump_duration_ticks: consts::DINO_JUMP_DURATION_TICKS,
            dino_x_ratio: consts::DINO_X_RATIO,
            obstacle_size: consts::OBSTACLE_SIZE,
            obstacle_speed: consts::OBSTACLE_SPEED,
            spawn_chance_percent: consts::OBSTACLE_SPAWN_CHANCE,
            min_gap_widths: consts::MIN_GAP_OBSTACLE_WIDTHS,
            ground_ratio: consts::GROUND_HEIGHT_RATIO,
            tick_interval_ms: consts::TICK_INTERVAL_MS,
            collision_shrink: consts::COLLISION_SHRINK_FACTOR,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file; missing fields keep defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path)?;
        let tuning = serde_json::from_str(&json)?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Write the current tuning to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), TuningError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.dino_size, 150.0);
        assert_eq!(t.jump_duration_ticks, 60);
        assert_eq!(t.spawn_chance_percent, 2);
        assert_eq!(t.tick_interval_ms, 30);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"obstacle_speed": 14.0}"#).unwrap();
        assert_eq!(t.obstacle_speed, 14.0);
        assert_eq!(t.jump_height, 400.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut t = Tuning::default();
        t.spawn_chance_percent = 5;
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
