//! Data-driven game balance
//!
//! Every gameplay constant the simulation consumes, with the shipped balance
//! as defaults. A JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Tick period in milliseconds
    pub tick_ms: u64,
    /// Per-tick enemy spawn probability
    pub spawn_chance: f32,
    /// Enemy descent per tick
    pub enemy_step: f32,
    /// Projectile climb per tick
    pub projectile_step: f32,
    /// Projectile-enemy hit radius
    pub hit_radius: f32,
    /// Enemy-player hit radius
    pub player_hit_radius: f32,
    /// Enemies past this y may damage the player
    pub danger_line: f32,
    /// Discrete move step for left/right intents
    pub move_step: f32,
    /// Playable lane bounds for the player and enemy spawns
    pub min_x: f32,
    pub max_x: f32,
    /// Score awarded per destroyed enemy
    pub kill_reward: u32,
    /// Lives at session start
    pub starting_lives: u8,
    /// Background star count
    pub star_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            spawn_chance: 0.10,
            enemy_step: 2.0,
            projectile_step: 5.0,
            hit_radius: 10.0,
            player_hit_radius: 15.0,
            danger_line: 85.0,
            move_step: 10.0,
            min_x: 10.0,
            max_x: 90.0,
            kill_reward: 10,
            starting_lives: 3,
            star_count: 50,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = serde_json::from_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("Using default tuning ({err})");
                Self::default()
            }
        }
    }
}
