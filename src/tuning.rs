//! Data-driven game balance
//!
//! Every gameplay number that is policy rather than geometry lives here,
//! with defaults matching the shipped balance. An optional JSON file can
//! override any subset of fields; a missing or malformed file falls back
//! to the defaults with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Energy cap
    pub energy_max: f32,
    /// Energy cost of one shot
    pub energy_cost_per_shot: f32,
    /// Energy regained per elapsed second
    pub energy_regen_per_sec: f32,
    /// Minimum interval between shots
    pub fire_cooldown_ms: f64,
    /// Ship speed in pixels/sec per axis
    pub move_speed: f32,
    /// Missile speed in pixels/sec
    pub missile_speed: f32,
    /// Minimum interval between obstacle spawns
    pub spawn_interval_ms: f64,
    /// Spawn chance per eligible tick is 1 in this
    pub spawn_odds: u32,
    /// Obstacle half-extent range at spawn
    pub obstacle_size_min: f32,
    pub obstacle_size_max: f32,
    /// Obstacle drift speed range at spawn, pixels/sec
    pub obstacle_speed_min: f32,
    pub obstacle_speed_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            energy_max: 100.0,
            energy_cost_per_shot: 15.0,
            energy_regen_per_sec: 15.0,
            fire_cooldown_ms: 300.0,
            move_speed: 100.0,
            missile_speed: 300.0,
            spawn_interval_ms: 500.0,
            spawn_odds: 20,
            obstacle_size_min: 10.0,
            obstacle_size_max: 30.0,
            obstacle_speed_min: 50.0,
            obstacle_speed_max: 130.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("bad tuning file {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
