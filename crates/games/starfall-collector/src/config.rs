use serde::{Deserialize, Serialize};

use crate::layout;
use crate::movement;

/// Tunable parameters for the star collector, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Horizontal run speed (units/s).
    pub run_speed: f32,
    /// Jump impulse (negative is upward).
    pub jump_velocity: f32,
    /// Points awarded per collectible.
    pub score_per_collectible: u32,
    /// Y position hazards spawn at.
    pub hazard_spawn_y: f32,
    /// Initial downward velocity of a spawned hazard.
    pub hazard_fall_vy: f32,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            run_speed: movement::RUN_SPEED,
            jump_velocity: movement::JUMP_VELOCITY,
            score_per_collectible: 10,
            hazard_spawn_y: layout::HAZARD_SPAWN_Y,
            hazard_fall_vy: layout::HAZARD_FALL_VY,
        }
    }
}

impl CollectorConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("STARFALL_COLLECTOR_CONFIG")
            .unwrap_or_else(|_| "config/collector.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<CollectorConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    CollectorConfig::default()
                },
            },
            Err(_) => CollectorConfig::default(),
        }
    }
}
