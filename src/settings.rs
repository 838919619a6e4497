//! Gameplay tuning
//!
//! All physics and rules constants live here so a level can be rebalanced
//! from a JSON file without recompiling.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Constant vertical acceleration (negative is down)
    pub gravity: f32,
    /// Acceleration per unit of thruster intent
    pub thruster_power: f32,
    /// Linear horizontal drag (negative, multiplied by x velocity)
    pub drag_coefficient: f32,

    // === Fuel ===
    /// Fuel in the tank at session start
    pub starting_fuel: f32,
    /// Fuel burned per frame with a thruster held
    pub fuel_usage: f32,

    // === Play area ===
    /// Falling to or below this y with an empty tank loses
    pub lower_bound: f32,
    /// Lander spawn point
    pub player_start: Vec3,
    /// Lander size
    pub player_scale: Vec3,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: -0.5,
            thruster_power: 1.25,
            drag_coefficient: -0.5,

            starting_fuel: 100.0,
            fuel_usage: 0.01,

            lower_bound: -3.75,
            player_start: Vec3::new(3.5, 1.0, 0.0),
            player_scale: Vec3::new(0.4, 0.4, 1.0),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot make sense of
    ///
    /// Zero or negative fuel is allowed: the lander simply starts empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("gravity", self.gravity),
            ("thruster_power", self.thruster_power),
            ("drag_coefficient", self.drag_coefficient),
            ("starting_fuel", self.starting_fuel),
            ("fuel_usage", self.fuel_usage),
            ("lower_bound", self.lower_bound),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is not finite"),
                });
            }
        }

        if !self.player_start.is_finite() {
            return Err(ConfigError::Invalid {
                field: "player_start",
                reason: format!("{} is not finite", self.player_start),
            });
        }

        if !(self.player_scale.x > 0.0 && self.player_scale.y > 0.0)
            || !self.player_scale.is_finite()
        {
            return Err(ConfigError::Invalid {
                field: "player_scale",
                reason: format!("{} must be positive", self.player_scale),
            });
        }

        Ok(())
    }
}
