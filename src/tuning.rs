//! Gameplay tuning
//!
//! Balance values that are worth adjusting without touching code. Kept apart
//! from `Settings`, which only holds player preferences.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Balance knobs for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Probability that a ballon spawns on any Playing tick
    pub spawn_chance: f64,
    /// Population cap for ballons on screen
    pub max_ballons: usize,
    /// Relative weight of common ballons
    pub common_weight: u32,
    /// Relative weight of rare ballons
    pub rare_weight: u32,
    /// Session length in seconds
    pub session_secs: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_chance: SPAWN_CHANCE,
            max_ballons: MAX_BALLONS,
            common_weight: COMMON_WEIGHT,
            rare_weight: RARE_WEIGHT,
            session_secs: SESSION_SECS,
        }
    }
}

impl Tuning {
    /// Default file name looked up by the launcher
    pub const FILE_NAME: &'static str = "tuning.json";

    /// Parse tuning from JSON text; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(Error::Invalid(format!(
                "spawn_chance must be within [0, 1], got {}",
                self.spawn_chance
            )));
        }
        if self.common_weight.saturating_add(self.rare_weight) == 0 {
            return Err(Error::Invalid(
                "ballon weights must not both be zero".to_string(),
            ));
        }
        if self.session_secs.is_nan() || self.session_secs <= 0.0 {
            return Err(Error::Invalid(format!(
                "session_secs must be positive, got {}",
                self.session_secs
            )));
        }
        Ok(())
    }
}
