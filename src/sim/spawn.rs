//! Ballon spawning
//!
//! One Bernoulli trial per Playing tick; a success adds a ballon unless the
//! population cap is already reached.

use rand::Rng;

use super::state::{Ballon, EntityIds};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy)]
pub struct Spawner {
    /// Per-tick spawn probability
    pub chance: f64,
    /// Population cap
    pub cap: usize,
    pub common_weight: u32,
    pub rare_weight: u32,
}

impl Spawner {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            chance: tuning.spawn_chance,
            cap: tuning.max_ballons,
            common_weight: tuning.common_weight,
            rare_weight: tuning.rare_weight,
        }
    }

    /// Roll once and spawn on success. The roll is always drawn so RNG
    /// consumption does not depend on the current population.
    pub fn try_spawn<R: Rng>(
        &self,
        ballons: &mut Vec<Ballon>,
        ids: &mut EntityIds,
        rng: &mut R,
    ) -> Option<Ballon> {
        let chance = if self.chance.is_finite() {
            self.chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let roll = rng.random_bool(chance);
        if roll { self.spawn(ballons, ids, rng) } else { None }
    }

    /// Add one ballon if below the cap
    pub fn spawn<R: Rng>(
        &self,
        ballons: &mut Vec<Ballon>,
        ids: &mut EntityIds,
        rng: &mut R,
    ) -> Option<Ballon> {
        if ballons.len() >= self.cap {
            return None;
        }
        let ballon = Ballon::random(ids.next_id(), rng, self.common_weight, self.rare_weight);
        ballons.push(ballon.clone());
        Some(ballon)
    }
}
