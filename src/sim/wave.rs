//! Wave director: spawns enemy batches and escalates difficulty

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyColor};
use super::rng::RandomSource;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveDirector {
    /// Current level (0 before the first wave)
    pub level: u32,
    /// Size of the most recent wave
    pub wave_length: u32,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self {
            level: 0,
            wave_length: STARTING_WAVE_LENGTH,
        }
    }
}

impl WaveDirector {
    /// Spawn the next wave once the field is clear. Returns true if a wave
    /// was spawned.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        enemies: &mut Vec<Enemy>,
        rng: &mut R,
    ) -> bool {
        if !enemies.is_empty() {
            return false;
        }
        enemies.extend(self.next_wave(rng));
        true
    }

    /// Escalate one level and build its wave, staggered above the screen
    pub fn next_wave<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Vec<Enemy> {
        self.level += 1;
        self.wave_length += WAVE_LENGTH_STEP;
        log::info!(
            "Level {}: spawning {} enemies",
            self.level,
            self.wave_length
        );

        (0..self.wave_length)
            .map(|_| {
                let x = rng.range(SPAWN_X_MIN, SPAWN_X_MAX);
                let y = rng.range(SPAWN_Y_MIN, SPAWN_Y_MAX);
                let color = EnemyColor::ALL[rng.range(0, EnemyColor::ALL.len() as i32) as usize];
                Enemy::new(Vec2::new(x as f32, y as f32), color, self.level)
            })
            .collect()
    }

    /// Denominator of the per-frame enemy fire chance; shrinks with level
    /// down to [`FIRE_ODDS_FLOOR`]
    pub fn fire_odds(&self) -> i32 {
        let level = self.level.min(i32::MAX as u32) as i32;
        ((FIRE_ODDS_LEVEL_CAP - level) * FIRE_ODDS_STEP).max(FIRE_ODDS_FLOOR)
    }

    /// Per-enemy, per-frame fire roll
    pub fn wants_fire<R: RandomSource + ?Sized>(&self, rng: &mut R) -> bool {
        rng.range(0, self.fire_odds()) == 1
    }
}
