//! Game state and run bookkeeping
//!
//! The loop owns the top-level collections; each ship owns its own lasers.

use std::sync::Arc;

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::pickup::Pickup;
use super::player::Player;
use super::rng::seeded;
use super::sprites::SpriteAtlas;
use super::wave::WaveDirector;
use crate::consts::{LOST_DISPLAY_SECONDS, STARTING_LIVES, TICK_RATE_HZ};

/// Frames the loss overlay stays up at the reference tick rate
pub const LOST_DISPLAY_TICKS: u32 = LOST_DISPLAY_SECONDS * TICK_RATE_HZ;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Health or lives ran out; the loss overlay is counting down
    Lost,
    /// Run ended, the host should return to the title screen
    Ended,
}

/// Counters kept for the end-of-run summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub enemies_rammed: u32,
    pub pickups_collected: u32,
    pub pickups_expired: u32,
    pub player_hits_taken: u32,
}

/// Serializable snapshot of how a run went
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub level: u32,
    pub lives: i32,
    pub health: i32,
    pub phase: GamePhase,
    pub stats: RunStats,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Sprite footprints shared by every entity
    pub atlas: Arc<SpriteAtlas>,
    pub waves: WaveDirector,
    pub lives: i32,
    pub player: Player,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Pickups on the field, in drop order
    pub pickups: Vec<Pickup>,
    pub phase: GamePhase,
    /// Frames spent in the loss overlay
    pub lost_ticks: u32,
    /// Frames the loss overlay stays up before the run ends
    pub lost_display_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub stats: RunStats,
}

impl GameState {
    /// Create a new run with the built-in sprite footprints
    pub fn new(seed: u64) -> Self {
        Self::with_atlas(seed, Arc::new(SpriteAtlas::builtin()))
    }

    pub fn with_atlas(seed: u64, atlas: Arc<SpriteAtlas>) -> Self {
        Self {
            seed,
            rng: seeded(seed),
            atlas,
            waves: WaveDirector::default(),
            lives: STARTING_LIVES,
            player: Player::default(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            phase: GamePhase::Playing,
            lost_ticks: 0,
            lost_display_ticks: LOST_DISPLAY_TICKS,
            time_ticks: 0,
            stats: RunStats::default(),
        }
    }

    /// Time the loss overlay in frames of `tick_rate_hz` (clamped to at least 1)
    pub fn with_tick_rate(mut self, tick_rate_hz: u32) -> Self {
        self.lost_display_ticks = LOST_DISPLAY_SECONDS * tick_rate_hz.max(1);
        self
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.waves.level
    }

    #[inline]
    pub fn is_lost(&self) -> bool {
        matches!(self.phase, GamePhase::Lost | GamePhase::Ended)
    }

    /// Loss condition: out of lives or out of health
    pub fn out_of_resources(&self) -> bool {
        self.lives <= 0 || self.player.ship.health <= 0
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            frames: self.time_ticks,
            level: self.level(),
            lives: self.lives,
            health: self.player.ship.health,
            phase: self.phase,
            stats: self.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_defaults() {
        let state = GameState::new(1);
        assert_eq!(state.level(), 0);
        assert_eq!(state.waves.wave_length, 5);
        assert_eq!(state.lives, 5);
        assert_eq!(state.player.ship.health, 100);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.enemies.is_empty());
        assert!(!state.out_of_resources());
        assert_eq!(state.lost_display_ticks, 420);
    }

    #[test]
    fn test_loss_display_follows_tick_rate() {
        assert_eq!(GameState::new(1).with_tick_rate(60).lost_display_ticks, 180);
        assert_eq!(GameState::new(1).with_tick_rate(0).lost_display_ticks, 3);
    }

    #[test]
    fn test_summary_serializes() {
        let state = GameState::new(77);
        let json = serde_json::to_string(&state.summary()).unwrap();
        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state.summary());
        assert!(json.contains("\"seed\":77"));
    }
}
