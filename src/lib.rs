//! Invaders From Space - a top-down wave shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, waves, game state)
//! - `renderer`: Draw commands produced from a game state
//! - `platform`: Frame pacing for native hosts
//! - `shell`: Title screen gate and per-frame host entry point
//! - `settings`: Runtime settings loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod shell;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use shell::{Frame, HostInput, Shell, ShellStatus};

/// Game configuration constants
pub mod consts {
    /// Reference tick rate (frames per second)
    pub const TICK_RATE_HZ: u32 = 140;

    /// Playfield dimensions. Origin top-left, +y points down toward the player.
    pub const PLAYFIELD_WIDTH: f32 = 750.0;
    pub const PLAYFIELD_HEIGHT: f32 = 750.0;

    /// Reserved band under the player for the health bar
    pub const HEALTH_BAR_BAND: f32 = 15.0;
    /// Gap between ship sprite and health bar, and the bar's height
    pub const HEALTH_BAR_GAP: f32 = 10.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 300.0;
    pub const PLAYER_START_Y: f32 = 635.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Frames a shield stays up once collected
    pub const MAX_SHIELD_DURATION: u32 = 1200;
    /// Extra cooldown decay per frame while shielded
    pub const SHIELD_COOLDOWN_SPEEDUP: u32 = 3;
    /// Laser velocity multiplier while shielded
    pub const SHIELD_LASER_MULTIPLIER: f32 = 2.5;
    /// Shield overlay radius
    pub const SHIELD_RADIUS: f32 = 100.0;

    /// Frames between shots (counter must cycle back to 0)
    pub const COOLDOWN_LIMIT: u32 = 30;

    /// Laser velocities (units/frame, +y is down)
    pub const PLAYER_LASER_VELOCITY: f32 = -15.0;
    pub const ENEMY_LASER_VELOCITY: f32 = 6.0;

    /// Damage dealt by a laser hit or an enemy ramming the player
    pub const LASER_DAMAGE: i32 = 10;
    pub const RAM_DAMAGE: i32 = 10;

    /// Enemy defaults
    pub const ENEMY_HEALTH: i32 = 100;
    pub const ENEMY_MAX_SPEED: f32 = 2.5;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.25;

    /// Pickups
    pub const PICKUP_MAX_AGE: u32 = 300;
    pub const HEAL_AMOUNT: i32 = 50;
    /// Chance a destroyed enemy drops anything
    pub const DROP_CHANCE: f64 = 0.3;
    /// Chance a drop is a shield rather than a med pack
    pub const SHIELD_DROP_CHANCE: f64 = 0.2;

    /// Wave and run state
    pub const STARTING_LIVES: i32 = 5;
    pub const STARTING_WAVE_LENGTH: u32 = 5;
    pub const WAVE_LENGTH_STEP: u32 = 5;
    /// Horizontal spawn range [min, max)
    pub const SPAWN_X_MIN: i32 = 50;
    pub const SPAWN_X_MAX: i32 = 650;
    /// Vertical spawn range [min, max), above the screen
    pub const SPAWN_Y_MIN: i32 = -1500;
    pub const SPAWN_Y_MAX: i32 = -100;

    /// Enemy fire odds: one in
    /// max(FIRE_ODDS_FLOOR, (FIRE_ODDS_LEVEL_CAP - level) * FIRE_ODDS_STEP)
    pub const FIRE_ODDS_FLOOR: i32 = 50;
    pub const FIRE_ODDS_LEVEL_CAP: i32 = 6;
    pub const FIRE_ODDS_STEP: i32 = 60;

    /// Seconds the loss overlay stays up before the run ends
    pub const LOST_DISPLAY_SECONDS: u32 = 3;
}
