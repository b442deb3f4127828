//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, behind the `RandomSource` seam
//! - Stable iteration order (spawn/drop order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod laser;
pub mod mask;
pub mod pickup;
pub mod player;
pub mod rng;
pub mod ship;
pub mod sprites;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{Collidable, collides};
pub use enemy::{Enemy, EnemyColor};
pub use laser::Laser;
pub use mask::{CollisionMask, MaskError};
pub use pickup::{Pickup, PickupKind};
pub use player::{Player, Shield};
pub use rng::{RandomSource, ScriptedRandom};
pub use ship::{Combatant, Ship};
pub use sprites::{SpriteAtlas, SpriteId};
pub use state::{GamePhase, GameState, RunStats, RunSummary};
pub use tick::{TickInput, TickOutcome, tick, tick_with};
pub use wave::WaveDirector;
