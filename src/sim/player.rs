//! The player's ship: shield, healing and multi-target laser resolution

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, collides};
use super::enemy::Enemy;
use super::pickup::Pickup;
use super::rng::RandomSource;
use super::ship::{Combatant, Ship};
use super::sprites::{SpriteAtlas, SpriteId};
use super::tick::TickInput;
use crate::consts::*;

/// Timed damage shield
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shield {
    pub active: bool,
    /// Frames the shield has been up
    pub counter: u32,
    pub max_duration: u32,
}

impl Default for Shield {
    fn default() -> Self {
        Self {
            active: false,
            counter: 0,
            max_duration: MAX_SHIELD_DURATION,
        }
    }
}

impl Shield {
    /// Raise the shield with a fresh timer, even if already up
    pub fn activate(&mut self) {
        self.active = true;
        self.counter = 0;
    }

    /// Count one frame of shield time; drops the shield when it runs out
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.counter += 1;
        if self.counter >= self.max_duration {
            self.active = false;
            self.counter = 0;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub ship: Ship,
    pub shield: Shield,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y))
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            ship: Ship::new(
                pos,
                PLAYER_MAX_HEALTH,
                SpriteId::PlayerShip,
                SpriteId::PlayerLaser,
            ),
            shield: Shield::default(),
        }
    }

    #[inline]
    pub fn is_shielded(&self) -> bool {
        self.shield.active
    }

    /// Heal by `amount`, but only when hurt. Returns whether it applied.
    pub fn heal(&mut self, amount: i32) -> bool {
        if self.ship.health >= self.ship.max_health {
            return false;
        }
        self.apply_damage(amount);
        true
    }

    /// Apply held movement actions. A step that would leave the allowed
    /// area is skipped; the bottom keeps a band free for the health bar.
    pub fn steer(&mut self, input: &TickInput, atlas: &SpriteAtlas) {
        let size = atlas.size(self.ship.sprite);
        let pos = &mut self.ship.pos;
        let v = PLAYER_SPEED;

        if input.left && pos.x - v > 0.0 {
            pos.x -= v;
        }
        if input.right && pos.x + v + size.x < PLAYFIELD_WIDTH {
            pos.x += v;
        }
        if input.up && pos.y - v > 0.0 {
            pos.y -= v;
        }
        if input.down && pos.y + v + size.y + HEALTH_BAR_BAND < PLAYFIELD_HEIGHT {
            pos.y += v;
        }
    }

    /// Move the player's lasers against the whole enemy collection.
    ///
    /// While shielded the cooldown decays faster and the shield timer runs.
    /// A laser destroys at most one enemy (the first it overlaps in
    /// collection order) and is spent. Destroyed enemies may drop pickups.
    /// Returns how many enemies were destroyed.
    pub fn advance_lasers<R: RandomSource + ?Sized>(
        &mut self,
        velocity: f32,
        enemies: &mut Vec<Enemy>,
        pickups: &mut Vec<Pickup>,
        atlas: &SpriteAtlas,
        rng: &mut R,
    ) -> u32 {
        let speedup = if self.is_shielded() {
            SHIELD_COOLDOWN_SPEEDUP
        } else {
            0
        };
        self.ship.cooldown_tick(speedup);
        self.shield.tick();

        let mut destroyed = vec![false; enemies.len()];
        let mut kills = 0;
        self.ship.lasers.retain_mut(|laser| {
            laser.advance(velocity);
            if laser.off_screen(PLAYFIELD_HEIGHT) {
                return false;
            }
            for (i, enemy) in enemies.iter().enumerate() {
                if destroyed[i] || !collides(atlas, &*laser, enemy) {
                    continue;
                }
                destroyed[i] = true;
                kills += 1;
                enemy.destroyed(pickups, rng);
                return false;
            }
            true
        });

        if kills > 0 {
            let mut marks = destroyed.into_iter();
            enemies.retain(|_| !marks.next().unwrap_or(false));
        }
        kills
    }
}

impl Collidable for Player {
    fn position(&self) -> Vec2 {
        self.ship.pos
    }

    fn sprite(&self) -> SpriteId {
        self.ship.sprite
    }
}

impl Combatant for Player {
    /// Damage is absorbed while shielded; healing always applies. Health
    /// stays within [0, max_health].
    fn apply_damage(&mut self, delta: i32) {
        let delta = if self.is_shielded() { delta.max(0) } else { delta };
        self.ship.health = (self.ship.health + delta).clamp(0, self.ship.max_health);
    }
}
