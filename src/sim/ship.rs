//! Shared ship behaviour: health, cooldown-gated firing and laser ownership
//!
//! Player and enemy ships embed a [`Ship`] and layer their own rules on top.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, collides};
use super::laser::Laser;
use super::sprites::{SpriteAtlas, SpriteId};
use crate::consts::{COOLDOWN_LIMIT, LASER_DAMAGE, PLAYFIELD_HEIGHT};

/// Something a laser can hurt
pub trait Combatant: Collidable {
    /// Change health by `delta` (negative is damage)
    fn apply_damage(&mut self, delta: i32);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// 0 means ready to fire; counts up to `cooldown_limit` after a shot
    pub cooldown_counter: u32,
    pub cooldown_limit: u32,
    pub sprite: SpriteId,
    pub laser_sprite: SpriteId,
    /// Lasers in flight, oldest first
    pub lasers: Vec<Laser>,
}

impl Ship {
    pub fn new(pos: Vec2, health: i32, sprite: SpriteId, laser_sprite: SpriteId) -> Self {
        Self {
            pos,
            health,
            max_health: health,
            cooldown_counter: 0,
            cooldown_limit: COOLDOWN_LIMIT,
            sprite,
            laser_sprite,
            lasers: Vec::new(),
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    #[inline]
    pub fn can_shoot(&self) -> bool {
        self.cooldown_counter == 0
    }

    /// Advance the firing cooldown.
    ///
    /// The counter only moves once a shot has started it; `speedup` adds
    /// extra steps per frame.
    pub fn cooldown_tick(&mut self, speedup: u32) {
        if self.cooldown_counter >= self.cooldown_limit {
            self.cooldown_counter = 0;
        } else if self.cooldown_counter > 0 {
            self.cooldown_counter += 1 + speedup;
        }
    }

    /// Fire a laser centred on the ship. Returns false while cooling down.
    pub fn shoot(&mut self, atlas: &SpriteAtlas) -> bool {
        if !self.can_shoot() {
            return false;
        }
        let offset = 0.5 * (atlas.width(self.sprite) - atlas.width(self.laser_sprite));
        self.lasers.push(Laser::new(
            Vec2::new(self.pos.x + offset, self.pos.y),
            self.laser_sprite,
        ));
        self.cooldown_counter = 1;
        true
    }

    /// Tick the cooldown, then move every laser by `velocity`. Lasers that
    /// leave the playfield are dropped; lasers that hit `target` deal
    /// [`LASER_DAMAGE`] and are dropped. Returns the number of hits.
    pub fn advance_lasers<T>(&mut self, velocity: f32, target: &mut T, atlas: &SpriteAtlas) -> u32
    where
        T: Combatant + ?Sized,
    {
        self.cooldown_tick(0);

        let mut hits = 0;
        self.lasers.retain_mut(|laser| {
            laser.advance(velocity);
            if laser.off_screen(PLAYFIELD_HEIGHT) {
                false
            } else if collides(atlas, &*laser, &*target) {
                target.apply_damage(-LASER_DAMAGE);
                hits += 1;
                false
            } else {
                true
            }
        });
        hits
    }
}

impl Collidable for Ship {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> SpriteId {
        self.sprite
    }
}
