//! Enemy ships: descent, loot drops and ramming

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::pickup::{Pickup, PickupKind};
use super::player::Player;
use super::rng::RandomSource;
use super::ship::{Combatant, Ship};
use super::sprites::{SpriteAtlas, SpriteId};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyColor {
    Red,
    Green,
    Blue,
}

impl EnemyColor {
    pub const ALL: [EnemyColor; 3] = [EnemyColor::Red, EnemyColor::Green, EnemyColor::Blue];

    /// Descent speed at level 1 (units/frame)
    pub fn base_speed(&self) -> f32 {
        match self {
            EnemyColor::Red => 0.5,
            EnemyColor::Green => 0.5,
            EnemyColor::Blue => 1.0,
        }
    }

    pub fn ship_sprite(&self) -> SpriteId {
        match self {
            EnemyColor::Red => SpriteId::RedShip,
            EnemyColor::Green => SpriteId::GreenShip,
            EnemyColor::Blue => SpriteId::BlueShip,
        }
    }

    pub fn laser_sprite(&self) -> SpriteId {
        match self {
            EnemyColor::Red => SpriteId::RedLaser,
            EnemyColor::Green => SpriteId::GreenLaser,
            EnemyColor::Blue => SpriteId::BlueLaser,
        }
    }

    /// Descent speed for an enemy spawned at `level`, capped at [`ENEMY_MAX_SPEED`]
    pub fn speed_at(&self, level: u32) -> f32 {
        let bonus = level.saturating_sub(1) as f32 * ENEMY_SPEED_PER_LEVEL;
        (self.base_speed() + bonus).min(ENEMY_MAX_SPEED)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub ship: Ship,
    pub color: EnemyColor,
    /// Level the enemy was spawned at
    pub level: u32,
    /// Fixed downward speed (units/frame)
    pub velocity: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, color: EnemyColor, level: u32) -> Self {
        Self {
            ship: Ship::new(
                pos,
                ENEMY_HEALTH,
                color.ship_sprite(),
                color.laser_sprite(),
            ),
            color,
            level,
            velocity: color.speed_at(level),
        }
    }

    /// Descend one frame. Enemies never move sideways.
    #[inline]
    pub fn advance(&mut self) {
        self.ship.pos.y += self.velocity;
    }

    /// Whether the enemy has slipped past the bottom edge
    pub fn escaped(&self, atlas: &SpriteAtlas) -> bool {
        self.ship.pos.y + atlas.height(self.ship.sprite) > PLAYFIELD_HEIGHT
    }

    /// Death roll: with [`DROP_CHANCE`] leave a pickup at the enemy's last
    /// position, a shield with [`SHIELD_DROP_CHANCE`] and a med pack
    /// otherwise. The caller removes the enemy from its collection.
    pub fn destroyed<R: RandomSource + ?Sized>(
        &self,
        pickups: &mut Vec<Pickup>,
        rng: &mut R,
    ) -> Option<PickupKind> {
        if !rng.chance(DROP_CHANCE) {
            return None;
        }
        let kind = if rng.chance(SHIELD_DROP_CHANCE) {
            PickupKind::Shield
        } else {
            PickupKind::Health
        };
        pickups.push(Pickup::new(self.ship.pos, kind));
        log::debug!("{:?} enemy dropped {:?} at {}", self.color, kind, self.ship.pos);
        Some(kind)
    }

    /// Collision with the player: deal ramming damage, then go through the
    /// regular death roll.
    pub fn ram<R: RandomSource + ?Sized>(
        &self,
        player: &mut Player,
        pickups: &mut Vec<Pickup>,
        rng: &mut R,
    ) -> Option<PickupKind> {
        player.apply_damage(-RAM_DAMAGE);
        self.destroyed(pickups, rng)
    }
}

impl Collidable for Enemy {
    fn position(&self) -> Vec2 {
        self.ship.pos
    }

    fn sprite(&self) -> SpriteId {
        self.ship.sprite
    }
}
