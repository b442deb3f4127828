//! Timed collectibles dropped by destroyed enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::player::Player;
use super::sprites::SpriteId;
use crate::consts::{HEAL_AMOUNT, PICKUP_MAX_AGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Med pack: heals the player when hurt
    Health,
    /// Raises (or refreshes) the player's shield
    Shield,
}

impl PickupKind {
    pub fn sprite(&self) -> SpriteId {
        match self {
            PickupKind::Health => SpriteId::MedPack,
            PickupKind::Shield => SpriteId::ShieldPack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PickupKind,
    /// Frames since the pickup appeared
    pub age: u32,
    pub max_age: u32,
}

impl Pickup {
    pub fn new(pos: Vec2, kind: PickupKind) -> Self {
        Self {
            pos,
            kind,
            age: 0,
            max_age: PICKUP_MAX_AGE,
        }
    }

    /// Age the pickup by one frame. Returns false once it has expired and
    /// should be removed; an expired pickup does not age further.
    pub fn tick(&mut self) -> bool {
        if self.age >= self.max_age {
            return false;
        }
        self.age += 1;
        true
    }

    /// Grant the pickup's effect to the player
    pub fn apply(&self, player: &mut Player) {
        match self.kind {
            PickupKind::Health => {
                player.heal(HEAL_AMOUNT);
            }
            PickupKind::Shield => player.shield.activate(),
        }
    }
}

impl Collidable for Pickup {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> SpriteId {
        self.kind.sprite()
    }
}
