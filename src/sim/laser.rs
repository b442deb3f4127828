//! Laser projectiles
//!
//! Lasers only travel vertically. The owning ship decides the velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::sprites::SpriteId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub pos: Vec2,
    pub sprite: SpriteId,
}

impl Laser {
    pub fn new(pos: Vec2, sprite: SpriteId) -> Self {
        Self { pos, sprite }
    }

    /// Move along the vertical axis
    #[inline]
    pub fn advance(&mut self, velocity: f32) {
        self.pos.y += velocity;
    }

    /// True once the laser's y leaves [0, height]
    #[inline]
    pub fn off_screen(&self, height: f32) -> bool {
        !(0.0..=height).contains(&self.pos.y)
    }
}

impl Collidable for Laser {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> SpriteId {
        self.sprite
    }
}
