//! Named sprites and their collision footprints
//!
//! The simulation never loads images. It refers to sprites by name and keeps
//! one collision mask per sprite in a [`SpriteAtlas`]. The built-in atlas
//! describes the reference footprints procedurally so the core runs headless;
//! a presentation layer swaps in masks built from real alpha data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::mask::CollisionMask;
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Every sprite the core can ask a renderer to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    PlayerShip,
    RedShip,
    GreenShip,
    BlueShip,
    PlayerLaser,
    RedLaser,
    GreenLaser,
    BlueLaser,
    MedPack,
    ShieldPack,
}

impl SpriteId {
    pub const ALL: [SpriteId; 11] = [
        SpriteId::Background,
        SpriteId::PlayerShip,
        SpriteId::RedShip,
        SpriteId::GreenShip,
        SpriteId::BlueShip,
        SpriteId::PlayerLaser,
        SpriteId::RedLaser,
        SpriteId::GreenLaser,
        SpriteId::BlueLaser,
        SpriteId::MedPack,
        SpriteId::ShieldPack,
    ];

    /// Asset name a renderer resolves to an image
    pub fn asset_name(&self) -> &'static str {
        match self {
            SpriteId::Background => "background-black",
            SpriteId::PlayerShip => "pixel_ship_yellow",
            SpriteId::RedShip => "pixel_ship_red_small",
            SpriteId::GreenShip => "pixel_ship_green_small",
            SpriteId::BlueShip => "pixel_ship_blue_small",
            SpriteId::PlayerLaser => "pixel_laser_yellow",
            SpriteId::RedLaser => "pixel_laser_red",
            SpriteId::GreenLaser => "pixel_laser_green",
            SpriteId::BlueLaser => "pixel_laser_blue",
            SpriteId::MedPack => "pixel_med_pack",
            SpriteId::ShieldPack => "pixel_shield_pack",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

/// Reference footprint sizes
pub const PLAYER_SHIP_SIZE: (u32, u32) = (100, 90);
pub const ENEMY_SHIP_SIZE: (u32, u32) = (50, 40);
pub const LASER_SIZE: (u32, u32) = (100, 90);
pub const PICKUP_SIZE: (u32, u32) = (40, 40);

/// Collision masks for every [`SpriteId`]
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    masks: Vec<CollisionMask>,
}

impl Default for SpriteAtlas {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SpriteAtlas {
    /// Procedural footprints at the reference sizes
    pub fn builtin() -> Self {
        let masks = SpriteId::ALL
            .iter()
            .map(|&id| match id {
                // Never collides
                SpriteId::Background => {
                    CollisionMask::new(PLAYFIELD_WIDTH as u32, PLAYFIELD_HEIGHT as u32)
                }
                SpriteId::PlayerShip => hull(PLAYER_SHIP_SIZE, true),
                SpriteId::RedShip | SpriteId::GreenShip | SpriteId::BlueShip => {
                    hull(ENEMY_SHIP_SIZE, false)
                }
                SpriteId::PlayerLaser
                | SpriteId::RedLaser
                | SpriteId::GreenLaser
                | SpriteId::BlueLaser => beam(LASER_SIZE),
                SpriteId::MedPack | SpriteId::ShieldPack => disc(PICKUP_SIZE),
            })
            .collect();
        Self { masks }
    }

    /// Replace a sprite's footprint (e.g. with one built from its image)
    pub fn set_mask(&mut self, id: SpriteId, mask: CollisionMask) {
        self.masks[id.slot()] = mask;
    }

    #[inline]
    pub fn mask(&self, id: SpriteId) -> &CollisionMask {
        &self.masks[id.slot()]
    }

    #[inline]
    pub fn width(&self, id: SpriteId) -> f32 {
        self.mask(id).width() as f32
    }

    #[inline]
    pub fn height(&self, id: SpriteId) -> f32 {
        self.mask(id).height() as f32
    }

    pub fn size(&self, id: SpriteId) -> Vec2 {
        Vec2::new(self.width(id), self.height(id))
    }
}

/// Tapered hull with transparent margins; `nose_up` points the tip toward -y
fn hull((w, h): (u32, u32), nose_up: bool) -> CollisionMask {
    let margin = (w / 10).max(1);
    let cx = w as f32 / 2.0;
    let max_half = cx - margin as f32;
    CollisionMask::from_fn(w, h, |x, y| {
        if y < margin || y >= h - margin {
            return false;
        }
        let depth = (y - margin) as f32 / (h - 2 * margin) as f32;
        let t = if nose_up { depth } else { 1.0 - depth };
        let half = 2.0 + (max_half - 2.0) * t;
        (x as f32 + 0.5 - cx).abs() <= half
    })
}

/// Narrow vertical bolt in the middle of a mostly transparent frame
fn beam((w, h): (u32, u32)) -> CollisionMask {
    let (x0, x1) = (w / 2 - 4, w / 2 + 4);
    let (y0, y1) = (h / 4, h * 3 / 4);
    CollisionMask::from_fn(w, h, |x, y| (x0..x1).contains(&x) && (y0..y1).contains(&y))
}

/// Round badge
fn disc((w, h): (u32, u32)) -> CollisionMask {
    let c = Vec2::new(w as f32, h as f32) / 2.0;
    let r = (w.min(h) as f32 / 2.0) - 2.0;
    CollisionMask::from_fn(w, h, |x, y| {
        (Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - c).length() <= r
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let atlas = SpriteAtlas::builtin();
        assert_eq!(atlas.size(SpriteId::PlayerShip), Vec2::new(100.0, 90.0));
        assert_eq!(atlas.size(SpriteId::BlueShip), Vec2::new(50.0, 40.0));
        assert_eq!(atlas.size(SpriteId::RedLaser), Vec2::new(100.0, 90.0));
        assert_eq!(atlas.size(SpriteId::ShieldPack), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_builtin_masks_have_transparent_margins() {
        let atlas = SpriteAtlas::builtin();
        for id in SpriteId::ALL {
            let mask = atlas.mask(id);
            assert!(!mask.get(0, 0), "{id:?} corner should be transparent");
            if id != SpriteId::Background {
                assert!(mask.count() > 0, "{id:?} should have opaque pixels");
            }
        }
        assert_eq!(atlas.mask(SpriteId::Background).count(), 0);
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(SpriteId::PlayerShip.asset_name(), "pixel_ship_yellow");
        assert_eq!(SpriteId::GreenShip.asset_name(), "pixel_ship_green_small");
        assert_eq!(SpriteId::BlueLaser.asset_name(), "pixel_laser_blue");
        assert_eq!(SpriteId::ShieldPack.asset_name(), "pixel_shield_pack");
        let mut names: Vec<_> = SpriteId::ALL.iter().map(|id| id.asset_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SpriteId::ALL.len());
    }

    #[test]
    fn test_set_mask_changes_size() {
        let mut atlas = SpriteAtlas::builtin();
        atlas.set_mask(SpriteId::MedPack, CollisionMask::filled(8, 6));
        assert_eq!(atlas.size(SpriteId::MedPack), Vec2::new(8.0, 6.0));
        assert_eq!(atlas.size(SpriteId::ShieldPack), Vec2::new(40.0, 40.0));
    }
}
