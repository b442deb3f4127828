//! Pixel-mask collision oracle
//!
//! Two entities collide when their sprite masks, placed at their positions,
//! share an opaque pixel. Bounding boxes alone never count as a hit.

use glam::Vec2;

use super::sprites::{SpriteAtlas, SpriteId};

/// Anything with a position and a sprite footprint
pub trait Collidable {
    /// Top-left corner of the sprite in playfield coordinates
    fn position(&self) -> Vec2;
    fn sprite(&self) -> SpriteId;
}

/// Whether `a` and `b` overlap on at least one opaque pixel.
///
/// The offset between the two is truncated toward zero, which keeps the
/// test symmetric: `collides(atlas, a, b) == collides(atlas, b, a)`.
pub fn collides<A, B>(atlas: &SpriteAtlas, a: &A, b: &B) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    let offset = (b.position() - a.position()).as_ivec2();
    atlas
        .mask(a.sprite())
        .overlaps(atlas.mask(b.sprite()), offset)
}
