//! Draw command types consumed by an external renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::SpriteId;

/// 8-bit RGBA colour
pub type Rgba = [u8; 4];

/// Where a text position anchors the rendered label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Position is the label's top-left corner
    TopLeft,
    /// Position is the label's top-right corner
    TopRight,
    /// Position is the label's top edge, horizontally centred
    TopCenter,
}

/// Font sizes used by the HUD and overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Hud,
    Lost,
    Title,
}

impl FontSize {
    /// Point size
    pub fn points(&self) -> u32 {
        match self {
            FontSize::Hud => 50,
            FontSize::Lost => 60,
            FontSize::Title => 70,
        }
    }
}

/// One draw operation, in playfield coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Named sprite with its top-left corner at `pos`
    Sprite { sprite: SpriteId, pos: Vec2 },
    /// Axis-aligned filled rectangle
    FillRect { pos: Vec2, size: Vec2, color: Rgba },
    /// Translucent filled disc with an opaque outline
    Ring {
        center: Vec2,
        radius: f32,
        fill: Rgba,
        outline_width: f32,
        outline: Rgba,
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: TextAnchor,
        size: FontSize,
        color: Rgba,
    },
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const TEXT: Rgba = [255, 255, 255, 255];
    pub const HEALTH_BAR_BACK: Rgba = [255, 0, 0, 255];
    pub const HEALTH_BAR_FRONT: Rgba = [0, 255, 0, 255];
    pub const SHIELD_FILL: Rgba = [0, 0, 200, 88];
    pub const SHIELD_OUTLINE: Rgba = [0, 0, 200, 255];
}
