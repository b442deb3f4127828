//! Scene building: turns a game state into an ordered list of draw commands
//!
//! Later commands draw over earlier ones.

use glam::Vec2;

use super::commands::{DrawCommand, FontSize, TextAnchor, colors};
use crate::consts::*;
use crate::sim::{GameState, Player, Ship, SpriteAtlas, SpriteId};

/// Vertical position of the centred overlay labels
const OVERLAY_TEXT_Y: f32 = 350.0;
const HUD_MARGIN: f32 = 10.0;
const SHIELD_OUTLINE_WIDTH: f32 = 2.0;

pub const LOST_TEXT: &str = "You Died Loser!";
pub const TITLE_TEXT: &str = "Press any key to begin...";

fn text(text: String, pos: Vec2, anchor: TextAnchor, size: FontSize) -> DrawCommand {
    DrawCommand::Text {
        text,
        pos,
        anchor,
        size,
        color: colors::TEXT,
    }
}

fn background() -> DrawCommand {
    DrawCommand::Sprite {
        sprite: SpriteId::Background,
        pos: Vec2::ZERO,
    }
}

/// Ship sprite followed by its lasers
pub fn ship(out: &mut Vec<DrawCommand>, ship: &Ship) {
    out.push(DrawCommand::Sprite {
        sprite: ship.sprite,
        pos: ship.pos,
    });
    out.extend(ship.lasers.iter().map(|laser| DrawCommand::Sprite {
        sprite: laser.sprite,
        pos: laser.pos,
    }));
}

/// Two-layer health bar just below the ship sprite
pub fn health_bar(out: &mut Vec<DrawCommand>, ship: &Ship, atlas: &SpriteAtlas) {
    let size = atlas.size(ship.sprite);
    let pos = Vec2::new(ship.pos.x, ship.pos.y + size.y + HEALTH_BAR_GAP);
    let fraction = if ship.max_health > 0 {
        (ship.health as f32 / ship.max_health as f32).clamp(0.0, 1.0)
    } else {
        0.0
    };

    out.push(DrawCommand::FillRect {
        pos,
        size: Vec2::new(size.x, HEALTH_BAR_HEIGHT),
        color: colors::HEALTH_BAR_BACK,
    });
    out.push(DrawCommand::FillRect {
        pos,
        size: Vec2::new(size.x * fraction, HEALTH_BAR_HEIGHT),
        color: colors::HEALTH_BAR_FRONT,
    });
}

/// Player ship, lasers, shield overlay (when up) and health bar
pub fn player(out: &mut Vec<DrawCommand>, player: &Player, atlas: &SpriteAtlas) {
    ship(out, &player.ship);
    if player.is_shielded() {
        let center = player.ship.pos + atlas.size(player.ship.sprite) / 2.0;
        out.push(DrawCommand::Ring {
            center,
            radius: SHIELD_RADIUS,
            fill: colors::SHIELD_FILL,
            outline_width: SHIELD_OUTLINE_WIDTH,
            outline: colors::SHIELD_OUTLINE,
        });
    }
    health_bar(out, &player.ship, atlas);
}

/// Full frame for a run in progress
pub fn game_frame(state: &GameState) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(
        8 + state.pickups.len()
            + state
                .enemies
                .iter()
                .map(|e| 1 + e.ship.lasers.len())
                .sum::<usize>()
            + state.player.ship.lasers.len(),
    );

    out.push(background());
    out.push(text(
        format!("Lives: {}", state.lives),
        Vec2::new(HUD_MARGIN, HUD_MARGIN),
        TextAnchor::TopLeft,
        FontSize::Hud,
    ));
    out.push(text(
        format!("Level: {}", state.level()),
        Vec2::new(PLAYFIELD_WIDTH - HUD_MARGIN, HUD_MARGIN),
        TextAnchor::TopRight,
        FontSize::Hud,
    ));

    out.extend(state.pickups.iter().map(|pickup| DrawCommand::Sprite {
        sprite: pickup.kind.sprite(),
        pos: pickup.pos,
    }));
    for enemy in &state.enemies {
        ship(&mut out, &enemy.ship);
    }
    player(&mut out, &state.player, &state.atlas);

    if state.is_lost() {
        out.push(text(
            LOST_TEXT.to_string(),
            Vec2::new(PLAYFIELD_WIDTH / 2.0, OVERLAY_TEXT_Y),
            TextAnchor::TopCenter,
            FontSize::Lost,
        ));
    }

    out
}

/// Title screen
pub fn title_frame() -> Vec<DrawCommand> {
    vec![
        background(),
        text(
            TITLE_TEXT.to_string(),
            Vec2::new(PLAYFIELD_WIDTH / 2.0, OVERLAY_TEXT_Y),
            TextAnchor::TopCenter,
            FontSize::Title,
        ),
    ]
}
