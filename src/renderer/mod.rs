//! Render command generation
//!
//! The core owns no pixels. It emits named sprites, rectangles, rings and
//! text in playfield coordinates for an external renderer to draw.

pub mod commands;
pub mod scene;

pub use commands::{DrawCommand, FontSize, Rgba, TextAnchor};
pub use scene::{game_frame, title_frame};
