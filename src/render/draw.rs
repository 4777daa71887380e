//! Draw commands for 2D primitives
//!
//! The game never paints pixels itself. Each frame it emits a list of
//! shape primitives in screen space that an external [`Renderer`] paints in
//! order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA, each channel in 0-1
pub type Color = [f32; 4];

/// Where a text anchor sits relative to the string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Anchor is the top-left corner
    TopLeft,
    /// Anchor is the centre of the string
    Center,
}

/// A single paint operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole viewport
    Clear { color: Color },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        /// 0 for square corners
        corner_radius: f32,
    },
    Ellipse {
        center: Vec2,
        /// Full width and height
        size: Vec2,
        color: Color,
    },
    /// Closed filled polygon
    Polygon { points: Vec<Vec2>, color: Color },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
        align: TextAlign,
        /// Outline colour and stroke width
        outline: Option<(Color, f32)>,
    },
}

impl DrawCommand {
    pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Self {
        DrawCommand::Rect {
            pos,
            size,
            color,
            corner_radius: 0.0,
        }
    }

    /// Circle-ish ellipse from a centre and full width/height
    pub fn ellipse(center: Vec2, width: f32, height: f32, color: Color) -> Self {
        DrawCommand::Ellipse {
            center,
            size: Vec2::new(width, height),
            color,
        }
    }

    pub fn text(text: impl Into<String>, pos: Vec2, size: f32, color: Color) -> Self {
        DrawCommand::Text {
            text: text.into(),
            pos,
            size,
            color,
            align: TextAlign::Center,
            outline: None,
        }
    }
}

/// Paints finished frames
pub trait Renderer {
    /// Paint one frame, commands in back-to-front order
    fn present(&mut self, commands: &[DrawCommand]);
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
    }

    pub const SKY: Color = rgba(135, 206, 250, 255);
    pub const GROUND: Color = rgba(188, 143, 143, 255);

    pub const CAR_BODY: Color = rgba(200, 0, 0, 255);
    pub const CAR_WINDOW: Color = rgba(100, 150, 200, 200);
    pub const CAR_WHEEL: Color = rgba(30, 30, 30, 255);
    pub const CAR_RIM: Color = rgba(80, 80, 80, 255);
    pub const CAR_SPOILER: Color = rgba(40, 40, 40, 255);
    pub const CAR_HEADLIGHT: Color = rgba(255, 255, 220, 255);

    pub const TYRE: Color = crate::consts::TYRE_COLOR;
    pub const TYRE_HUB: Color = rgba(70, 70, 70, 255);

    pub const WHITE: Color = rgba(255, 255, 255, 255);
    pub const BLACK: Color = rgba(0, 0, 0, 255);
    pub const TITLE: Color = rgba(255, 255, 0, 255);
    pub const GAME_OVER: Color = rgba(255, 0, 0, 255);
    pub const PANEL: Color = rgba(0, 0, 0, 180);
    pub const DIM: Color = rgba(0, 0, 0, 150);
}
