//! Parallax background layers
//!
//! Each layer scrolls at a fraction of the world speed and tiles twice across
//! the viewport. Purely cosmetic: nothing here affects gameplay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, FrameContext, Viewport};
use crate::consts::{HILL_SAMPLE_STEP, HILL_SHAPE_HEIGHT};

/// How a layer is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LayerShape {
    /// Solid block from the top of the viewport down to the ground
    Flat,
    /// Rolling hill silhouette rising `height` above the ground
    Hills { height: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    pub color: [f32; 4],
    /// Fraction of the world speed this layer scrolls at
    pub speed_factor: f32,
    /// Scroll offset, kept in `(-width, 0]`
    pub offset_x: f32,
    pub shape: LayerShape,
}

impl BackgroundLayer {
    pub fn new(color: [f32; 4], speed_factor: f32, shape: LayerShape) -> Self {
        Self {
            color,
            speed_factor,
            offset_x: 0.0,
            shape,
        }
    }

    /// Scroll left and wrap once a full tile has passed
    pub fn scroll(&mut self, speed: f32, width: f32) {
        self.offset_x -= speed * self.speed_factor;
        if self.offset_x <= -width {
            self.offset_x += width;
        }
    }

    /// Left edges of the two tiles covering the viewport
    pub fn tile_origins(&self, width: f32) -> [f32; 2] {
        [self.offset_x, self.offset_x + width]
    }

    /// Outline of one hill tile starting at `start_x`, or `None` for flat layers
    ///
    /// Samples every 50 units across the tile; bump height is a sine of the
    /// sample position, the frame counter and the scroll offset. The polygon
    /// closes along the ground line.
    pub fn silhouette(&self, start_x: f32, viewport: &Viewport, frame: u64) -> Option<Vec<Vec2>> {
        let LayerShape::Hills { height } = self.shape else {
            return None;
        };
        let base_y = viewport.ground_y - height;

        let mut points = vec![Vec2::new(start_x, base_y)];
        let mut x = 0.0;
        while x <= viewport.width {
            let phase = x * 0.05 + frame as f32 * 0.01 + self.offset_x * 0.001;
            let bump = phase.sin() * (height * 0.3);
            points.push(Vec2::new(start_x + x, base_y - bump));
            x += HILL_SAMPLE_STEP;
        }
        points.push(Vec2::new(start_x + viewport.width, base_y));
        points.push(Vec2::new(start_x + viewport.width, viewport.ground_y));
        points.push(Vec2::new(start_x, viewport.ground_y));
        Some(points)
    }
}

impl Entity for BackgroundLayer {
    fn update(&mut self, ctx: &FrameContext) {
        self.scroll(ctx.speed, ctx.viewport.width);
    }
}

/// The three standard layers, far to near
pub fn default_layers() -> Vec<BackgroundLayer> {
    vec![
        BackgroundLayer::new(rgb(200, 230, 255), 0.1, LayerShape::Flat),
        BackgroundLayer::new(rgb(160, 210, 250), 0.3, LayerShape::Flat),
        BackgroundLayer::new(
            rgb(100, 150, 100),
            0.6,
            LayerShape::Hills {
                height: HILL_SHAPE_HEIGHT,
            },
        ),
    ]
}

fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}
