//! Shared entity capability and per-frame context

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::{CANVAS_HEIGHT_FRACTION, CANVAS_WIDTH_FRACTION, MAX_CANVAS_WIDTH};
use crate::tuning::Tuning;

/// Drawable area and the ground line inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Y coordinate of the ground surface
    pub ground_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, ground_fraction: f32) -> Self {
        Self {
            width,
            height,
            ground_y: height * ground_fraction,
        }
    }

    /// Canvas derived from the host window: 90% wide (capped), 70% tall
    pub fn from_window(window_width: f32, window_height: f32, ground_fraction: f32) -> Self {
        let width = (window_width * CANVAS_WIDTH_FRACTION).min(MAX_CANVAS_WIDTH);
        let height = window_height * CANVAS_HEIGHT_FRACTION;
        Self::new(width, height, ground_fraction)
    }
}

/// Everything an entity may read while updating
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Current world scroll speed (units/frame)
    pub speed: f32,
    pub viewport: Viewport,
    /// Caller's frame counter: frames since startup when `Game` scrolls the
    /// background, playing frames (`GameState::time_ticks`) inside `tick`
    pub frame: u64,
    pub tuning: Tuning,
}

/// Something the simulation advances once per frame
pub trait Entity {
    fn update(&mut self, ctx: &FrameContext);

    /// Collision box, if the entity takes part in collisions
    fn bounds(&self) -> Option<Aabb> {
        None
    }
}
