//! Tyre obstacles
//!
//! A single tyre or a stack of 2-3. Size is fixed at creation; the obstacle
//! rests on the ground and slides left at the world speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::entity::{Entity, FrameContext, Viewport};
use super::player::Player;
use super::rng::RandomSource;
use crate::consts::TYRE_COLOR;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub tyre_radius: f32,
    /// 1 for a single tyre, 2+ for a stack
    pub tyre_count: u32,
    /// RGBA fill of the tyres
    pub color: [f32; 4],
}

impl Obstacle {
    /// Build a tyre obstacle of the given shape resting on the ground at `x`
    pub fn new(
        id: u32,
        x: f32,
        ground_y: f32,
        tyre_radius: f32,
        tyre_count: u32,
        tuning: &Tuning,
    ) -> Self {
        let diameter = tyre_radius * 2.0;
        let height = if tyre_count > 1 {
            diameter * tyre_count as f32 * tuning.stack_height_factor
        } else {
            diameter
        };
        Self {
            id,
            pos: Vec2::new(x, ground_y - height),
            size: Vec2::new(diameter, height),
            tyre_radius,
            tyre_count,
            color: TYRE_COLOR,
        }
    }

    /// Roll a random obstacle at the right edge of the viewport
    pub fn spawn<R: RandomSource + ?Sized>(
        id: u32,
        viewport: &Viewport,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let is_stack = rng.chance(tuning.stack_chance);
        let radius = rng.uniform(tuning.tyre_radius_min, tuning.tyre_radius_max);
        let count = if is_stack {
            rng.frames(tuning.stack_min_tyres, tuning.stack_max_tyres + 1)
                .clamp(tuning.stack_min_tyres, tuning.stack_max_tyres)
        } else {
            1
        };
        Self::new(id, viewport.width, viewport.ground_y, radius, count, tuning)
    }

    pub fn is_stack(&self) -> bool {
        self.tyre_count > 1
    }

    /// Slide left by the world speed
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    /// Right edge has passed the left edge of the viewport
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }

    pub fn hits(&self, player: &Player) -> bool {
        player.aabb().overlaps(&self.aabb())
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

impl Entity for Obstacle {
    fn update(&mut self, ctx: &FrameContext) {
        self.advance(ctx.speed);
    }

    fn bounds(&self) -> Option<Aabb> {
        Some(self.aabb())
    }
}
