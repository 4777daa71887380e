//! The player's vehicle
//!
//! Single vertical axis physics: a fixed jump impulse, constant gravity and
//! a hard floor at the ground baseline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::entity::{Entity, FrameContext, Viewport};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (x never changes)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    /// Resting y: ground line minus height
    pub base_y: f32,
    /// Set from jump until landing
    pub airborne: bool,
    jump_force: f32,
}

impl Player {
    /// A grounded vehicle on the given viewport
    pub fn new(viewport: &Viewport, tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        let base_y = viewport.ground_y - size.y;
        Self {
            pos: Vec2::new(tuning.player_x, base_y),
            size,
            vel_y: 0.0,
            base_y,
            airborne: false,
            jump_force: tuning.jump_force,
        }
    }

    /// Start a jump. Ignored while airborne: no double jump, no air control.
    /// Returns true if the jump happened.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.vel_y = self.jump_force;
        self.airborne = true;
        true
    }

    /// Apply gravity, then velocity, then land on the baseline
    pub fn step(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.pos.y >= self.base_y {
            self.pos.y = self.base_y;
            self.vel_y = 0.0;
            self.airborne = false;
        }
    }

    /// Follow a moved ground line
    ///
    /// A resting vehicle snaps onto the new baseline; one left below it is
    /// pulled up and stopped. A vehicle mid-jump above it keeps flying.
    pub fn on_resize(&mut self, viewport: &Viewport) {
        self.base_y = viewport.ground_y - self.size.y;
        if self.pos.y < self.base_y && self.vel_y == 0.0 {
            self.pos.y = self.base_y;
        } else if self.pos.y > self.base_y {
            self.pos.y = self.base_y;
            self.vel_y = 0.0;
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

impl Entity for Player {
    fn update(&mut self, ctx: &FrameContext) {
        self.step(ctx.tuning.gravity);
    }

    fn bounds(&self) -> Option<Aabb> {
        Some(self.aabb())
    }
}
