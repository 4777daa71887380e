//! Data-driven game balance
//!
//! `Tuning` is the runtime copy of the constants in [`crate::consts`]. It is
//! carried by the game state so a run is fully described by its seed and its
//! tuning.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Vehicle ===
    pub gravity: f32,
    pub jump_force: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === World ===
    pub ground_fraction: f32,
    pub start_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,

    // === Spawning ===
    pub min_spawn_interval: u32,
    pub max_spawn_interval: u32,
    pub min_spawn_floor: u32,
    pub max_spawn_floor: u32,
    pub min_spawn_speed_factor: f32,
    pub max_spawn_speed_factor: f32,

    // === Tyres ===
    pub tyre_radius_min: f32,
    pub tyre_radius_max: f32,
    pub stack_chance: f32,
    pub stack_min_tyres: u32,
    pub stack_max_tyres: u32,
    pub stack_height_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            ground_fraction: GROUND_LEVEL_PERCENT,
            start_speed: START_SPEED,
            max_speed: MAX_SPEED,
            speed_increment: SPEED_INCREMENT,

            min_spawn_interval: MIN_SPAWN_INTERVAL,
            max_spawn_interval: MAX_SPAWN_INTERVAL,
            min_spawn_floor: MIN_SPAWN_FLOOR,
            max_spawn_floor: MAX_SPAWN_FLOOR,
            min_spawn_speed_factor: MIN_SPAWN_SPEED_FACTOR,
            max_spawn_speed_factor: MAX_SPAWN_SPEED_FACTOR,

            tyre_radius_min: TYRE_RADIUS_MIN,
            tyre_radius_max: TYRE_RADIUS_MAX,
            stack_chance: STACK_CHANCE,
            stack_min_tyres: STACK_MIN_TYRES,
            stack_max_tyres: STACK_MAX_TYRES,
            stack_height_factor: STACK_HEIGHT_FACTOR,
        }
    }
}

impl Tuning {
    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.gravity <= 0.0 {
            return fail("gravity must be positive");
        }
        if self.jump_force >= 0.0 {
            return fail("jump_force must be negative (upward)");
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 {
            return fail("player size must be positive");
        }
        if !(self.ground_fraction > 0.0 && self.ground_fraction <= 1.0) {
            return fail("ground_fraction must be in (0, 1]");
        }
        if self.start_speed <= 0.0 {
            return fail("start_speed must be positive");
        }
        if self.start_speed > self.max_speed {
            return fail("start_speed must not exceed max_speed");
        }
        if self.speed_increment < 0.0 {
            return fail("speed_increment must not be negative");
        }
        if self.min_spawn_interval > self.max_spawn_interval {
            return fail("min_spawn_interval must not exceed max_spawn_interval");
        }
        if self.min_spawn_floor > self.max_spawn_floor {
            return fail("min_spawn_floor must not exceed max_spawn_floor");
        }
        if !(0.0..=1.0).contains(&self.stack_chance) {
            return fail("stack_chance must be in [0, 1]");
        }
        if self.tyre_radius_min <= 0.0 || self.tyre_radius_min >= self.tyre_radius_max {
            return fail("tyre radius range must be positive and non-empty");
        }
        if self.stack_min_tyres < 2 || self.stack_min_tyres > self.stack_max_tyres {
            return fail("stack tyre count range must start at 2 or more and be non-empty");
        }
        Ok(())
    }
}
