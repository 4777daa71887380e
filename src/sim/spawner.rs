//! Obstacle spawn timing
//!
//! Counts frames since the last spawn and rolls the gap to the next one from
//! a range that tightens as the world speeds up.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Frames since the last spawn
    pub timer: u32,
    /// Frames between the last spawn and the next
    pub next_interval: u32,
}

impl Spawner {
    /// Fresh timer with an interval rolled from the base range
    pub fn new<R: RandomSource + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            timer: 0,
            next_interval: rng.frames(tuning.min_spawn_interval, tuning.max_spawn_interval),
        }
    }

    /// Count one frame; returns true when an obstacle is due
    ///
    /// When due, the timer restarts and the next interval is rolled from the
    /// range for the current `speed`.
    pub fn tick<R: RandomSource + ?Sized>(
        &mut self,
        speed: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> bool {
        self.timer += 1;
        if self.timer < self.next_interval {
            return false;
        }
        self.timer = 0;
        let (min, max) = interval_range(speed, tuning);
        self.next_interval = rng.frames(min, max);
        true
    }
}

/// Interval range `[min, max)` in frames at the given speed
///
/// `min = max(30, 50 - floor(1.5 * speed))`, `max = max(60, 150 - floor(2 * speed))`,
/// with `min <= max` enforced for tunings where the floors would cross.
pub fn interval_range(speed: f32, tuning: &Tuning) -> (u32, u32) {
    let shrink = |base: u32, factor: f32, floor: u32| {
        let reduced = base as i64 - (speed * factor).floor() as i64;
        reduced.max(floor as i64) as u32
    };
    let min = shrink(
        tuning.min_spawn_interval,
        tuning.min_spawn_speed_factor,
        tuning.min_spawn_floor,
    );
    let max = shrink(
        tuning.max_spawn_interval,
        tuning.max_spawn_speed_factor,
        tuning.max_spawn_floor,
    );
    (min.min(max), max)
}
