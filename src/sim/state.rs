//! Game state and core simulation types
//!
//! `GameState` is the whole session: phase, score, speed, spawn timing, the
//! player and the live obstacles. Background layers live outside it and are
//! never reset by a restart.

use serde::{Deserialize, Serialize};

use super::entity::{FrameContext, Viewport};
use super::obstacle::Obstacle;
use super::player::Player;
use super::rng::RandomSource;
use super::spawner::Spawner;
use crate::display_score;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first primary action
    Start,
    /// Active gameplay
    Playing,
    /// Crashed; scene frozen until restart
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start -> Playing
    Started,
    /// GameOver -> Playing, with everything reset
    Restarted,
    Jumped,
    ObstacleSpawned { id: u32, tyres: u32 },
    /// Playing -> GameOver, with the displayed score
    Crashed { obstacle_id: u32, score: u64 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Raw score: one point per playing frame
    pub score: u64,
    /// World scroll speed, within `[start_speed, max_speed]`
    pub speed: f32,
    pub spawner: Spawner,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub viewport: Viewport,
    pub tuning: Tuning,
    /// Simulation frames while playing, across restarts
    pub time_ticks: u64,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a session on the title screen
    pub fn new<R: RandomSource + ?Sized>(viewport: Viewport, tuning: Tuning, rng: &mut R) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            speed: tuning.start_speed,
            spawner: Spawner::new(&tuning, rng),
            player: Player::new(&viewport, &tuning),
            obstacles: Vec::new(),
            viewport,
            tuning,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        display_score(self.score)
    }

    /// Fresh run: new player, no obstacles, zero score, start speed and a
    /// newly rolled spawn interval. Phase becomes `Playing`.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        log::info!("Resetting game...");
        self.player = Player::new(&self.viewport, &self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.speed = self.tuning.start_speed;
        self.spawner = Spawner::new(&self.tuning, rng);
        self.phase = GamePhase::Playing;
    }

    /// Apply the primary action for the current phase
    ///
    /// Start begins play, playing jumps, game over resets into a fresh run.
    /// Only the phase transition happens here; no frame is simulated.
    pub fn primary_action<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<GameEvent> {
        log::debug!("Input detected. Game state: {:?}", self.phase);
        match self.phase {
            GamePhase::Start => {
                self.phase = GamePhase::Playing;
                log::info!("Game starting...");
                Some(GameEvent::Started)
            }
            GamePhase::Playing => self.player.jump().then_some(GameEvent::Jumped),
            GamePhase::GameOver => {
                self.reset(rng);
                log::info!("Game reset. State: {:?}", self.phase);
                Some(GameEvent::Restarted)
            }
        }
    }

    /// Speed up by one increment, never past the cap
    pub fn accelerate(&mut self) {
        if self.speed < self.tuning.max_speed {
            self.speed = (self.speed + self.tuning.speed_increment).min(self.tuning.max_speed);
        }
    }

    /// Follow a viewport resize: new ground line, player re-clamped
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.player.on_resize(&viewport);
    }

    /// Context handed to entities this frame
    pub fn frame_context(&self, frame: u64) -> FrameContext {
        FrameContext {
            speed: self.speed,
            viewport: self.viewport,
            frame,
            tuning: self.tuning,
        }
    }
}
