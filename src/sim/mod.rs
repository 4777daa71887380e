//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per visual frame
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod background;
pub mod collision;
pub mod entity;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use background::{BackgroundLayer, LayerShape, default_layers};
pub use collision::Aabb;
pub use entity::{Entity, FrameContext, Viewport};
pub use obstacle::Obstacle;
pub use player::Player;
pub use rng::{RandomSource, SequenceRng, seeded};
pub use spawner::{Spawner, interval_range};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, advance, tick};
