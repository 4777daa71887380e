//! Fixed-frame simulation tick
//!
//! Core game loop that advances the session by one visual frame.

use super::entity::Entity;
use super::obstacle::Obstacle;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary action (space/click): start, jump or restart depending on phase
    pub primary: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the session by one frame
///
/// The primary action is applied first (see [`GameState::primary_action`]),
/// then, if the session is playing, the frame runs: player physics, spawning, obstacle movement and collision,
/// speed-up and scoring. A crash detected during the frame still lets the
/// frame finish before the phase switches to `GameOver`.
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let mut input = input.clone();
    if input.idle_mode {
        input.primary |= idle_wants_primary(state);
    }

    if input.primary {
        events.extend(state.primary_action(rng));
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Player physics
    let ctx = state.frame_context(state.time_ticks);
    state.player.update(&ctx);

    // Spawning
    if state.spawner.tick(state.speed, &state.tuning, rng) {
        let id = state.next_entity_id();
        let obstacle = Obstacle::spawn(id, &state.viewport, &state.tuning, rng);
        log::debug!(
            "Spawned obstacle {} ({} tyres, r={:.1}); next in {} frames",
            id,
            obstacle.tyre_count,
            obstacle.tyre_radius,
            state.spawner.next_interval
        );
        events.push(GameEvent::ObstacleSpawned {
            id,
            tyres: obstacle.tyre_count,
        });
        state.obstacles.push(obstacle);
    }

    // Move obstacles, drop the ones that left the screen, find the first hit
    let player = &state.player;
    let mut crashed_into = None;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.update(&ctx);
        if obstacle.is_offscreen() {
            return false;
        }
        if crashed_into.is_none() && obstacle.hits(player) {
            crashed_into = Some(obstacle.id);
        }
        true
    });

    state.accelerate();
    state.score += 1;

    if let Some(obstacle_id) = crashed_into {
        state.phase = GamePhase::GameOver;
        let score = state.display_score();
        log::info!("Game Over! Final Score: {}", score);
        events.push(GameEvent::Crashed { obstacle_id, score });
    }

    events
}

/// Run `frames` ticks with the same input, collecting every event
///
/// One-shot inputs (`primary`) are only applied on the first frame.
pub fn advance<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
    frames: u32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut input = input.clone();
    for _ in 0..frames {
        events.extend(tick(state, &input, rng));
        input.primary = false;
    }
    events
}

/// Autopilot decision for this frame
///
/// Starts and restarts on its own. While playing, jumps so that the apex of
/// the jump lines up with the middle of the nearest obstacle ahead.
fn idle_wants_primary(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Playing => {
            if state.player.airborne {
                return false;
            }
            let player = &state.player;
            let apex_frames = -state.tuning.jump_force / state.tuning.gravity;
            state
                .obstacles
                .iter()
                .filter(|o| o.pos.x >= player.right())
                .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
                .is_some_and(|o| {
                    let gap = o.pos.x - player.right();
                    let trigger = state.speed * apex_frames - (player.size.x + o.size.x) / 2.0;
                    gap <= trigger
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::Viewport;
    use crate::sim::rng::{SequenceRng, seeded};
    use crate::tuning::Tuning;

    fn new_state(seed: u64) -> GameState {
        let viewport = Viewport::new(800.0, 400.0, GROUND_LEVEL_PERCENT);
        GameState::new(viewport, Tuning::default(), &mut seeded(seed))
    }

    fn primary() -> TickInput {
        TickInput {
            primary: true,
            ..Default::default()
        }
    }

    /// Put a single tyre right in front of the grounded player
    fn tyre_on_player(state: &mut GameState) {
        let id = state.next_entity_id();
        let ground = state.viewport.ground_y;
        let obstacle = Obstacle::new(id, 150.0, ground, 15.0, 1, &state.tuning);
        state.obstacles.push(obstacle);
    }

    #[test]
    fn test_tick_start_to_playing() {
        let mut state = new_state(1);
        let mut rng = seeded(1);

        // Tick without input - should stay on the title screen
        assert!(tick(&mut state, &TickInput::default(), &mut rng).is_empty());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);

        let events = tick(&mut state, &primary(), &mut rng);
        assert_eq!(events.first(), Some(&GameEvent::Started));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.speed, START_SPEED + SPEED_INCREMENT);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_primary_while_playing_jumps() {
        let mut state = new_state(1);
        let mut rng = seeded(1);
        tick(&mut state, &primary(), &mut rng);

        let events = tick(&mut state, &primary(), &mut rng);
        assert!(events.contains(&GameEvent::Jumped));
        assert!(state.player.airborne);
        // Impulse then one frame of gravity
        assert!((state.player.vel_y - (JUMP_FORCE + GRAVITY)).abs() < 1e-4);

        // Mid-air press is dropped
        let events = tick(&mut state, &primary(), &mut rng);
        assert!(!events.contains(&GameEvent::Jumped));
        assert!((state.player.vel_y - (JUMP_FORCE + 2.0 * GRAVITY)).abs() < 1e-4);
    }

    #[test]
    fn test_score_counts_playing_frames() {
        let mut state = new_state(1);
        let mut rng = seeded(1);
        tick(&mut state, &primary(), &mut rng);
        // First spawn is at least 50 frames out
        advance(&mut state, &TickInput::default(), &mut rng, 24);
        assert_eq!(state.score, 25);
        assert_eq!(state.display_score(), 2);
    }

    #[test]
    fn test_no_progress_outside_playing() {
        let mut state = new_state(1);
        let mut rng = seeded(1);
        advance(&mut state, &TickInput::default(), &mut rng, 100);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, START_SPEED);
        assert_eq!(state.spawner.timer, 0);
    }

    #[test]
    fn test_spawns_on_interval() {
        let mut state = new_state(1);
        let mut rng = seeded(5);
        state.spawner.next_interval = 3;
        tick(&mut state, &primary(), &mut rng);
        tick(&mut state, &TickInput::default(), &mut rng);
        assert!(state.obstacles.is_empty());

        let events = tick(&mut state, &TickInput::default(), &mut rng);
        assert!(matches!(events[..], [GameEvent::ObstacleSpawned { id: 1, .. }]));
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at the right edge and moved once this frame
        assert!((state.obstacles[0].pos.x - (800.0 - state.speed)).abs() < 0.01);
    }

    #[test]
    fn test_collision_ends_game() {
        let mut state = new_state(1);
        let mut rng = seeded(1);
        tick(&mut state, &primary(), &mut rng);
        state.obstacles.clear();
        tyre_on_player(&mut state);

        let score_before = state.score;
        let events = tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.iter().any(|e| matches!(e, GameEvent::Crashed { .. })));
        // The crash frame still counts
        assert_eq!(state.score, score_before + 1);

        // Frozen afterwards
        let frozen_x = state.obstacles[0].pos.x;
        advance(&mut state, &TickInput::default(), &mut rng, 10);
        assert_eq!(state.obstacles[0].pos.x, frozen_x);
        assert_eq!(state.score, score_before + 1);
    }

    #[test]
    fn test_first_collision_wins() {
        let mut state = new_state(1);
        let mut rng = seeded(1);
        tick(&mut state, &primary(), &mut rng);
        state.obstacles.clear();
        tyre_on_player(&mut state);
        tyre_on_player(&mut state);
        let first = state.obstacles[0].id;
        let second_x = state.obstacles[1].pos.x;

        let events = tick(&mut state, &TickInput::default(), &mut rng);
        let crashes: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Crashed { obstacle_id, .. } => Some(*obstacle_id),
                _ => None,
            })
            .collect();
        assert_eq!(crashes, vec![first]);
        // Later obstacles still moved this frame
        assert!(state.obstacles[1].pos.x < second_x);
    }

    #[test]
    fn test_offscreen_obstacles_removed() {
        let mut state = new_state(1);
        let mut rng = seeded(1);
        tick(&mut state, &primary(), &mut rng);
        state.obstacles.clear();
        let id = state.next_entity_id();
        let ground = state.viewport.ground_y;
        state
            .obstacles
            .push(Obstacle::new(id, -28.0, ground, 15.0, 1, &state.tuning));

        tick(&mut state, &TickInput::default(), &mut rng);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = new_state(1);
        let mut rng = seeded(1);
        tick(&mut state, &primary(), &mut rng);
        advance(&mut state, &TickInput::default(), &mut rng, 50);
        state.obstacles.clear();
        tyre_on_player(&mut state);
        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Unit sample 0.99 keeps the fresh spawn interval far away
        let events = tick(&mut state, &primary(), &mut SequenceRng::constant(0.99));
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(state.phase, GamePhase::Playing);
        // Reset, then one playing frame
        assert_eq!(state.score, 1);
        assert_eq!(state.speed, START_SPEED + SPEED_INCREMENT);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawner.timer, 1);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs end up identical
        let mut a = new_state(99);
        let mut b = new_state(99);
        let mut rng_a = seeded(99);
        let mut rng_b = seeded(99);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for _ in 0..2000 {
            tick(&mut a, &idle, &mut rng_a);
            tick(&mut b, &idle, &mut rng_b);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.player, b.player);
    }

    #[test]
    fn test_idle_mode_clears_single_tyres() {
        // Unit sample 0.5: never a stack, radius 16, spawn every 89 frames
        let mut state = new_state(1);
        let mut rng = SequenceRng::constant(0.5);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let events = advance(&mut state, &idle, &mut rng, 1500);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Crashed { .. })));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Jumped)));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_speed_monotonic_while_playing() {
        let mut state = new_state(3);
        let mut rng = seeded(3);
        tick(&mut state, &primary(), &mut rng);
        let mut prev = state.speed;
        for _ in 0..3000 {
            state.obstacles.clear();
            tick(&mut state, &TickInput::default(), &mut rng);
            assert!(state.speed >= prev);
            assert!(state.speed <= MAX_SPEED);
            prev = state.speed;
        }
        assert_eq!(state.speed, MAX_SPEED);
    }
}
