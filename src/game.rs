//! Frame driver
//!
//! Owns everything that lives for the whole process: the session, the
//! parallax layers, the RNG and the frame counter. The host calls
//! [`Game::frame`] once per display frame and feeds input and resizes in
//! between.

use rand_pcg::Pcg32;

use crate::input::{InputQueue, RawInput};
use crate::render::{DrawCommand, RenderContext, Renderer, compose_frame};
use crate::settings::Settings;
use crate::sim::{
    BackgroundLayer, Entity, GameEvent, GameState, Viewport, default_layers, seeded, tick,
};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    /// Not reset between runs
    pub layers: Vec<BackgroundLayer>,
    /// Frames since startup, in every phase
    pub frame_count: u64,
    pub settings: Settings,
    seed: u64,
    rng: Pcg32,
    input: InputQueue,
    idle_mode: bool,
}

impl Game {
    /// Set up a session sized from the settings' window
    pub fn new(seed: u64, settings: Settings) -> Self {
        let viewport = Viewport::from_window(
            settings.window_width,
            settings.window_height,
            settings.tuning.ground_fraction,
        );
        Self::with_viewport(seed, viewport, settings)
    }

    /// Set up a session on an explicit canvas
    pub fn with_viewport(seed: u64, viewport: Viewport, settings: Settings) -> Self {
        log::info!("Canvas created: {}x{}", viewport.width, viewport.height);
        let mut rng = seeded(seed);
        let state = GameState::new(viewport, settings.tuning, &mut rng);
        log::info!("Setup complete. Initializing game state: {:?}", state.phase);
        Self {
            state,
            layers: default_layers(),
            frame_count: 0,
            settings,
            seed,
            rng,
            input: InputQueue::new(),
            idle_mode: false,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    /// Let the autopilot play
    pub fn set_idle_mode(&mut self, enabled: bool) {
        self.idle_mode = enabled;
    }

    /// Queue a raw input event; returns true if the game consumed it
    pub fn handle_input(&mut self, event: RawInput) -> bool {
        self.input.push(event)
    }

    /// Host window changed size: recompute the canvas and ground line
    pub fn resize(&mut self, window_width: f32, window_height: f32) {
        let viewport = Viewport::from_window(
            window_width,
            window_height,
            self.state.tuning.ground_fraction,
        );
        self.state.resize(viewport);
        log::info!(
            "Window resized. New canvas: {}x{}. New groundY: {}",
            viewport.width,
            viewport.height,
            viewport.ground_y
        );
    }

    /// Advance one frame: scroll the background, then tick the session
    pub fn frame(&mut self) -> Vec<GameEvent> {
        self.frame_count += 1;

        let ctx = self.state.frame_context(self.frame_count);
        for layer in &mut self.layers {
            layer.update(&ctx);
        }

        let mut input = self.input.take();
        input.idle_mode = self.idle_mode;
        tick(&mut self.state, &input, &mut self.rng)
    }

    /// Draw list for the current state
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let ctx = RenderContext {
            viewport: self.state.viewport,
            frame: self.frame_count,
            show_controls_hint: self.settings.show_controls_hint,
        };
        compose_frame(&self.state, &self.layers, &ctx)
    }

    /// Advance one frame and hand the result to a renderer
    pub fn run_frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Vec<GameEvent> {
        let events = self.frame();
        renderer.present(&self.draw_list());
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::input::Key;
    use crate::sim::{GamePhase, Obstacle};

    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
        last_len: usize,
    }

    impl Renderer for CountingRenderer {
        fn present(&mut self, commands: &[DrawCommand]) {
            self.frames += 1;
            self.last_len = commands.len();
        }
    }

    fn new_game() -> Game {
        Game::with_viewport(
            42,
            Viewport::new(800.0, 400.0, GROUND_LEVEL_PERCENT),
            Settings::default(),
        )
    }

    #[test]
    fn test_space_starts_game() {
        let mut game = new_game();
        game.frame();
        assert_eq!(game.state.phase, GamePhase::Start);

        assert!(game.handle_input(RawInput::KeyDown(Key::Space)));
        let events = game.frame();
        assert_eq!(events.first(), Some(&GameEvent::Started));
        assert_eq!(game.state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_background_scrolls_on_title_screen() {
        let mut game = new_game();
        game.frame();
        assert_eq!(game.layers[0].offset_x, -(START_SPEED * 0.1));
        assert!(game.layers[2].offset_x < game.layers[1].offset_x);
    }

    #[test]
    fn test_layers_survive_restart() {
        let mut game = new_game();
        game.handle_input(RawInput::PointerDown);
        game.frame();

        let id = game.state.next_entity_id();
        let ground = game.state.viewport.ground_y;
        let tyre = Obstacle::new(id, 150.0, ground, 15.0, 1, &game.state.tuning);
        game.state.obstacles.push(tyre);
        game.frame();
        assert_eq!(game.state.phase, GamePhase::GameOver);

        let offset = game.layers[1].offset_x;
        game.handle_input(RawInput::KeyDown(Key::Space));
        let events = game.frame();
        assert!(events.contains(&GameEvent::Restarted));
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert!(game.layers[1].offset_x < offset);
        assert_eq!(game.frame_count, 3);
    }

    #[test]
    fn test_frame_counters() {
        let mut game = new_game();
        game.frame();
        game.frame();
        assert_eq!(game.frame_count, 2);
        assert_eq!(game.state.time_ticks, 0);

        game.handle_input(RawInput::PointerDown);
        game.frame();
        assert_eq!(game.frame_count, 3);
        assert_eq!(game.state.time_ticks, 1);
    }

    #[test]
    fn test_resize_moves_ground_and_player() {
        let mut game = new_game();
        game.resize(1000.0, 1000.0);
        let vp = game.viewport();
        assert_eq!(vp.width, 900.0);
        assert_eq!(vp.height, 700.0);
        assert!((game.state.player.bottom() - vp.ground_y).abs() < 1e-3);
    }

    #[test]
    fn test_run_frame_presents() {
        let mut game = new_game();
        let mut renderer = CountingRenderer::default();
        game.run_frame(&mut renderer);
        game.run_frame(&mut renderer);
        assert_eq!(renderer.frames, 2);
        assert!(renderer.last_len > 0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = new_game();
        let mut b = new_game();
        a.set_idle_mode(true);
        b.set_idle_mode(true);
        for _ in 0..3000 {
            assert_eq!(a.frame(), b.frame());
        }
        assert_eq!(a.state.score, b.state.score);
        assert_eq!(a.draw_list(), b.draw_list());
    }
}
