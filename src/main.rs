//! Porsche 911 Dash entry point
//!
//! Runs the game headless for a fixed number of frames. Drawing is left to
//! an external renderer; here the draw lists are only counted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use porsche_dash::render::{DrawCommand, Renderer};
use porsche_dash::sim::GameEvent;
use porsche_dash::{Game, Settings};

#[derive(Parser, Debug)]
#[command(name = "porsche-dash")]
#[command(about = "Headless runner for the Porsche 911 Dash side-scroller")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Host window width; the canvas is derived from it
    #[arg(long)]
    window_width: Option<f32>,
    /// Host window height
    #[arg(long)]
    window_height: Option<f32>,
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Let the autopilot play
    #[arg(long)]
    autopilot: bool,
    /// Stop after this many finished runs
    #[arg(long)]
    max_games: Option<u32>,
}

/// Counts frames and draw commands instead of painting
#[derive(Default)]
struct NullRenderer {
    frames: u64,
    commands: u64,
}

impl Renderer for NullRenderer {
    fn present(&mut self, commands: &[DrawCommand]) {
        self.frames += 1;
        self.commands += commands.len() as u64;
    }
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn run(args: Args) -> Result<()> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(w) = args.window_width {
        settings.window_width = w;
    }
    if let Some(h) = args.window_height {
        settings.window_height = h;
    }

    let seed = args.seed.unwrap_or_else(time_seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(seed, settings);
    game.set_idle_mode(args.autopilot);

    let mut renderer = NullRenderer::default();
    let mut games = 0u32;
    let mut best = 0u64;

    for _ in 0..args.frames {
        for event in game.run_frame(&mut renderer) {
            log::debug!("Frame {}: {:?}", game.frame_count, event);
            if let GameEvent::Crashed { score, .. } = event {
                games += 1;
                best = best.max(score);
            }
        }
        if args.max_games.is_some_and(|max| games >= max) {
            break;
        }
    }

    println!("seed:       {}", seed);
    println!("frames:     {}", renderer.frames);
    println!("draw cmds:  {}", renderer.commands);
    println!("games:      {}", games);
    println!("best score: {}", best);
    println!("phase:      {:?}", game.state.phase);
    println!("score:      {}", game.state.display_score());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Porsche 911 Dash (headless) starting...");
    run(Args::parse())
}
