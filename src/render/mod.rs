//! Frame composition
//!
//! Turns the simulation state into an ordered draw list: sky, parallax
//! layers, ground, then whatever the current phase shows on top.

pub mod draw;
pub mod shapes;

pub use draw::{Color, DrawCommand, Renderer, TextAlign, colors};
pub use shapes::Draw;

use glam::Vec2;

use crate::sim::{BackgroundLayer, GamePhase, GameState, Viewport};

/// Read-only inputs for drawing a frame
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub viewport: Viewport,
    /// Frames since process start (animates the hills)
    pub frame: u64,
    pub show_controls_hint: bool,
}

/// Build the full draw list for one frame
pub fn compose_frame(
    state: &GameState,
    layers: &[BackgroundLayer],
    ctx: &RenderContext,
) -> Vec<DrawCommand> {
    let vp = &ctx.viewport;
    let mut out = vec![DrawCommand::Clear { color: colors::SKY }];

    for layer in layers {
        layer.draw(ctx, &mut out);
    }

    out.push(DrawCommand::rect(
        Vec2::new(0.0, vp.ground_y),
        Vec2::new(vp.width, vp.height - vp.ground_y),
        colors::GROUND,
    ));

    match state.phase {
        GamePhase::Start => {
            title_screen(vp, &mut out);
            state.player.draw(ctx, &mut out);
        }
        GamePhase::Playing => {
            draw_scene(state, ctx, &mut out);
            hud(state.display_score(), ctx, &mut out);
        }
        GamePhase::GameOver => {
            draw_scene(state, ctx, &mut out);
            game_over_screen(state.display_score(), vp, &mut out);
        }
    }

    out
}

fn draw_scene(state: &GameState, ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
    state.player.draw(ctx, out);
    for obstacle in &state.obstacles {
        obstacle.draw(ctx, out);
    }
}

fn title_screen(vp: &Viewport, out: &mut Vec<DrawCommand>) {
    let (w, h) = (vp.width, vp.height);
    out.push(DrawCommand::rect(
        Vec2::new(0.0, h / 4.0),
        Vec2::new(w, h / 2.0),
        colors::PANEL,
    ));
    out.push(DrawCommand::text(
        "PORSCHE 911 DASH",
        Vec2::new(w / 2.0, h / 3.0),
        32.0,
        colors::TITLE,
    ));
    out.push(DrawCommand::text(
        "Press SPACE or Click to Start",
        Vec2::new(w / 2.0, h / 2.0),
        20.0,
        colors::WHITE,
    ));
}

fn hud(score: u64, ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
    let (w, h) = (ctx.viewport.width, ctx.viewport.height);
    out.push(DrawCommand::Text {
        text: format!("Score: {score}"),
        pos: Vec2::new(20.0, 20.0),
        size: 24.0,
        color: colors::WHITE,
        align: TextAlign::TopLeft,
        outline: Some((colors::BLACK, 2.0)),
    });

    if ctx.show_controls_hint {
        out.push(DrawCommand::Rect {
            pos: Vec2::new(w / 2.0 - 150.0, h - 50.0),
            size: Vec2::new(300.0, 35.0),
            color: colors::PANEL,
            corner_radius: 5.0,
        });
        out.push(DrawCommand::text(
            "SPACEBAR / CLICK to JUMP",
            Vec2::new(w / 2.0, h - 32.0),
            18.0,
            colors::WHITE,
        ));
    }
}

fn game_over_screen(score: u64, vp: &Viewport, out: &mut Vec<DrawCommand>) {
    let (w, h) = (vp.width, vp.height);
    out.push(DrawCommand::rect(Vec2::ZERO, Vec2::new(w, h), colors::DIM));
    out.push(DrawCommand::text(
        "GAME OVER",
        Vec2::new(w / 2.0, h / 3.0),
        48.0,
        colors::GAME_OVER,
    ));
    out.push(DrawCommand::text(
        format!("Score: {score}"),
        Vec2::new(w / 2.0, h / 2.0),
        24.0,
        colors::WHITE,
    ));
    out.push(DrawCommand::text(
        "Press SPACE or Click to Restart",
        Vec2::new(w / 2.0, h / 2.0 + 60.0),
        20.0,
        colors::WHITE,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, default_layers, seeded};
    use crate::tuning::Tuning;

    fn setup() -> (GameState, Vec<BackgroundLayer>, RenderContext) {
        let viewport = Viewport::new(800.0, 400.0, 0.85);
        let state = GameState::new(viewport, Tuning::default(), &mut seeded(1));
        let ctx = RenderContext {
            viewport,
            frame: 0,
            show_controls_hint: true,
        };
        (state, default_layers(), ctx)
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_frame_shows_title() {
        let (state, layers, ctx) = setup();
        let frame = compose_frame(&state, &layers, &ctx);
        assert!(matches!(frame[0], DrawCommand::Clear { .. }));
        assert_eq!(
            texts(&frame),
            vec!["PORSCHE 911 DASH", "Press SPACE or Click to Start"]
        );
    }

    #[test]
    fn test_playing_frame_has_hud_and_obstacles() {
        let (mut state, layers, ctx) = setup();
        state.phase = GamePhase::Playing;
        state.score = 57;
        let id = state.next_entity_id();
        state
            .obstacles
            .push(Obstacle::new(id, 500.0, 340.0, 15.0, 2, &state.tuning));

        let frame = compose_frame(&state, &layers, &ctx);
        assert_eq!(texts(&frame), vec!["Score: 5", "SPACEBAR / CLICK to JUMP"]);
        let tyres = frame
            .iter()
            .filter(|c| matches!(c, DrawCommand::Ellipse { color, .. } if *color == colors::TYRE))
            .count();
        assert_eq!(tyres, 2);
    }

    #[test]
    fn test_hint_can_be_hidden() {
        let (mut state, layers, mut ctx) = setup();
        state.phase = GamePhase::Playing;
        ctx.show_controls_hint = false;
        let frame = compose_frame(&state, &layers, &ctx);
        assert_eq!(texts(&frame), vec!["Score: 0"]);
    }

    #[test]
    fn test_game_over_frame() {
        let (mut state, layers, ctx) = setup();
        state.phase = GamePhase::GameOver;
        state.score = 1234;
        let frame = compose_frame(&state, &layers, &ctx);
        assert_eq!(
            texts(&frame),
            vec!["GAME OVER", "Score: 123", "Press SPACE or Click to Restart"]
        );
    }

    #[test]
    fn test_ground_strip_below_ground_line() {
        let (state, layers, ctx) = setup();
        let frame = compose_frame(&state, &layers, &ctx);
        let ground = frame.iter().find_map(|c| match c {
            DrawCommand::Rect { pos, size, color, .. } if *color == colors::GROUND => {
                Some((*pos, *size))
            }
            _ => None,
        });
        let (pos, size) = ground.expect("ground strip");
        assert_eq!(pos.y, ctx.viewport.ground_y);
        assert!((pos.y + size.y - ctx.viewport.height).abs() < 1e-3);
    }
}
