//! Shape generation for game entities
//!
//! Vehicle and tyre outlines are authored in local coordinates as fractions
//! of the entity's width/height, then placed at the entity position.

use glam::Vec2;

use super::draw::{Color, DrawCommand, colors};
use super::RenderContext;
use crate::sim::{BackgroundLayer, Obstacle, Player};

/// Something that can describe itself as draw commands
pub trait Draw {
    fn draw(&self, ctx: &RenderContext, out: &mut Vec<DrawCommand>);
}

/// Car body outline, nose on the right
const BODY: [(f32, f32); 14] = [
    (1.0, 0.55),
    (0.95, 0.4),
    (0.82, 0.25),
    (0.65, 0.2),
    (0.6, 0.05),
    (0.55, 0.0),
    (0.35, 0.0),
    (0.2, 0.1),
    (0.1, 0.35),
    (0.02, 0.45),
    (0.0, 0.7),
    (0.15, 1.0),
    (0.85, 1.0),
    (1.0, 0.75),
];

const WINDOWS: [(f32, f32); 6] = [
    (0.59, 0.08),
    (0.37, 0.08),
    (0.25, 0.18),
    (0.28, 0.38),
    (0.55, 0.38),
    (0.58, 0.2),
];

const SPOILER_WING: [(f32, f32); 4] = [(0.2, 0.15), (0.05, 0.15), (0.04, 0.22), (0.21, 0.22)];

/// Left edges of the two spoiler uprights
const SPOILER_UPRIGHTS: [f32; 2] = [0.07, 0.15];

/// Wheel centres along the body
const WHEEL_X: [f32; 2] = [0.78, 0.22];

/// Scale a unit-space outline onto a box at `origin`
fn place(outline: &[(f32, f32)], origin: Vec2, size: Vec2) -> Vec<Vec2> {
    outline
        .iter()
        .map(|&(fx, fy)| origin + Vec2::new(fx * size.x, fy * size.y))
        .collect()
}

fn polygon(points: Vec<Vec2>, color: Color) -> DrawCommand {
    DrawCommand::Polygon { points, color }
}

impl Draw for Player {
    fn draw(&self, _ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        let (origin, size) = (self.pos, self.size);

        // Wheels first so the body overlaps them
        let wheel_radius = size.y * 0.38;
        let wheel_y = origin.y + size.y - wheel_radius * 0.95;
        for fx in WHEEL_X {
            let center = Vec2::new(origin.x + size.x * fx, wheel_y);
            let d = wheel_radius * 2.0;
            out.push(DrawCommand::ellipse(center, d, d, colors::CAR_WHEEL));
            let rim = wheel_radius * 1.2;
            out.push(DrawCommand::ellipse(center, rim, rim, colors::CAR_RIM));
        }

        out.push(polygon(place(&BODY, origin, size), colors::CAR_BODY));
        out.push(polygon(place(&WINDOWS, origin, size), colors::CAR_WINDOW));

        for fx in SPOILER_UPRIGHTS {
            out.push(DrawCommand::rect(
                origin + Vec2::new(size.x * fx, size.y * 0.2),
                Vec2::new(size.x * 0.03, size.y * 0.15),
                colors::CAR_SPOILER,
            ));
        }
        out.push(polygon(place(&SPOILER_WING, origin, size), colors::CAR_SPOILER));

        out.push(DrawCommand::ellipse(
            origin + Vec2::new(size.x * 0.9, size.y * 0.45),
            size.x * 0.15,
            size.y * 0.25,
            colors::CAR_HEADLIGHT,
        ));
    }
}

impl Draw for Obstacle {
    fn draw(&self, _ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        // Stacked tyres are drawn slightly smaller with a gap between them
        let (visual_radius, gap) = if self.is_stack() {
            (self.tyre_radius * 0.95, self.tyre_radius * 0.15)
        } else {
            (self.tyre_radius, 0.0)
        };
        let center_x = self.pos.x + self.size.x / 2.0;

        for i in 0..self.tyre_count {
            let level = i as f32;
            let y = self.pos.y + self.size.y - visual_radius * 2.0 * level - visual_radius
                - gap * level;
            let center = Vec2::new(center_x, y);
            let d = visual_radius * 2.0;
            out.push(DrawCommand::ellipse(center, d, d, self.color));
            let hub = visual_radius * 0.8;
            out.push(DrawCommand::ellipse(center, hub, hub, colors::TYRE_HUB));
        }
    }
}

impl Draw for BackgroundLayer {
    fn draw(&self, ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        let vp = &ctx.viewport;
        for start_x in self.tile_origins(vp.width) {
            match self.silhouette(start_x, vp, ctx.frame) {
                Some(points) => out.push(polygon(points, self.color)),
                None => out.push(DrawCommand::rect(
                    Vec2::new(start_x, 0.0),
                    Vec2::new(vp.width, vp.ground_y),
                    self.color,
                )),
            }
        }
    }
}
