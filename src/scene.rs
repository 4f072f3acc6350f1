//! The `Scene` trait and the arcade scene
//!
//! The driver owns the loop; a scene owns game state and answers three
//! questions per frame: how does the world advance, what gets drawn, and
//! what does the status line say.

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Audio, Canvas, Color, SoundEffect};
use crate::sim::{self, GameEvent, GameState, TickInput};
use crate::tuning::Tuning;

/// A screenful of game, driven by the frame loop
pub trait Scene {
    /// Advance by `dt` seconds of elapsed time, routing sound cues to `audio`
    fn update(&mut self, dt: f32, input: &TickInput, audio: &mut dyn Audio);
    /// Draw the current state
    fn render(&self, canvas: &mut dyn Canvas);
    /// Short human-readable status line; the driver re-queries once per second
    fn status(&self) -> String;
}

/// Obstacle outline color
const OBSTACLE_COLOR: Color = Color::rgb(255, 128, 100);

/// The shooter itself: ship, missiles, obstacles, energy, score
pub struct ArcadeScene {
    pub state: GameState,
    tuning: Tuning,
}

impl ArcadeScene {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed),
            tuning,
        }
    }
}

impl Scene for ArcadeScene {
    fn update(&mut self, dt: f32, input: &TickInput, audio: &mut dyn Audio) {
        sim::tick(&mut self.state, input, dt, &self.tuning);

        for event in self.state.drain_events() {
            match event {
                GameEvent::MissileFired => audio.play(SoundEffect::Shoot),
                GameEvent::ObstacleDestroyed { .. } => audio.play(SoundEffect::Explosion),
            }
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        // Ship: closed triangle outline, repeating the first vertex
        canvas.set_draw_color(Color::WHITE);
        let mut outline = [Vec2::ZERO; 4];
        for (i, p) in outline.iter_mut().enumerate() {
            *p = self.state.ship.pos + SHIP_OUTLINE[i % 3];
        }
        canvas.draw_line_strip(&outline);

        for m in &self.state.missiles {
            canvas.draw_point(m.pos);
        }

        canvas.set_draw_color(OBSTACLE_COLOR);
        for o in &self.state.obstacles {
            let b = o.bounds();
            canvas.draw_rect_outline(b.min, b.max);
        }
    }

    fn status(&self) -> String {
        format!(
            "Energy: {:3}   Score: {}",
            self.state.energy as i32, self.state.score
        )
    }
}
