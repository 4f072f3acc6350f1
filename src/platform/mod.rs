//! Platform abstraction: the windowing/rendering/audio collaborator
//!
//! The simulation and driver never talk to a multimedia library directly;
//! they see only these traits. A real backend (SDL, web canvas, ...) binds
//! them once at startup; initialization failures there are fatal: log and
//! terminate. The headless implementations live in [`headless`] and back
//! the tests and the demo binary.

pub mod headless;

use glam::Vec2;

/// Logical keys the game consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Escape,
}

/// Events delivered by the platform's event pump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window close requested
    Quit,
    /// A key went down; only [`Key::Escape`] is consulted
    KeyDown(Key),
}

/// Sound cues, trigger-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A missile was fired
    Shoot,
    /// A missile destroyed an obstacle
    Explosion,
}

/// RGBA draw color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Monotonic frame clock, millisecond resolution
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Keyboard state query, sampled once per tick
pub trait Keyboard {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Event pump; `poll` returns `None` once the queue is drained for the frame
pub trait EventSource {
    fn poll(&mut self) -> Option<Event>;
}

/// Trigger-and-forget audio playback; no result is consulted
pub trait Audio {
    fn play(&mut self, sound: SoundEffect);
}

/// Drawing primitives the scene renders with
pub trait Canvas {
    fn clear(&mut self);
    fn present(&mut self);
    fn set_draw_color(&mut self, color: Color);
    /// Connected line strip; the ship closes its triangle by repeating the
    /// first vertex
    fn draw_line_strip(&mut self, points: &[Vec2]);
    fn draw_point(&mut self, p: Vec2);
    /// Rectangle outline from corner to corner
    fn draw_rect_outline(&mut self, min: Vec2, max: Vec2);
    /// Pre-rendered text at a fixed screen position
    fn draw_text(&mut self, text: &str, pos: Vec2);
}
