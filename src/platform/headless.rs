//! Headless platform implementations
//!
//! Enough of a platform to run the full loop without a window: a manually
//! stepped clock, a settable keyboard, a recording audio sink and canvas,
//! and a countdown event source. Used by the demo binary and the driver
//! tests.

use std::cell::Cell;
use std::collections::HashSet;

use glam::Vec2;

use super::{Audio, Canvas, Clock, Color, Event, EventSource, Key, Keyboard, SoundEffect};

/// Clock that advances a fixed amount every time it is read
pub struct SteppingClock {
    now: Cell<u64>,
    step_ms: u64,
}

impl SteppingClock {
    pub fn new(step_ms: u64) -> Self {
        Self {
            now: Cell::new(0),
            step_ms,
        }
    }
}

impl Clock for SteppingClock {
    fn now_ms(&self) -> u64 {
        let t = self.now.get() + self.step_ms;
        self.now.set(t);
        t
    }
}

/// Keyboard whose pressed set is scripted by the caller
#[derive(Default)]
pub struct ScriptedKeyboard {
    pressed: HashSet<Key>,
}

impl ScriptedKeyboard {
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }
}

impl Keyboard for ScriptedKeyboard {
    fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Event source that stays quiet for a number of polls, then requests quit
pub struct QuitAfter {
    remaining: u64,
    delivered: bool,
}

impl QuitAfter {
    pub fn polls(remaining: u64) -> Self {
        Self {
            remaining,
            delivered: false,
        }
    }
}

impl EventSource for QuitAfter {
    fn poll(&mut self) -> Option<Event> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return None;
        }
        if self.delivered {
            return None;
        }
        self.delivered = true;
        Some(Event::Quit)
    }
}

/// Audio sink that records every cue it is asked to play
#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
}

impl Audio for RecordingAudio {
    fn play(&mut self, sound: SoundEffect) {
        self.played.push(sound);
    }
}

/// Canvas that counts primitives and keeps the last status text
#[derive(Default)]
pub struct RecordingCanvas {
    pub clears: u32,
    pub presents: u32,
    pub line_strips: u32,
    pub points: u32,
    pub rects: u32,
    pub last_text: Option<String>,
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn set_draw_color(&mut self, _color: Color) {}

    fn draw_line_strip(&mut self, _points: &[Vec2]) {
        self.line_strips += 1;
    }

    fn draw_point(&mut self, _p: Vec2) {
        self.points += 1;
    }

    fn draw_rect_outline(&mut self, _min: Vec2, _max: Vec2) {
        self.rects += 1;
    }

    fn draw_text(&mut self, text: &str, _pos: Vec2) {
        self.last_text = Some(text.to_owned());
    }
}
