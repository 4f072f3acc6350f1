//! Frame loop
//!
//! Poll-update-render cycle around the platform traits. The loop throttles
//! itself by skipping iteration bodies until at least `MIN_FRAME_MS` has
//! elapsed (a backend may block instead, as long as pacing and delta
//! computation look the same). A quit event or the escape key clears the
//! running flag, checked once per iteration; there is no mid-tick
//! cancellation.

use glam::Vec2;

use crate::consts::{MIN_FRAME_MS, STATUS_REFRESH_MS};
use crate::platform::{Audio, Canvas, Clock, Event, EventSource, Key, Keyboard};
use crate::scene::Scene;
use crate::sim::TickInput;

/// Sample the keyboard into this tick's input. Movement axes are read
/// independently; fire is a plain intent bit, gating happens in the sim.
pub fn sample_input(keyboard: &dyn Keyboard) -> TickInput {
    TickInput {
        up: keyboard.is_pressed(Key::Up),
        down: keyboard.is_pressed(Key::Down),
        left: keyboard.is_pressed(Key::Left),
        right: keyboard.is_pressed(Key::Right),
        fire: keyboard.is_pressed(Key::Fire),
    }
}

/// Run the frame loop until a quit is requested
pub fn run(
    clock: &impl Clock,
    events: &mut impl EventSource,
    keyboard: &impl Keyboard,
    canvas: &mut impl Canvas,
    audio: &mut impl Audio,
    scene: &mut impl Scene,
) {
    let mut last_tick = clock.now_ms();
    let mut last_status = last_tick;
    let mut status = scene.status();
    let mut running = true;

    log::info!("frame loop started");

    while running {
        let tick_ms = clock.now_ms();
        if tick_ms - last_tick < MIN_FRAME_MS {
            continue;
        }
        let delta = (tick_ms - last_tick) as f32 / 1000.0;
        last_tick = tick_ms;

        while let Some(event) = events.poll() {
            match event {
                Event::Quit => {
                    log::info!("quit requested");
                    running = false;
                }
                Event::KeyDown(Key::Escape) => {
                    log::info!("escape pressed, quitting");
                    running = false;
                }
                Event::KeyDown(_) => {}
            }
        }

        let input = sample_input(keyboard);
        scene.update(delta, &input, audio);

        canvas.clear();
        scene.render(canvas);

        // Status text re-queried at most once per second
        if tick_ms > last_status + STATUS_REFRESH_MS {
            last_status = tick_ms;
            status = scene.status();
        }
        canvas.draw_text(&status, Vec2::ZERO);

        canvas.present();
    }

    log::info!("frame loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{
        QuitAfter, RecordingAudio, RecordingCanvas, ScriptedKeyboard, SteppingClock,
    };
    use crate::platform::SoundEffect;
    use crate::scene::ArcadeScene;
    use crate::tuning::Tuning;

    struct OneShot(Option<Event>);

    impl EventSource for OneShot {
        fn poll(&mut self) -> Option<Event> {
            self.0.take()
        }
    }

    #[test]
    fn test_sample_input_reads_all_keys() {
        let mut keyboard = ScriptedKeyboard::default();
        keyboard.press(Key::Up);
        keyboard.press(Key::Fire);

        let input = sample_input(&keyboard);
        assert!(input.up);
        assert!(input.fire);
        assert!(!input.down && !input.left && !input.right);
    }

    #[test]
    fn test_loop_runs_and_quits() {
        let clock = SteppingClock::new(16);
        let mut events = QuitAfter::polls(200);
        let mut keyboard = ScriptedKeyboard::default();
        keyboard.press(Key::Fire);
        let mut canvas = RecordingCanvas::default();
        let mut audio = RecordingAudio::default();
        let mut scene = ArcadeScene::new(42, Tuning::default());

        run(
            &clock,
            &mut events,
            &keyboard,
            &mut canvas,
            &mut audio,
            &mut scene,
        );

        // Every frame cleared and presented; holding fire for ~3 simulated
        // seconds with a 300 ms cooldown produces multiple shots
        assert!(canvas.presents > 100);
        assert_eq!(canvas.clears, canvas.presents);
        assert!(audio.played.iter().filter(|s| **s == SoundEffect::Shoot).count() >= 2);
        // Status line drawn every frame
        assert!(canvas.last_text.as_deref().unwrap().starts_with("Energy:"));
    }

    #[test]
    fn test_escape_quits() {
        let clock = SteppingClock::new(16);
        let mut events = OneShot(Some(Event::KeyDown(Key::Escape)));
        let keyboard = ScriptedKeyboard::default();
        let mut canvas = RecordingCanvas::default();
        let mut audio = RecordingAudio::default();
        let mut scene = ArcadeScene::new(42, Tuning::default());

        run(
            &clock,
            &mut events,
            &keyboard,
            &mut canvas,
            &mut audio,
            &mut scene,
        );

        assert_eq!(canvas.presents, 1);
    }

    #[test]
    fn test_throttle_skips_short_intervals() {
        // 5 ms steps: only every other clock read clears the 10 ms bar
        let clock = SteppingClock::new(5);
        let mut events = QuitAfter::polls(10);
        let keyboard = ScriptedKeyboard::default();
        let mut canvas = RecordingCanvas::default();
        let mut audio = RecordingAudio::default();
        let mut scene = ArcadeScene::new(42, Tuning::default());

        run(
            &clock,
            &mut events,
            &keyboard,
            &mut canvas,
            &mut audio,
            &mut scene,
        );

        // Far fewer frames ran than clock reads happened
        assert!(canvas.presents <= 11);
        assert!(canvas.presents > 0);
    }
}
