//! Sidewinder entry point
//!
//! Runs the full frame loop against the headless platform: a stepping
//! clock, an autopilot that holds the fire key, and a recording canvas.
//! A real build binds the platform traits to a multimedia backend instead;
//! any failure there is fatal at startup (log and exit).

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use sidewinder::platform::headless::{
    QuitAfter, RecordingAudio, RecordingCanvas, ScriptedKeyboard, SteppingClock,
};
use sidewinder::platform::Key;
use sidewinder::{driver, ArcadeScene, Scene, Tuning};

/// Simulated frame interval for the headless run
const FRAME_MS: u64 = 16;
/// How long the demo plays before quitting
const DEMO_SECONDS: u64 = 30;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("starting demo run, seed {seed}");

    let tuning = Tuning::load(Path::new("tuning.json"));

    let clock = SteppingClock::new(FRAME_MS);
    let mut events = QuitAfter::polls(DEMO_SECONDS * 1000 / FRAME_MS);
    let mut keyboard = ScriptedKeyboard::default();
    keyboard.press(Key::Fire);
    let mut canvas = RecordingCanvas::default();
    let mut audio = RecordingAudio::default();
    let mut scene = ArcadeScene::new(seed, tuning);

    driver::run(
        &clock,
        &mut events,
        &keyboard,
        &mut canvas,
        &mut audio,
        &mut scene,
    );

    log::info!(
        "demo finished after {} frames, {} sound cues",
        canvas.presents,
        audio.played.len()
    );
    println!("{}", scene.status());
}
