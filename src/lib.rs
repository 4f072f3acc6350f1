//! Sidewinder - a side-scrolling arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `scene`: The `Scene` trait and the arcade scene implementation
//! - `driver`: Frame loop (pacing, event polling, update/render dispatch)
//! - `platform`: Traits for the windowing/rendering/audio collaborator
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use scene::{ArcadeScene, Scene};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play-field dimensions in pixels
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Minimum interval between frame loop iterations (throttle, not sleep)
    pub const MIN_FRAME_MS: u64 = 10;
    /// How often the cached status line is re-queried
    pub const STATUS_REFRESH_MS: u64 = 1000;

    /// Muzzle offset: missiles spawn this far ahead of the ship center
    pub const MUZZLE_OFFSET_X: f32 = 32.0;

    /// Ship outline vertices relative to the ship position (closed triangle)
    pub const SHIP_OUTLINE: [Vec2; 3] = [
        Vec2::new(30.0, 0.0),
        Vec2::new(-20.0, -15.0),
        Vec2::new(-20.0, 15.0),
    ];

    /// Parking spot for a missile consumed by a collision; far enough right
    /// that the next missile pass filters it out
    pub const MISSILE_PARKED_X: f32 = FIELD_WIDTH * 10.0;
}
