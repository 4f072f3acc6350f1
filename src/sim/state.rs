//! Game state and core simulation types
//!
//! All state needed to reproduce a run lives here, including the RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The player's ship. Exactly one, never destroyed during a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
}

impl Default for Ship {
    fn default() -> Self {
        // Start a quarter of the way in, vertically centered
        Self {
            pos: Vec2::new(FIELD_WIDTH / 4.0, FIELD_HEIGHT / 2.0),
        }
    }
}

/// A missile entity. Travels right at constant speed, never moves vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub pos: Vec2,
}

impl Missile {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

/// An obstacle entity. Drifts left at its spawn speed; the rotation angle is
/// cosmetic and plays no part in collision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Horizontal speed in pixels/sec, fixed at spawn
    pub speed: f32,
    /// Half-extent of the bounding box, fixed at spawn
    pub size: f32,
    /// Cosmetic rotation, monotonically increasing
    pub angle: f32,
}

impl Obstacle {
    /// Axis-aligned bounding box used for missile containment tests
    pub fn bounds(&self) -> super::Aabb {
        super::Aabb::centered(self.pos, self.size)
    }
}

/// Things that happened during a tick that the outside world may react to
/// (sound cues). Exactly one event per successful fire or match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A missile was fired (energy paid, cooldown restarted)
    MissileFired,
    /// A missile struck an obstacle; both are being removed
    ObstacleDestroyed { score_delta: i64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG, the only non-determinism source (obstacle spawns)
    pub rng: Pcg32,
    /// Simulation clock in milliseconds, advanced by each tick's delta
    pub clock_ms: f64,
    /// Clock reading of the last successful fire
    pub last_fire_ms: f64,
    /// Clock reading of the last obstacle spawn
    pub last_spawn_ms: f64,
    pub ship: Ship,
    /// Live missiles, in spawn order (order is the collision tie-break)
    pub missiles: Vec<Missile>,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Signed: oversized obstacles score negative, reproduced as-is
    pub score: i64,
    /// Always within [0, 100]
    pub energy: f32,
    /// Events produced by the current tick, drained by the scene
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock_ms: 0.0,
            last_fire_ms: 0.0,
            last_spawn_ms: 0.0,
            ship: Ship::default(),
            missiles: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            energy: 100.0,
            events: Vec::new(),
        }
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
