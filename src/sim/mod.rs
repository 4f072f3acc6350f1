//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (sequence order in the entity vectors)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, score_for_size};
pub use state::{GameEvent, GameState, Missile, Obstacle, Ship};
pub use tick::{TickInput, movement_delta, tick};
