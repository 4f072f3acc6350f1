//! Missile/obstacle collision: axis-aligned box containment and scoring.
//!
//! Missiles are points; an obstacle's box is the square of half-extent
//! `size` around its center. Bounds are inclusive on all four edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of half-extent `half` around `center`
    pub fn centered(center: Vec2, half: f32) -> Self {
        Self {
            min: center - Vec2::splat(half),
            max: center + Vec2::splat(half),
        }
    }

    /// Inclusive containment: a point exactly on an edge or corner hits
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Score awarded for destroying an obstacle of the given size.
///
/// Truncated toward zero; large obstacles can score negative, which is
/// kept rather than clamped.
#[inline]
pub fn score_for_size(size: f32) -> i64 {
    (40.0 - size) as i64
}
