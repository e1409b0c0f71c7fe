//! Boundary collision for the ball on the track
//!
//! The ball touches a wall as soon as its edge reaches either circle, i.e.
//! when the *raw* pointer distance reaches the clamp limits. Touching counts:
//! both comparisons are inclusive.

use serde::{Deserialize, Serialize};

use super::track::TrackConfig;

/// Which wall the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Inner,
    Outer,
}

/// Result of a boundary check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Wall that was touched, if any
    pub boundary: Option<Boundary>,
    /// How far past the legal band the ball center went (0 on a miss)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            boundary: None,
            penetration: 0.0,
        }
    }

    #[inline]
    pub fn hit(&self) -> bool {
        self.boundary.is_some()
    }
}

/// Check a raw (unclamped) ball distance against both walls
pub fn check_boundary(distance: f32, track: &TrackConfig) -> CollisionResult {
    let inner_limit = track.min_ball_distance();
    let outer_limit = track.max_ball_distance();

    if distance <= inner_limit {
        return CollisionResult {
            boundary: Some(Boundary::Inner),
            penetration: inner_limit - distance,
        };
    }

    if distance >= outer_limit {
        return CollisionResult {
            boundary: Some(Boundary::Outer),
            penetration: distance - outer_limit,
        };
    }

    CollisionResult::miss()
}
