//! Progress tracking toward one full revolution
//!
//! Accumulates the shortest signed delta between consecutive angles since
//! the last reset. A lap is complete the moment the running total reaches a
//! full turn in either sign. Completion is one-shot: after it fires the
//! tracker ignores further updates until `reset`.
//!
//! A single sample that jumps more than half a turn (fast flick across the
//! seam) is read as the shorter rotation. This is deliberate: noisy input
//! must not be able to complete a lap in one event.

use serde::{Deserialize, Serialize};

use super::geometry::signed_angular_delta;
use crate::consts::FULL_TURN_DEGREES;

/// Which way the ball was last pushed (+1 forward/clockwise, -1 backward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReleaseDirection {
    #[default]
    Forward,
    Backward,
}

impl ReleaseDirection {
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            ReleaseDirection::Forward
        } else {
            ReleaseDirection::Backward
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            ReleaseDirection::Forward => 1.0,
            ReleaseDirection::Backward => -1.0,
        }
    }
}

/// Mutable progress for the current run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Signed degrees travelled since reset
    pub cumulative_rotation: f32,
    pub previous_angle: f32,
    pub release_direction: ReleaseDirection,
}

/// Result of feeding one angle to the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub cumulative_rotation: f32,
    pub completed: bool,
}

/// Forward-only lap counter
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    start_angle: f32,
    state: ProgressState,
    completed: bool,
}

impl ProgressTracker {
    pub fn new(start_angle: f32) -> Self {
        Self {
            start_angle,
            state: ProgressState {
                cumulative_rotation: 0.0,
                previous_angle: start_angle,
                release_direction: ReleaseDirection::default(),
            },
            completed: false,
        }
    }

    /// Zero the rotation and re-anchor at the start line
    pub fn reset(&mut self) {
        self.state.cumulative_rotation = 0.0;
        self.state.previous_angle = self.start_angle;
        self.state.release_direction = ReleaseDirection::default();
        self.completed = false;
    }

    /// Add the move to `new_angle` to the running total
    ///
    /// Returns `completed = true` on the update that reaches a full turn.
    /// Once completed, later calls change nothing.
    pub fn update(&mut self, new_angle: f32) -> ProgressUpdate {
        if self.completed {
            return ProgressUpdate {
                cumulative_rotation: self.state.cumulative_rotation,
                completed: true,
            };
        }

        let delta = signed_angular_delta(new_angle, self.state.previous_angle);
        self.state.cumulative_rotation += delta;
        self.state.previous_angle = new_angle;

        if self.state.cumulative_rotation.abs() >= FULL_TURN_DEGREES {
            self.completed = true;
        }

        ProgressUpdate {
            cumulative_rotation: self.state.cumulative_rotation,
            completed: self.completed,
        }
    }

    /// Remember which way the pointer last pushed the ball
    pub fn record_direction(&mut self, delta: f32) {
        self.state.release_direction = ReleaseDirection::from_delta(delta);
    }

    #[inline]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    #[inline]
    pub fn cumulative_rotation(&self) -> f32 {
        self.state.cumulative_rotation
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Fraction of the lap covered, clamped to [0, 1]
    pub fn fraction(&self) -> f32 {
        (self.state.cumulative_rotation.abs() / FULL_TURN_DEGREES).clamp(0.0, 1.0)
    }
}
