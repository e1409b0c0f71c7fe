//! Scripted player for demos and soak tests
//!
//! Walks the pointer clockwise around the track mid-line in fixed angular
//! steps until it is just past the start line. Radial jitter comes from a
//! seeded RNG so a run is reproducible; enough jitter drives the ball into a
//! wall.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::FULL_TURN_DEGREES;
use crate::normalize_degrees;
use crate::sim::TrackConfig;
use crate::sim::geometry::point_on_track;

/// Pointer path generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    center: Vec2,
    start_angle: f32,
    radius: f32,
    step_degrees: f32,
    jitter: f32,
    travelled: f32,
    rng: Pcg32,
}

impl Autopilot {
    pub fn new(track: &TrackConfig, seed: u64, step_degrees: f32, jitter: f32) -> Self {
        Self {
            center: track.center(),
            start_angle: track.start_angle(),
            radius: track.start_distance(),
            step_degrees: step_degrees.abs().max(0.1),
            jitter: jitter.abs(),
            travelled: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Number of pointer samples a full path produces
    pub fn sample_count(&self) -> usize {
        ((FULL_TURN_DEGREES / self.step_degrees).ceil() as usize) + 1
    }
}

impl Iterator for Autopilot {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        // One sample past the start line so the lap is closed, not grazed
        if self.travelled > FULL_TURN_DEGREES {
            return None;
        }
        self.travelled += self.step_degrees;

        let angle = normalize_degrees(self.start_angle + self.travelled);
        let wobble = if self.jitter > 0.0 {
            self.rng.random_range(-self.jitter..=self.jitter)
        } else {
            0.0
        };

        Some(point_on_track(self.center, self.radius + wobble, angle))
    }
}
