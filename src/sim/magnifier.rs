//! Magnified preview around the ball
//!
//! A read-only projection of the ball and track into a small square window
//! centered on the ball, used while dragging so a finger does not hide the
//! gap to the walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BallColor, BallState};
use super::track::TrackConfig;
use crate::consts::{MAGNIFIER_SIZE_DESKTOP, MAGNIFIER_ZOOM};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnifierSettings {
    /// Window edge length in pixels
    pub size: f32,
    pub zoom: f32,
}

impl Default for MagnifierSettings {
    fn default() -> Self {
        Self {
            size: MAGNIFIER_SIZE_DESKTOP,
            zoom: MAGNIFIER_ZOOM,
        }
    }
}

/// Everything a renderer needs to draw the preview, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnifierView {
    pub size: f32,
    pub zoom: f32,
    /// Track center inside the window (usually far outside it)
    pub track_center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Always the window center
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub start_line: (Vec2, Vec2),
    pub ball_color: BallColor,
}

impl MagnifierView {
    pub fn project(track: &TrackConfig, ball: &BallState, settings: &MagnifierSettings) -> Self {
        let zoom = settings.zoom;
        let window_center = Vec2::splat(settings.size / 2.0);
        let offset = (ball.pos - track.center()) * zoom;
        let track_center = window_center - offset;

        let inner_radius = track.inner_radius() * zoom;
        let outer_radius = track.outer_radius() * zoom;
        let start_dir = {
            let theta = track.start_angle().to_radians();
            Vec2::new(theta.cos(), theta.sin())
        };

        Self {
            size: settings.size,
            zoom,
            track_center,
            inner_radius,
            outer_radius,
            ball_center: window_center,
            ball_radius: track.ball_radius() * zoom,
            start_line: (
                track_center + start_dir * inner_radius,
                track_center + start_dir * outer_radius,
            ),
            ball_color: ball.color,
        }
    }
}
