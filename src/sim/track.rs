//! Track configuration
//!
//! Immutable geometry shared by every part of the core. Built once per
//! session (usually from the viewport) and validated before a run exists.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{clamp_to_annulus, point_on_track};
use crate::consts::FULL_TURN_DEGREES;
use crate::error::ConfigError;
use crate::settings::GameSettings;

/// The annular track between two concentric circles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    ball_radius: f32,
    start_angle_degrees: f32,
}

impl TrackConfig {
    /// Validate and build a track
    ///
    /// The ball must fit strictly between the circles and the start angle
    /// must already be normalized.
    pub fn new(
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        ball_radius: f32,
        start_angle_degrees: f32,
    ) -> Result<Self, ConfigError> {
        if !center.is_finite() {
            return Err(ConfigError::NonFiniteValue("center"));
        }
        for (name, value) in [
            ("inner_radius", inner_radius),
            ("outer_radius", outer_radius),
            ("ball_radius", ball_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonFiniteValue(name));
            }
        }
        if !start_angle_degrees.is_finite()
            || !(0.0..FULL_TURN_DEGREES).contains(&start_angle_degrees)
        {
            return Err(ConfigError::StartAngleOutOfRange(start_angle_degrees));
        }
        if inner_radius + ball_radius >= outer_radius - ball_radius {
            return Err(ConfigError::DegenerateAnnulus {
                inner: inner_radius,
                outer: outer_radius,
                ball: ball_radius,
            });
        }

        Ok(Self {
            center,
            inner_radius,
            outer_radius,
            ball_radius,
            start_angle_degrees,
        })
    }

    /// Track centered in a `width` x `height` viewport
    ///
    /// Narrow viewports (below the settings breakpoint) get the mobile layout.
    pub fn from_viewport(settings: &GameSettings, width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidViewport { width, height });
        }

        let layout = settings.layout_for_width(width);
        log::info!(
            "Track for {}x{} viewport: {} layout, radii {}..{}",
            width,
            height,
            if settings.is_mobile(width) { "mobile" } else { "desktop" },
            layout.inner_radius,
            layout.outer_radius
        );

        Self::new(
            Vec2::new(width / 2.0, height / 2.0),
            layout.inner_radius,
            layout.outer_radius,
            settings.ball_radius,
            settings.start_angle_degrees,
        )
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    #[inline]
    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }

    #[inline]
    pub fn start_angle(&self) -> f32 {
        self.start_angle_degrees
    }

    /// Closest the ball center may get to the inner circle
    #[inline]
    pub fn min_ball_distance(&self) -> f32 {
        self.inner_radius + self.ball_radius
    }

    /// Farthest the ball center may get from the track center
    #[inline]
    pub fn max_ball_distance(&self) -> f32 {
        self.outer_radius - self.ball_radius
    }

    /// Track mid-line, where a fresh run starts
    #[inline]
    pub fn start_distance(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Ball center at the start of a run
    pub fn start_position(&self) -> Vec2 {
        point_on_track(self.center, self.start_distance(), self.start_angle_degrees)
    }

    /// Start-line point at a given distance (where the backward lock pins the ball)
    pub fn start_line_point(&self, distance: f32) -> Vec2 {
        point_on_track(self.center, distance, self.start_angle_degrees)
    }

    /// Start line endpoints on the inner and outer circles
    pub fn start_line(&self) -> (Vec2, Vec2) {
        (
            point_on_track(self.center, self.inner_radius, self.start_angle_degrees),
            point_on_track(self.center, self.outer_radius, self.start_angle_degrees),
        )
    }

    /// Clamp a raw pointer distance into the ball's legal band
    #[inline]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        clamp_to_annulus(distance, self.inner_radius, self.outer_radius, self.ball_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> TrackConfig {
        TrackConfig::new(Vec2::new(640.0, 400.0), 164.0, 208.0, 13.0, 90.0).unwrap()
    }

    #[test]
    fn test_valid_track() {
        let t = desktop();
        assert_eq!(t.min_ball_distance(), 177.0);
        assert_eq!(t.max_ball_distance(), 195.0);
        assert_eq!(t.start_distance(), 186.0);
        let p = t.start_position();
        assert!((p.x - 640.0).abs() < 1e-3);
        assert!((p.y - 586.0).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_degenerate_annulus() {
        // 100 + 13 >= 120 - 13
        let err = TrackConfig::new(Vec2::ZERO, 100.0, 120.0, 13.0, 90.0).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateAnnulus { .. }));

        let err = TrackConfig::new(Vec2::ZERO, 200.0, 150.0, 5.0, 90.0).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateAnnulus { .. }));
    }

    #[test]
    fn test_rejects_bad_start_angle() {
        assert_eq!(
            TrackConfig::new(Vec2::ZERO, 164.0, 208.0, 13.0, 360.0).unwrap_err(),
            ConfigError::StartAngleOutOfRange(360.0)
        );
        assert!(TrackConfig::new(Vec2::ZERO, 164.0, 208.0, 13.0, -1.0).is_err());
        assert!(TrackConfig::new(Vec2::ZERO, 164.0, 208.0, 13.0, f32::NAN).is_err());
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        assert_eq!(
            TrackConfig::new(Vec2::ZERO, 164.0, 208.0, 0.0, 90.0).unwrap_err(),
            ConfigError::NonFiniteValue("ball_radius")
        );
        assert!(TrackConfig::new(Vec2::new(f32::INFINITY, 0.0), 164.0, 208.0, 13.0, 90.0).is_err());
    }

    #[test]
    fn test_from_viewport_picks_layout() {
        let settings = GameSettings::default();

        let wide = TrackConfig::from_viewport(&settings, 1280.0, 800.0).unwrap();
        assert_eq!(wide.center(), Vec2::new(640.0, 400.0));
        assert_eq!(wide.inner_radius(), 164.0);
        assert_eq!(wide.outer_radius(), 208.0);

        let narrow = TrackConfig::from_viewport(&settings, 390.0, 844.0).unwrap();
        assert_eq!(narrow.inner_radius(), 120.0);
        assert_eq!(narrow.outer_radius(), 160.0);
        assert_eq!(narrow.ball_radius(), 13.0);

        assert!(matches!(
            TrackConfig::from_viewport(&settings, 0.0, 800.0),
            Err(ConfigError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_start_line_endpoints() {
        let t = desktop();
        let (inner, outer) = t.start_line();
        assert!((inner.y - (400.0 + 164.0)).abs() < 1e-3);
        assert!((outer.y - (400.0 + 208.0)).abs() < 1e-3);
    }
}
