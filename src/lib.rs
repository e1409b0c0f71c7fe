//! Ring Runner - drag a ball once around a ring without touching the walls
//!
//! Core modules:
//! - `sim`: Motion, collision and progress core (pure, single-threaded)
//! - `timer`: Stopwatch collaborator and the timer control contract
//! - `sink`: Presentation / run-completion sinks fed from sim events
//! - `settings`: Data-driven track layouts and motion tuning
//! - `autopilot`: Scripted pointer paths for the headless demo

pub mod autopilot;
pub mod error;
pub mod settings;
pub mod sim;
pub mod sink;
pub mod timer;

pub use error::{ConfigError, SettingsError};
pub use settings::GameSettings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Desktop track (inner/outer circle radii in pixels)
    pub const DESKTOP_INNER_RADIUS: f32 = 164.0;
    pub const DESKTOP_OUTER_RADIUS: f32 = 208.0;

    /// Mobile track, used below the breakpoint
    pub const MOBILE_INNER_RADIUS: f32 = 120.0;
    pub const MOBILE_OUTER_RADIUS: f32 = 160.0;

    /// Viewports narrower than this use the mobile layout
    pub const MOBILE_BREAKPOINT: f32 = 768.0;

    pub const BALL_RADIUS: f32 = 13.0;

    /// Start line angle (degrees, screen space: 90 is straight down)
    pub const START_ANGLE_DEGREES: f32 = 90.0;

    /// Release animation: degrees rewound per frame
    pub const RELEASE_STEP_DEGREES: f32 = 3.0;
    /// Release animation snaps onto the start line inside this band
    pub const SNAP_TOLERANCE_DEGREES: f32 = 3.0;

    /// A full revolution
    pub const FULL_TURN_DEGREES: f32 = 360.0;

    /// Stopwatch resolution
    pub const STOPWATCH_TICK_MS: u64 = 10;

    /// Magnifier preview
    pub const MAGNIFIER_ZOOM: f32 = 2.5;
    pub const MAGNIFIER_SIZE_DESKTOP: f32 = 150.0;
    pub const MAGNIFIER_SIZE_MOBILE: f32 = 120.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= consts::FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Convert polar (r, degrees) around `center` to a screen point
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert a screen point to polar (r, degrees in [0, 360)) around `center`
///
/// The angle is computed in f64 and rounded once, so points on the axes
/// come back as exact multiples of 90.
#[inline]
pub fn cartesian_to_polar(center: Vec2, pos: Vec2) -> (f32, f32) {
    let d = pos - center;
    let degrees = (d.y as f64).atan2(d.x as f64).to_degrees() as f32;
    (d.length(), normalize_degrees(degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-4);
        assert!(normalize_degrees(-1.0e-9) < 360.0);
    }

    #[test]
    fn test_polar_roundtrip_screen_space() {
        let center = Vec2::new(400.0, 300.0);
        // 90 degrees points down the screen (y grows downward)
        let p = polar_to_cartesian(center, 100.0, 90.0);
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 400.0).abs() < 1e-3);

        let (r, deg) = cartesian_to_polar(center, p);
        assert!((r - 100.0).abs() < 1e-3);
        assert!((deg - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_axis_points_give_exact_angles() {
        let center = Vec2::new(640.0, 400.0);
        assert_eq!(cartesian_to_polar(center, center + Vec2::new(186.0, 0.0)).1, 0.0);
        assert_eq!(cartesian_to_polar(center, center + Vec2::new(0.0, 186.0)).1, 90.0);
        assert_eq!(cartesian_to_polar(center, center + Vec2::new(-186.0, 0.0)).1, 180.0);
        assert_eq!(cartesian_to_polar(center, center + Vec2::new(0.0, -186.0)).1, 270.0);
    }
}
