//! Release (snap-back) animation
//!
//! When the player lets go mid-track, or hits a wall, the ball rewinds
//! counter-clockwise along its current radius until it reaches the start
//! line. The animation is a plain state machine advanced once per frame by
//! whoever owns the frame clock; it never looks at wall time.
//!
//! Each step rewinds a fixed number of degrees. Once the ball is within the
//! snap band of the target it lands exactly on the target and the animation
//! finishes. With step <= 2 * tolerance the band cannot be stepped over, so
//! the animation always terminates within one turn.

use serde::{Deserialize, Serialize};

use super::geometry::signed_angular_delta;
use crate::consts::{FULL_TURN_DEGREES, RELEASE_STEP_DEGREES, SNAP_TOLERANCE_DEGREES};
use crate::error::ConfigError;
use crate::normalize_degrees;

/// Step size and snap band for the release animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReleaseTuning {
    pub step_degrees: f32,
    pub snap_tolerance_degrees: f32,
}

impl Default for ReleaseTuning {
    fn default() -> Self {
        Self {
            step_degrees: RELEASE_STEP_DEGREES,
            snap_tolerance_degrees: SNAP_TOLERANCE_DEGREES,
        }
    }
}

impl ReleaseTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.step_degrees;
        let tolerance = self.snap_tolerance_degrees;
        if !(step.is_finite() && tolerance.is_finite())
            || step <= 0.0
            || tolerance <= 0.0
            || step > 2.0 * tolerance
        {
            return Err(ConfigError::InvalidReleaseStep { step, tolerance });
        }
        Ok(())
    }
}

/// Per-frame rewind toward the start line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub active: bool,
    pub current_angle: f32,
    pub target_angle: f32,
    /// Radius the ball travels along while rewinding
    pub radius: f32,
    tuning: ReleaseTuning,
}

impl AnimationState {
    /// A finished animation resting on `target_angle`
    pub fn idle(target_angle: f32, radius: f32, tuning: ReleaseTuning) -> Self {
        Self {
            active: false,
            current_angle: target_angle,
            target_angle,
            radius,
            tuning,
        }
    }

    /// Begin rewinding from `from_angle` on `radius`
    pub fn start(&mut self, from_angle: f32, radius: f32) {
        self.active = true;
        self.current_angle = normalize_degrees(from_angle);
        self.radius = radius;
    }

    /// Stop without reaching the target (a new drag grabbed the ball)
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Advance one frame. Returns the new angle, or `None` if not running.
    pub fn step(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }

        let mut angle = self.current_angle - self.tuning.step_degrees;
        if angle < 0.0 {
            angle += FULL_TURN_DEGREES;
        }

        // Distance still to go, measured the same way in either direction
        let remaining = signed_angular_delta(angle, self.target_angle).abs();
        if remaining <= self.tuning.snap_tolerance_degrees {
            angle = self.target_angle;
            self.active = false;
        }

        self.current_angle = angle;
        Some(angle)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        !self.active
    }
}

/// Source of frame ticks for the release animation
///
/// Real hosts hook this to their per-frame callback; tests drive it by hand.
pub trait FrameTicker {
    /// Returns true while another frame should be produced
    fn next_frame(&mut self) -> bool;
}

/// Ticks a fixed number of frames then stops
#[derive(Debug, Clone)]
pub struct FixedFrames {
    remaining: u32,
}

impl FixedFrames {
    pub fn new(frames: u32) -> Self {
        Self { remaining: frames }
    }
}

impl FrameTicker for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anim() -> AnimationState {
        AnimationState::idle(90.0, 186.0, ReleaseTuning::default())
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut a = anim();
        assert!(a.is_finished());
        assert_eq!(a.step(), None);
    }

    #[test]
    fn test_rewinds_and_snaps() {
        let mut a = anim();
        a.start(120.0, 180.0);
        assert!(!a.is_finished());

        let mut frames = 0;
        let mut last = 120.0;
        while let Some(angle) = a.step() {
            frames += 1;
            last = angle;
            assert!(frames < 200);
        }
        assert_eq!(last, 90.0);
        assert_eq!(a.current_angle, 90.0);
        assert_eq!(a.radius, 180.0);
        // Ninth step lands on 93, inside the band
        assert_eq!(frames, 9);
    }

    #[test]
    fn test_rewinds_through_seam() {
        let mut a = anim();
        // Almost a full lap: rewinds counter-clockwise all the way round
        a.start(80.0, 186.0);
        let mut frames = 0;
        while a.step().is_some() {
            frames += 1;
        }
        assert_eq!(a.current_angle, 90.0);
        assert!(frames > 100);
    }

    #[test]
    fn test_start_on_target_finishes_next_frame() {
        let mut a = anim();
        a.start(90.0, 186.0);
        // 90 - 3 = 87, exactly on the band edge
        assert_eq!(a.step(), Some(90.0));
        assert!(a.is_finished());
    }

    #[test]
    fn test_cancel_stops_midway() {
        let mut a = anim();
        a.start(200.0, 186.0);
        a.step();
        a.cancel();
        assert!(a.is_finished());
        assert_eq!(a.step(), None);
        assert_eq!(a.current_angle, 197.0);
    }

    #[test]
    fn test_tuning_validation() {
        assert!(ReleaseTuning::default().validate().is_ok());
        let bad = ReleaseTuning {
            step_degrees: 10.0,
            snap_tolerance_degrees: 3.0,
        };
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidReleaseStep { .. })));
        let zero = ReleaseTuning {
            step_degrees: 0.0,
            snap_tolerance_degrees: 3.0,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_fixed_frames() {
        let mut ticker = FixedFrames::new(2);
        assert!(ticker.next_frame());
        assert!(ticker.next_frame());
        assert!(!ticker.next_frame());
    }
}
