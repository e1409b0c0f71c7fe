//! Track geometry
//!
//! Pure helpers mapping a pointer to polar form around the track center:
//! - angle: degrees in [0, 360), screen space (y grows downward, so
//!   increasing angle is clockwise on screen)
//! - distance: Euclidean, never negative
//!
//! Everything downstream works on the shortest signed delta between two
//! angles, so the 0/360 seam never shows up as a 359 degree jump.

use glam::Vec2;

use crate::consts::FULL_TURN_DEGREES;

/// Angle of `point` around `center`, in [0, 360)
#[inline]
pub fn angle_of(point: Vec2, center: Vec2) -> f32 {
    crate::cartesian_to_polar(center, point).1
}

/// Distance of `point` from `center`
#[inline]
pub fn distance_of(point: Vec2, center: Vec2) -> f32 {
    point.distance(center)
}

/// Clamp a radial distance so the ball's circle stays inside the track
///
/// Output is always in `[inner + ball, outer - ball]`, including for
/// negative or huge inputs.
#[inline]
pub fn clamp_to_annulus(distance: f32, inner_radius: f32, outer_radius: f32, ball_radius: f32) -> f32 {
    let lo = inner_radius + ball_radius;
    let hi = outer_radius - ball_radius;
    distance.max(lo).min(hi)
}

/// Shortest signed rotation from `previous_angle` to `new_angle`, in (-180, 180]
///
/// A jump of exactly 180 is reported as +180. Larger jumps between two
/// samples read as the shorter way round.
#[inline]
pub fn signed_angular_delta(new_angle: f32, previous_angle: f32) -> f32 {
    let half = FULL_TURN_DEGREES / 2.0;
    let delta = (new_angle - previous_angle).rem_euclid(FULL_TURN_DEGREES);
    if delta > half {
        delta - FULL_TURN_DEGREES
    } else {
        delta
    }
}

/// Would moving from `current` to `proposed` drag the ball backward over the start line?
///
/// True when the move is backward (negative shortest delta), the ball is
/// currently on or ahead of the start line and the proposed angle is behind
/// it. "Ahead" and "behind" are signed offsets from `start`, so the test
/// holds across the 0/360 seam.
pub fn would_cross_start_backward(current: f32, proposed: f32, start: f32) -> bool {
    let moving_backward = signed_angular_delta(proposed, current) < 0.0;
    let current_offset = signed_angular_delta(current, start);
    let proposed_offset = signed_angular_delta(proposed, start);

    moving_backward && current_offset >= 0.0 && proposed_offset < 0.0
}

/// Point on the track at `distance` from `center` along `degrees`
#[inline]
pub fn point_on_track(center: Vec2, distance: f32, degrees: f32) -> Vec2 {
    crate::polar_to_cartesian(center, distance, degrees)
}
