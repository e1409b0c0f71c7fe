//! Motion, collision and progress core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No wall-clock reads (the release animation advances per frame)
//! - No rendering or platform dependencies
//! - Outbound effects only through queued `GameEvent`s and `TimerControl`

pub mod collision;
pub mod controller;
pub mod geometry;
pub mod magnifier;
pub mod progress;
pub mod release;
pub mod state;
pub mod track;

pub use collision::{Boundary, CollisionResult, check_boundary};
pub use controller::{MotionController, MotionTuning, MoveOutcome};
pub use geometry::{
    angle_of, clamp_to_annulus, distance_of, signed_angular_delta, would_cross_start_backward,
};
pub use magnifier::{MagnifierSettings, MagnifierView};
pub use progress::{ProgressState, ProgressTracker, ProgressUpdate, ReleaseDirection};
pub use release::{AnimationState, FixedFrames, FrameTicker, ReleaseTuning};
pub use state::{BallColor, BallFrame, BallState, GameEvent, GamePhase, RunResult};
pub use track::TrackConfig;
