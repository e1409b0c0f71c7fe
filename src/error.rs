//! Error types
//!
//! Only configuration can fail. Once a run starts, every input is clamped or
//! ignored; nothing in the motion core returns an error.

use thiserror::Error;

/// Rejected track geometry or motion tuning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The ball cannot fit between the two circles.
    #[error(
        "degenerate track: inner {inner} + ball {ball} must be below outer {outer} - ball {ball}"
    )]
    DegenerateAnnulus { inner: f32, outer: f32, ball: f32 },

    #[error("start angle must be in [0, 360), got {0}")]
    StartAngleOutOfRange(f32),

    #[error("{0} must be finite and positive")]
    NonFiniteValue(&'static str),

    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// A step larger than the snap band could skip over the start line forever.
    #[error("release step {step} must be in (0, 2 * snap tolerance {tolerance}]")]
    InvalidReleaseStep { step: f32, tolerance: f32 },
}

/// Failure loading or saving a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(#[from] ConfigError),
}
