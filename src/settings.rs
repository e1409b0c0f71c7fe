//! Game settings
//!
//! Track layouts and motion tuning, loaded from a JSON file. Every field has
//! a default, so a file only needs to list what it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, SettingsError};
use crate::sim::{MagnifierSettings, MotionTuning, ReleaseTuning};
use crate::timer::Stopwatch;

/// Circle radii for one screen class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Magnifier window edge length
    pub magnifier_size: f32,
}

impl TrackLayout {
    pub fn desktop() -> Self {
        Self {
            inner_radius: DESKTOP_INNER_RADIUS,
            outer_radius: DESKTOP_OUTER_RADIUS,
            magnifier_size: MAGNIFIER_SIZE_DESKTOP,
        }
    }

    pub fn mobile() -> Self {
        Self {
            inner_radius: MOBILE_INNER_RADIUS,
            outer_radius: MOBILE_OUTER_RADIUS,
            magnifier_size: MAGNIFIER_SIZE_MOBILE,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    // === Track ===
    pub desktop: TrackLayout,
    pub mobile: TrackLayout,
    /// Viewports narrower than this use the mobile layout
    pub mobile_breakpoint: f32,
    pub ball_radius: f32,
    pub start_angle_degrees: f32,

    // === Motion ===
    pub release_step_degrees: f32,
    pub snap_tolerance_degrees: f32,
    pub magnifier_zoom: f32,

    // === Clock ===
    pub stopwatch_tick_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            desktop: TrackLayout::desktop(),
            mobile: TrackLayout::mobile(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
            ball_radius: BALL_RADIUS,
            start_angle_degrees: START_ANGLE_DEGREES,

            release_step_degrees: RELEASE_STEP_DEGREES,
            snap_tolerance_degrees: SNAP_TOLERANCE_DEGREES,
            magnifier_zoom: MAGNIFIER_ZOOM,

            stopwatch_tick_ms: STOPWATCH_TICK_MS,
        }
    }
}

impl GameSettings {
    pub fn is_mobile(&self, viewport_width: f32) -> bool {
        viewport_width < self.mobile_breakpoint
    }

    pub fn layout_for_width(&self, viewport_width: f32) -> TrackLayout {
        if self.is_mobile(viewport_width) {
            self.mobile
        } else {
            self.desktop
        }
    }

    /// Motion tuning for a viewport (magnifier size follows the layout)
    pub fn motion_tuning(&self, viewport_width: f32) -> MotionTuning {
        MotionTuning {
            release: ReleaseTuning {
                step_degrees: self.release_step_degrees,
                snap_tolerance_degrees: self.snap_tolerance_degrees,
            },
            magnifier: MagnifierSettings {
                size: self.layout_for_width(viewport_width).magnifier_size,
                zoom: self.magnifier_zoom,
            },
        }
    }

    /// Check the motion tuning of both layouts
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion_tuning(0.0).validate()?;
        self.motion_tuning(f32::INFINITY).validate()
    }

    /// Fresh stopwatch at the configured resolution
    pub fn stopwatch(&self) -> Stopwatch {
        Stopwatch::new(self.stopwatch_tick_ms)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
