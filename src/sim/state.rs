//! Game state and core simulation types
//!
//! Everything here is owned by the motion controller. None of it is
//! persisted; a reload starts from `GamePhase::Idle`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::magnifier::MagnifierView;
use super::track::TrackConfig;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first drag
    #[default]
    Idle,
    /// Stopwatch running, ball on the track
    Running,
    /// Ball touched a wall (terminal until restart)
    Collided,
    /// Full lap done (terminal until restart)
    Completed,
}

impl GamePhase {
    /// Collided or Completed
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Collided | GamePhase::Completed)
    }
}

/// Ball fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallColor {
    #[default]
    Normal,
    Collided,
}

impl BallColor {
    /// CSS-ish name a renderer can use directly
    pub fn as_str(&self) -> &'static str {
        match self {
            BallColor::Normal => "blue",
            BallColor::Collided => "red",
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    /// Degrees in [0, 360)
    pub angle: f32,
    /// Clamped distance from the track center
    pub radial_distance: f32,
    pub color: BallColor,
    pub dragging: bool,
}

impl BallState {
    /// Ball resting on the start line at the track mid-line
    pub fn at_start(track: &TrackConfig) -> Self {
        Self {
            pos: track.start_position(),
            angle: track.start_angle(),
            radial_distance: track.start_distance(),
            color: BallColor::Normal,
            dragging: false,
        }
    }

    /// Move to `angle` at `distance` around the track center
    pub fn place(&mut self, track: &TrackConfig, distance: f32, angle: f32) {
        self.pos = super::geometry::point_on_track(track.center(), distance, angle);
        self.angle = angle;
        self.radial_distance = distance;
    }
}

/// Score for one completed lap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub elapsed_ms: u64,
}

impl RunResult {
    pub fn new(elapsed_ms: u64) -> Self {
        Self { elapsed_ms }
    }

    pub fn whole_seconds(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    /// Leaderboard format: `m:ss`
    pub fn display(&self) -> String {
        let secs = self.whole_seconds();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

/// Snapshot sent to the presentation layer on every update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallFrame {
    pub pos: Vec2,
    pub angle: f32,
    pub color: BallColor,
    pub phase: GamePhase,
}

impl BallFrame {
    pub fn new(ball: &BallState, phase: GamePhase) -> Self {
        Self {
            pos: ball.pos,
            angle: ball.angle,
            color: ball.color,
            phase,
        }
    }
}

/// Outbound events, drained by the host after each input
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Ball moved or changed color/phase
    Frame(BallFrame),
    /// Zoomed preview, only while dragging
    Magnified(MagnifierView),
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// Sent exactly once per Completed transition
    RunCompleted(RunResult),
}
