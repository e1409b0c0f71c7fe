//! Motion controller
//!
//! Owns the ball, the run phase, the lap counter and the release animation,
//! and turns pointer drag events into state changes:
//!
//! - `drag_start`: reset the clock, zero progress, start a run
//! - `drag_move`: backward lock, then wall check, then progress
//! - `drag_end`: let go, ball rewinds to the start line
//! - `tick_frame`: advance the release animation by one frame
//!
//! Single-threaded and run-to-completion: each call finishes before the next
//! event is handled. Outbound events are queued and drained by the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Boundary, check_boundary};
use super::geometry::{angle_of, distance_of, signed_angular_delta, would_cross_start_backward};
use super::magnifier::{MagnifierSettings, MagnifierView};
use super::progress::{ProgressState, ProgressTracker};
use super::release::{AnimationState, FrameTicker, ReleaseTuning};
use super::state::{BallColor, BallFrame, BallState, GameEvent, GamePhase, RunResult};
use super::track::TrackConfig;
use crate::error::ConfigError;
use crate::timer::{ResetAck, TimerControl};

/// Knobs that shape motion but not the track itself
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionTuning {
    pub release: ReleaseTuning,
    pub magnifier: MagnifierSettings,
}

impl MotionTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.release.validate()?;
        if !self.magnifier.size.is_finite() || self.magnifier.size <= 0.0 {
            return Err(ConfigError::NonFiniteValue("magnifier.size"));
        }
        if !self.magnifier.zoom.is_finite() || self.magnifier.zoom <= 0.0 {
            return Err(ConfigError::NonFiniteValue("magnifier.zoom"));
        }
        Ok(())
    }
}

/// What a single drag-move did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Not dragging, or the run already ended
    Ignored,
    /// Backward push at the start line; ball pinned, progress untouched
    Locked,
    Moved,
    Collided(Boundary),
    Completed(RunResult),
}

/// Drag lifecycle and run phase for one ball on one track
#[derive(Debug)]
pub struct MotionController<T: TimerControl> {
    track: TrackConfig,
    tuning: MotionTuning,
    ball: BallState,
    phase: GamePhase,
    progress: ProgressTracker,
    release: AnimationState,
    timer: T,
    /// Result modal (collision or completion) is showing
    modal_open: bool,
    events: Vec<GameEvent>,
}

impl<T: TimerControl> MotionController<T> {
    /// Controller with default tuning
    pub fn new(track: TrackConfig, timer: T) -> Self {
        let tuning = MotionTuning::default();
        Self {
            track,
            tuning,
            ball: BallState::at_start(&track),
            phase: GamePhase::Idle,
            progress: ProgressTracker::new(track.start_angle()),
            release: AnimationState::idle(track.start_angle(), track.start_distance(), tuning.release),
            timer,
            modal_open: false,
            events: Vec::new(),
        }
    }

    /// Controller with validated custom tuning
    pub fn with_tuning(track: TrackConfig, tuning: MotionTuning, timer: T) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let mut controller = Self::new(track, timer);
        controller.tuning = tuning;
        controller.release = AnimationState::idle(track.start_angle(), track.start_distance(), tuning.release);
        Ok(controller)
    }

    /// Pointer grabbed the ball
    ///
    /// Always starts a fresh run: any running release is cancelled, the clock
    /// is reset (and the reset acknowledged) before progress is zeroed and the
    /// clock restarted. The ball is re-based onto the start line at its
    /// current radius.
    pub fn drag_start(&mut self) {
        if self.ball.dragging {
            log::warn!("drag start while already dragging, ignored");
            return;
        }

        if !self.release.is_finished() {
            log::debug!("drag start cancels release at {:.1} deg", self.release.current_angle);
            self.release.cancel();
        }

        let ack = self.timer.reset();
        self.begin_run(ack);
    }

    fn begin_run(&mut self, _reset: ResetAck) {
        self.progress.reset();

        let radius = self.ball.radial_distance;
        self.ball.place(&self.track, radius, self.track.start_angle());
        self.ball.color = BallColor::Normal;
        self.ball.dragging = true;
        self.modal_open = false;

        self.set_phase(GamePhase::Running);
        self.timer.start();
        self.emit_frame();
    }

    /// Pointer moved while holding the ball
    pub fn drag_move(&mut self, pointer: Vec2) -> MoveOutcome {
        if !self.ball.dragging || self.phase != GamePhase::Running {
            log::debug!("stale drag move in {:?}, ignored", self.phase);
            return MoveOutcome::Ignored;
        }

        let center = self.track.center();
        let start = self.track.start_angle();
        let proposed = angle_of(pointer, center);
        let raw_distance = distance_of(pointer, center);

        // Forward-only: pulling back over the start line pins the ball there
        if would_cross_start_backward(self.ball.angle, proposed, start) {
            log::debug!("backward lock: {:.1} -> {:.1} deg", self.ball.angle, proposed);
            self.ball.pos = self.track.start_line_point(self.ball.radial_distance);
            self.ball.angle = start;
            self.emit_frame();
            return MoveOutcome::Locked;
        }

        self.progress
            .record_direction(signed_angular_delta(proposed, self.ball.angle));
        let clamped = self.track.clamp_distance(raw_distance);

        let collision = check_boundary(raw_distance, &self.track);
        if let Some(boundary) = collision.boundary {
            self.timer.stop();
            self.ball.dragging = false;
            self.ball.color = BallColor::Collided;
            self.ball.place(&self.track, clamped, proposed);
            self.modal_open = true;
            log::info!(
                "Hit {:?} wall at {:.1} deg (penetration {:.2})",
                boundary,
                proposed,
                collision.penetration
            );
            self.set_phase(GamePhase::Collided);

            // Same snap-back as a voluntary release
            self.release.start(self.ball.angle, self.ball.radial_distance);
            self.emit_frame();
            return MoveOutcome::Collided(boundary);
        }

        let update = self.progress.update(proposed);
        self.ball.place(&self.track, clamped, proposed);

        if update.completed {
            self.timer.stop();
            self.ball.dragging = false;
            self.modal_open = true;
            let result = RunResult::new(self.timer.elapsed_ms());
            log::info!(
                "Lap complete in {} ({:.1} deg)",
                result.display(),
                update.cumulative_rotation
            );
            self.set_phase(GamePhase::Completed);
            self.emit_frame();
            self.events.push(GameEvent::RunCompleted(result));
            return MoveOutcome::Completed(result);
        }

        self.emit_frame();
        MoveOutcome::Moved
    }

    /// Pointer let go of the ball
    ///
    /// Returns true if a release animation was started. After a collision the
    /// snap-back is already running and this only clears the drag flag.
    pub fn drag_end(&mut self) -> bool {
        if !self.ball.dragging {
            log::debug!("drag end without drag, ignored");
            return false;
        }
        self.ball.dragging = false;

        if self.phase.is_terminal() {
            return false;
        }

        log::debug!(
            "released at {:.1} deg after {:.1} deg of progress",
            self.ball.angle,
            self.progress.cumulative_rotation()
        );
        self.release.start(self.ball.angle, self.ball.radial_distance);
        self.emit_frame();
        true
    }

    /// Advance the release animation by one frame
    ///
    /// Returns true if the ball moved. Game phase is never changed here.
    pub fn tick_frame(&mut self) -> bool {
        let Some(angle) = self.release.step() else {
            return false;
        };

        let radius = self.release.radius;
        self.ball.place(&self.track, radius, angle);
        if self.release.is_finished() {
            log::debug!("release settled on start line");
        }
        self.emit_frame();
        true
    }

    /// Drive the release animation from a frame source until it settles or the source stops
    pub fn run_release(&mut self, ticker: &mut impl FrameTicker) -> u32 {
        let mut frames = 0;
        while self.is_releasing() && ticker.next_frame() {
            self.tick_frame();
            frames += 1;
        }
        frames
    }

    /// Leave a collided/completed run and go back to Idle
    ///
    /// Returns false (and does nothing) if the run has not ended.
    pub fn dismiss(&mut self) -> bool {
        if !self.phase.is_terminal() {
            log::warn!("dismiss in {:?}, ignored", self.phase);
            return false;
        }

        self.release.cancel();
        // Back to a zeroed clock; the next run starts from drag_start
        let _ack = self.timer.reset();
        self.progress.reset();
        self.ball = BallState::at_start(&self.track);
        self.modal_open = false;
        self.set_phase(GamePhase::Idle);
        self.emit_frame();
        true
    }

    /// Hide the result modal without restarting
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    fn emit_frame(&mut self) {
        self.events
            .push(GameEvent::Frame(BallFrame::new(&self.ball, self.phase)));
        if let Some(view) = self.magnified_view() {
            self.events.push(GameEvent::Magnified(view));
        }
    }

    /// Zoomed preview, only while the ball is held
    pub fn magnified_view(&self) -> Option<MagnifierView> {
        self.ball
            .dragging
            .then(|| MagnifierView::project(&self.track, &self.ball, &self.tuning.magnifier))
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn progress(&self) -> &ProgressState {
        self.progress.state()
    }

    pub fn track(&self) -> &TrackConfig {
        &self.track
    }

    pub fn is_releasing(&self) -> bool {
        !self.release.is_finished()
    }

    pub fn release(&self) -> &AnimationState {
        &self.release
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Host access for the clock's own periodic tick
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
