//! End-to-end runs through the public API with a scripted clock

use glam::Vec2;

use ring_runner::autopilot::Autopilot;
use ring_runner::polar_to_cartesian;
use ring_runner::sim::{
    BallColor, Boundary, FixedFrames, GameEvent, GamePhase, MotionController, MoveOutcome,
    RunResult, TrackConfig,
};
use ring_runner::sink::{PresentationSink, RunCompletionSink, dispatch};
use ring_runner::sim::{BallFrame, MagnifierView};
use ring_runner::timer::{ResetAck, TimerControl};

const CENTER: Vec2 = Vec2::new(640.0, 400.0);

/// Clock that records every control call and reports a settable time
#[derive(Debug, Default)]
struct FakeClock {
    calls: Vec<&'static str>,
    active: bool,
    elapsed_ms: u64,
}

impl TimerControl for FakeClock {
    fn start(&mut self) {
        self.calls.push("start");
        self.active = true;
    }

    fn pause_resume(&mut self) {
        self.calls.push("pause_resume");
    }

    fn stop(&mut self) {
        self.calls.push("stop");
        self.active = false;
    }

    fn reset(&mut self) -> ResetAck {
        self.calls.push("reset");
        self.active = false;
        self.elapsed_ms = 0;
        ResetAck::acknowledge()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

#[derive(Default)]
struct Screen {
    frames: Vec<BallFrame>,
    magnified: Vec<MagnifierView>,
}

impl PresentationSink for Screen {
    fn present(&mut self, frame: &BallFrame) {
        self.frames.push(*frame);
    }

    fn present_magnified(&mut self, view: &MagnifierView) {
        self.magnified.push(*view);
    }
}

#[derive(Default)]
struct Leaderboard {
    results: Vec<RunResult>,
}

impl RunCompletionSink for Leaderboard {
    fn run_completed(&mut self, result: &RunResult) {
        self.results.push(*result);
    }
}

fn controller() -> MotionController<FakeClock> {
    let track = TrackConfig::new(CENTER, 164.0, 208.0, 13.0, 90.0).unwrap();
    MotionController::new(track, FakeClock::default())
}

/// Exact axis-aligned pointer positions on the mid-line
fn axis_point(deg: u32) -> Vec2 {
    let r = 186.0;
    match deg % 360 {
        0 => CENTER + Vec2::new(r, 0.0),
        90 => CENTER + Vec2::new(0.0, r),
        180 => CENTER + Vec2::new(-r, 0.0),
        270 => CENTER + Vec2::new(0.0, -r),
        _ => unreachable!("axis angles only"),
    }
}

#[test]
fn test_full_lap_in_quarter_turns_completes_on_return_to_start() {
    let mut c = controller();
    c.drag_start();
    assert_eq!(c.timer().calls, vec!["reset", "start"]);

    assert_eq!(c.drag_move(axis_point(180)), MoveOutcome::Moved);
    assert_eq!(c.drag_move(axis_point(270)), MoveOutcome::Moved);
    assert_eq!(c.drag_move(axis_point(360)), MoveOutcome::Moved);
    assert_eq!(c.phase(), GamePhase::Running);

    c.timer_mut().elapsed_ms = 12_340;
    let outcome = c.drag_move(axis_point(90));
    assert_eq!(outcome, MoveOutcome::Completed(RunResult::new(12_340)));
    assert_eq!(c.phase(), GamePhase::Completed);
    assert!((c.progress().cumulative_rotation - 360.0).abs() < 1e-2);
    assert_eq!(c.timer().calls, vec!["reset", "start", "stop"]);

    // Nothing more from the pointer once the lap is done
    assert_eq!(c.drag_move(axis_point(180)), MoveOutcome::Ignored);
    assert!(!c.drag_end());
}

#[test]
fn test_completion_reported_exactly_once() {
    let mut c = controller();
    c.drag_start();
    for deg in [180, 270, 360, 90] {
        c.drag_move(axis_point(deg));
    }
    c.drag_move(axis_point(180));
    c.drag_end();

    let mut screen = Screen::default();
    let mut board = Leaderboard::default();
    dispatch(c.drain_events(), &mut screen, &mut board);
    assert_eq!(board.results.len(), 1);
    assert_eq!(screen.frames.last().map(|f| f.phase), Some(GamePhase::Completed));
}

#[test]
fn test_reaching_outer_circle_collides_and_never_completes() {
    let mut c = controller();
    c.drag_start();

    let outcome = c.drag_move(CENTER + Vec2::new(0.0, 208.0));
    assert_eq!(outcome, MoveOutcome::Collided(Boundary::Outer));
    assert_eq!(c.phase(), GamePhase::Collided);
    assert_eq!(c.ball().color, BallColor::Collided);
    assert!(!c.timer().is_active());

    // In-flight pointer events after the collision are stale
    for deg in [180, 270, 360, 90] {
        assert_eq!(c.drag_move(axis_point(deg)), MoveOutcome::Ignored);
    }
    c.run_release(&mut FixedFrames::new(500));

    let events = c.drain_events();
    assert!(!events.iter().any(|e| matches!(e, GameEvent::RunCompleted(_))));
    let collided_frame = events.iter().find_map(|e| match e {
        GameEvent::Frame(f) if f.phase == GamePhase::Collided => Some(*f),
        _ => None,
    });
    assert_eq!(collided_frame.map(|f| f.color), Some(BallColor::Collided));
}

#[test]
fn test_new_drag_after_collision_starts_from_zero() {
    let mut c = controller();
    c.drag_start();
    c.drag_move(polar_to_cartesian(CENTER, 186.0, 150.0));
    c.drag_move(polar_to_cartesian(CENTER, 100.0, 160.0));
    assert_eq!(c.phase(), GamePhase::Collided);
    assert!(c.progress().cumulative_rotation > 59.0);

    c.timer_mut().elapsed_ms = 5_000;
    c.drag_start();
    assert_eq!(c.phase(), GamePhase::Running);
    assert_eq!(c.progress().cumulative_rotation, 0.0);
    assert_eq!(c.progress().previous_angle, 90.0);
    assert_eq!(c.timer().elapsed_ms(), 0);
    assert_eq!(c.ball().color, BallColor::Normal);
    assert!(!c.is_releasing());

    let calls = &c.timer().calls;
    assert_eq!(&calls[calls.len() - 2..], &["reset", "start"]);

    assert_eq!(c.drag_move(polar_to_cartesian(CENTER, 186.0, 100.0)), MoveOutcome::Moved);
    assert!((c.progress().cumulative_rotation - 10.0).abs() < 1e-2);
}

#[test]
fn test_regrab_while_clock_running_restarts_run() {
    let mut c = controller();
    c.drag_start();
    c.timer_mut().elapsed_ms = 5_000;
    c.drag_move(polar_to_cartesian(CENTER, 186.0, 200.0));
    assert!(c.drag_end());
    assert!(c.timer().is_active());

    c.drag_start();
    assert_eq!(c.timer().calls, vec!["reset", "start", "reset", "start"]);
    assert_eq!(c.timer().elapsed_ms(), 0);
    assert_eq!(c.progress().cumulative_rotation, 0.0);
    assert_eq!(c.ball().angle, 90.0);
}

#[test]
fn test_backward_past_start_is_locked() {
    let mut c = controller();
    c.drag_start();
    c.drag_move(polar_to_cartesian(CENTER, 186.0, 93.0));
    let progress = *c.progress();

    for back in [89.0, 60.0, 10.0] {
        assert_eq!(
            c.drag_move(polar_to_cartesian(CENTER, 186.0, back)),
            MoveOutcome::Locked
        );
        assert_eq!(c.ball().angle, 90.0);
        assert_eq!(*c.progress(), progress);
    }
}

#[test]
fn test_release_then_regrab_continues_cleanly() {
    let mut c = controller();
    c.drag_start();
    c.drag_move(polar_to_cartesian(CENTER, 186.0, 140.0));
    assert!(c.drag_end());
    c.drain_events();

    let mut screen = Screen::default();
    let mut board = Leaderboard::default();
    let frames = c.run_release(&mut FixedFrames::new(1000));
    dispatch(c.drain_events(), &mut screen, &mut board);

    assert!(frames > 0);
    assert_eq!(c.ball().angle, 90.0);
    // Magnifier only while dragging: none during the release
    assert!(screen.magnified.is_empty());
    assert_eq!(screen.frames.len() as u32, frames);

    c.drag_start();
    assert!(c.magnified_view().is_some());
    assert_eq!(c.phase(), GamePhase::Running);
}

#[test]
fn test_steady_autopilot_completes_a_lap() {
    let mut c = controller();
    let track = *c.track();
    c.drag_start();

    let mut outcome = MoveOutcome::Ignored;
    for pointer in Autopilot::new(&track, 3, 3.0, 0.0) {
        outcome = c.drag_move(pointer);
        if outcome != MoveOutcome::Moved {
            break;
        }
    }
    assert!(matches!(outcome, MoveOutcome::Completed(_)));
    assert_eq!(c.phase(), GamePhase::Completed);
}

#[test]
fn test_shaky_autopilot_hits_a_wall() {
    let mut c = controller();
    let track = *c.track();
    c.drag_start();

    let mut outcome = MoveOutcome::Ignored;
    for pointer in Autopilot::new(&track, 11, 3.0, 40.0) {
        outcome = c.drag_move(pointer);
        if outcome != MoveOutcome::Moved {
            break;
        }
    }
    assert!(matches!(outcome, MoveOutcome::Collided(_)));
}

#[test]
fn test_dismiss_restores_idle_start() {
    let mut c = controller();
    c.drag_start();
    c.drag_move(CENTER + Vec2::new(0.0, 400.0));
    assert!(c.dismiss());
    assert_eq!(c.phase(), GamePhase::Idle);
    assert_eq!(c.ball().pos, c.track().start_position());
    assert_eq!(c.timer().elapsed_ms(), 0);
}
