//! Outbound collaborators
//!
//! The controller queues `GameEvent`s; `dispatch` routes them to whatever
//! presentation and leaderboard hooks the host provides.

use crate::sim::{BallFrame, GameEvent, GamePhase, MagnifierView, RunResult};

/// Receives every ball update
pub trait PresentationSink {
    fn present(&mut self, frame: &BallFrame);

    /// Zoomed preview, only sent while dragging
    fn present_magnified(&mut self, _view: &MagnifierView) {}

    fn phase_changed(&mut self, _from: GamePhase, _to: GamePhase) {}
}

/// Receives the score of each completed lap
pub trait RunCompletionSink {
    fn run_completed(&mut self, result: &RunResult);
}

/// Route drained events to their sinks
pub fn dispatch<P, R>(events: impl IntoIterator<Item = GameEvent>, presentation: &mut P, completion: &mut R)
where
    P: PresentationSink + ?Sized,
    R: RunCompletionSink + ?Sized,
{
    for event in events {
        match event {
            GameEvent::Frame(frame) => presentation.present(&frame),
            GameEvent::Magnified(view) => presentation.present_magnified(&view),
            GameEvent::PhaseChanged { from, to } => presentation.phase_changed(from, to),
            GameEvent::RunCompleted(result) => completion.run_completed(&result),
        }
    }
}

/// Route drained events to one object that handles both sides
pub fn dispatch_all<S>(events: impl IntoIterator<Item = GameEvent>, sink: &mut S)
where
    S: PresentationSink + RunCompletionSink + ?Sized,
{
    for event in events {
        match event {
            GameEvent::Frame(frame) => sink.present(&frame),
            GameEvent::Magnified(view) => sink.present_magnified(&view),
            GameEvent::PhaseChanged { from, to } => sink.phase_changed(from, to),
            GameEvent::RunCompleted(result) => sink.run_completed(&result),
        }
    }
}

/// Sink that writes everything to the log (headless hosts)
#[derive(Debug, Default)]
pub struct LogSink {
    pub frames: u64,
    pub results: Vec<RunResult>,
}

impl PresentationSink for LogSink {
    fn present(&mut self, frame: &BallFrame) {
        self.frames += 1;
        log::trace!(
            "ball ({:.1}, {:.1}) {:.1} deg {} {:?}",
            frame.pos.x,
            frame.pos.y,
            frame.angle,
            frame.color.as_str(),
            frame.phase
        );
    }

    fn phase_changed(&mut self, from: GamePhase, to: GamePhase) {
        log::info!("{:?} -> {:?}", from, to);
    }
}

impl RunCompletionSink for LogSink {
    fn run_completed(&mut self, result: &RunResult) {
        log::info!("Run completed in {}", result.display());
        self.results.push(*result);
    }
}
