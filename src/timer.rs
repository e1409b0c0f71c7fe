//! Elapsed-time collaborator
//!
//! The motion core only issues control signals to the clock and reads the
//! elapsed time once, when a lap completes. The stopwatch itself is an
//! independent fixed-interval ticker owned by the host loop.

use serde::{Deserialize, Serialize};

use crate::consts::STOPWATCH_TICK_MS;

/// Proof that a reset has been fully applied
///
/// The controller takes this by value before starting a new run, so a run
/// can never begin on top of a half-reset clock.
#[must_use = "a new run may only start after the reset is acknowledged"]
#[derive(Debug, PartialEq, Eq)]
pub struct ResetAck(());

impl ResetAck {
    /// For `TimerControl` implementors, once their reset has been applied
    pub fn acknowledge() -> Self {
        ResetAck(())
    }
}

/// Control surface the motion controller drives
pub trait TimerControl {
    fn start(&mut self);
    fn pause_resume(&mut self);
    fn stop(&mut self);
    /// Zero the clock. Returns only once the reset is applied.
    fn reset(&mut self) -> ResetAck;
    fn is_active(&self) -> bool;
    fn elapsed_ms(&self) -> u64;
}

/// Fixed-resolution stopwatch (10 ms ticks by default)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwatch {
    active: bool,
    paused: bool,
    elapsed_ms: u64,
    tick_ms: u64,
    /// Sub-tick remainder carried between `advance` calls
    #[serde(skip)]
    carry_ms: u64,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new(STOPWATCH_TICK_MS)
    }
}

impl Stopwatch {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            active: false,
            paused: true,
            elapsed_ms: 0,
            tick_ms: tick_ms.max(1),
            carry_ms: 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// One interval of the periodic task
    pub fn tick(&mut self) {
        if self.active && !self.paused {
            self.elapsed_ms += self.tick_ms;
        }
    }

    /// Feed wall time; runs as many whole ticks as fit
    pub fn advance(&mut self, ms: u64) {
        self.carry_ms += ms;
        while self.carry_ms >= self.tick_ms {
            self.carry_ms -= self.tick_ms;
            self.tick();
        }
    }

    /// `mm:ss.cc` readout
    pub fn display(&self) -> String {
        format_stopwatch(self.elapsed_ms)
    }
}

impl TimerControl for Stopwatch {
    fn start(&mut self) {
        self.active = true;
        self.paused = false;
    }

    fn pause_resume(&mut self) {
        self.paused = !self.paused;
    }

    fn stop(&mut self) {
        self.active = false;
        self.paused = true;
    }

    fn reset(&mut self) -> ResetAck {
        self.active = false;
        self.elapsed_ms = 0;
        self.carry_ms = 0;
        ResetAck::acknowledge()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

/// Format milliseconds as `mm:ss.cc` (minutes wrap at an hour)
pub fn format_stopwatch(ms: u64) -> String {
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1000) % 60;
    let centis = (ms / 10) % 100;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_only_while_running() {
        let mut sw = Stopwatch::default();
        sw.tick();
        assert_eq!(sw.elapsed_ms(), 0);

        sw.start();
        sw.tick();
        sw.tick();
        assert_eq!(sw.elapsed_ms(), 20);

        sw.pause_resume();
        assert!(sw.is_paused());
        sw.tick();
        assert_eq!(sw.elapsed_ms(), 20);

        sw.pause_resume();
        sw.tick();
        assert_eq!(sw.elapsed_ms(), 30);

        sw.stop();
        assert!(!sw.is_active());
        sw.tick();
        assert_eq!(sw.elapsed_ms(), 30);
    }

    #[test]
    fn test_advance_carries_remainder() {
        let mut sw = Stopwatch::default();
        sw.start();
        sw.advance(16);
        assert_eq!(sw.elapsed_ms(), 10);
        sw.advance(16);
        assert_eq!(sw.elapsed_ms(), 30);
        sw.advance(1000);
        assert_eq!(sw.elapsed_ms(), 1030);
    }

    #[test]
    fn test_reset_zeroes_and_deactivates() {
        let mut sw = Stopwatch::default();
        sw.start();
        sw.advance(500);
        let ack = sw.reset();
        assert_eq!(ack, ResetAck::acknowledge());
        assert_eq!(sw.elapsed_ms(), 0);
        assert!(!sw.is_active());
    }

    #[test]
    fn test_format_stopwatch() {
        assert_eq!(format_stopwatch(0), "00:00.00");
        assert_eq!(format_stopwatch(61_230), "01:01.23");
        assert_eq!(format_stopwatch(3_600_000 + 5_000), "00:05.00");
    }
}
