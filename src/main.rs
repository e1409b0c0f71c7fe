//! Ring Runner headless demo
//!
//! Plays scripted laps against the motion core and prints each result.
//!
//! Usage: `ring-runner [settings.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use ring_runner::GameSettings;
    use ring_runner::autopilot::Autopilot;
    use ring_runner::sim::{FixedFrames, GamePhase, MotionController, MoveOutcome, TrackConfig};
    use ring_runner::sink::{LogSink, dispatch_all};
    use ring_runner::timer::Stopwatch;

    /// Simulated viewport
    const VIEWPORT: (f32, f32) = (1280.0, 800.0);
    /// One pointer sample per 60 Hz frame
    const FRAME_MS: u64 = 16;
    /// Upper bound on release animation frames
    const MAX_RELEASE_FRAMES: u32 = 1000;

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => GameSettings::load_or_default(path),
            None => GameSettings::default(),
        };
        let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

        let (width, height) = VIEWPORT;
        let track = match TrackConfig::from_viewport(&settings, width, height) {
            Ok(track) => track,
            Err(e) => {
                log::error!("Invalid track: {}", e);
                std::process::exit(1);
            }
        };
        let mut controller =
            match MotionController::with_tuning(track, settings.motion_tuning(width), settings.stopwatch()) {
                Ok(controller) => controller,
                Err(e) => {
                    log::error!("Invalid tuning: {}", e);
                    std::process::exit(1);
                }
            };

        let mut sink = LogSink::default();

        // A steady hand, then a shaky one
        for (label, jitter) in [("steady", 0.0), ("shaky", 12.0)] {
            let pilot = Autopilot::new(&track, seed, 3.0, jitter);
            let phase = play_lap(&mut controller, pilot, &mut sink);
            println!(
                "{label:>6}: {:?} after {} ({} frames so far)",
                phase,
                controller.timer().display(),
                sink.frames
            );
            if controller.phase().is_terminal() {
                controller.dismiss();
                dispatch_all(controller.drain_events(), &mut sink);
            }
        }

        for result in &sink.results {
            match serde_json::to_string(result) {
                Ok(json) => println!("{json}"),
                Err(e) => log::warn!("Could not encode result: {}", e),
            }
        }
    }

    fn play_lap(
        controller: &mut MotionController<Stopwatch>,
        pilot: Autopilot,
        sink: &mut LogSink,
    ) -> GamePhase {
        controller.drag_start();

        for pointer in pilot {
            controller.timer_mut().advance(FRAME_MS);
            let outcome = controller.drag_move(pointer);
            dispatch_all(controller.drain_events(), sink);
            if matches!(outcome, MoveOutcome::Collided(_) | MoveOutcome::Completed(_)) {
                break;
            }
        }

        controller.drag_end();
        let frames = controller.run_release(&mut FixedFrames::new(MAX_RELEASE_FRAMES));
        dispatch_all(controller.drain_events(), sink);
        log::debug!("release took {} frames", frames);

        controller.phase()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ring Runner (headless) starting...");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the library directly
}
