//! Top-level wiring: window, simulated tracker, pipeline, drum kit.
//!
//! The window's key events feed the [`SimTracker`] over one channel; the
//! tracker's pose/geometry events feed the [`DrumPipeline`] over another.
//! Everything that touches classifier state happens on this thread, in
//! event order.

use std::sync::mpsc::{self, TryRecvError};

use drum_core::{
    DrumConfig, DrumPipeline, NullDiagnostics, Quadrant, StderrDiagnostics,
    TrackerEvent, spawn_tracker_source,
};

use crate::sim::{SimInput, SimTracker};
use crate::sound::DrumKit;
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// SimConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full simulator.
pub struct SimConfig {
    pub drum:  DrumConfig,
    /// Route pipeline diagnostics to stderr.
    pub debug: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            drum:  DrumConfig::default(),
            debug: false,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the simulator.
///
/// This is the entry point called from `main.rs`. It creates the window,
/// the simulated tracker, the MIDI drum kit, and drives the
/// event/render loop at ~60 fps.
pub fn run(cfg: SimConfig) -> Result<(), String> {
    // ── Sim input channel ─────────────────────────────────────────────────
    let (sim_tx, sim_rx) = mpsc::channel::<SimInput>();
    let tracker_rx = spawn_tracker_source(SimTracker::new(sim_rx));

    // ── Visualizer (owns the window and the sim input sender) ────────────
    let mut vis = Visualizer::new(sim_tx)?;

    // ── Pipeline + kit ────────────────────────────────────────────────────
    let mut pipeline = if cfg.debug {
        DrumPipeline::with_diagnostics(cfg.drum, Box::new(StderrDiagnostics))
    } else {
        DrumPipeline::with_diagnostics(cfg.drum, Box::new(NullDiagnostics))
    };
    let mut kit = DrumKit::open();

    let mut status = String::from("Ready — steer with the arrow keys");

    // ── Main loop ─────────────────────────────────────────────────────────
    while vis.is_open() {
        // 1. Poll window input → SimInput for the tracker thread
        if !vis.poll_input() { break; }

        // 2. Drain tracker events through the pipeline
        loop {
            match tracker_rx.try_recv() {
                Ok(TrackerEvent::Shutdown) => return Ok(()),
                Ok(event) => {
                    let fired = pipeline.handle_event(event, &mut kit);
                    let p = pipeline.projected_point();
                    let q = pipeline.current_quadrant();
                    if fired && q != Quadrant::None {
                        status = format!(
                            "STRIKE {}  x={:+.3} y={:+.3}", q.label(), p.x, p.y,
                        );
                    } else if fired {
                        status = format!("center  x={:+.3} y={:+.3}", p.x, p.y);
                    } else {
                        status = format!(
                            "{}  x={:+.3} y={:+.3}", q.label(), p.x, p.y,
                        );
                    }
                }
                Err(TryRecvError::Empty)        => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        // 3. Render
        vis.render(&pipeline, &status);
    }

    Ok(())
}
