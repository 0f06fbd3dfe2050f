//! The pipeline: a single owner for all classifier state.
//!
//! One [`TrackerEvent`] in, one full synchronous recompute-and-dispatch
//! cycle out, on one logical thread. There is no ambient global — hosts
//! hold the `DrumPipeline` and feed it events in order, which preserves
//! the single-writer discipline without any locking.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use crate::calibration::{
    Calibration, HORIZONTAL_DEAD_SPACE_MULTIPLE, VERTICAL_DEAD_SPACE_MULTIPLE,
};
use crate::classifier::{classify, ClassifyMode, Quadrant};
use crate::diagnostics::{Diagnostics, NullDiagnostics};
use crate::dispatcher::{Dispatcher, PadBank};
use crate::pose::{PoseSample, TrackerEvent};
use crate::projector::{project, PointerConfig, ProjectedPoint};

// ════════════════════════════════════════════════════════════════════════════
// DrumConfig
// ════════════════════════════════════════════════════════════════════════════

/// The configuration profile that replaces the script-per-variant sprawl:
/// one struct selects projection constant, classification mode, dead-zone
/// multipliers, and the dwell guard.
#[derive(Clone, Copy, Debug)]
pub struct DrumConfig {
    pub pointer:             PointerConfig,
    pub mode:                ClassifyMode,
    pub horizontal_multiple: f32,
    pub vertical_multiple:   f32,
    /// Minimum time between fired transitions; `None` fires on every
    /// change like the reference variant.
    pub min_dwell:           Option<Duration>,
}

impl Default for DrumConfig {
    fn default() -> Self {
        DrumConfig {
            pointer:             PointerConfig::default(),
            mode:                ClassifyMode::GeometryRelative,
            horizontal_multiple: HORIZONTAL_DEAD_SPACE_MULTIPLE,
            vertical_multiple:   VERTICAL_DEAD_SPACE_MULTIPLE,
            min_dwell:           None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DrumPipeline
// ════════════════════════════════════════════════════════════════════════════

/// Owns calibration, the last projected point, and the dispatcher.
pub struct DrumPipeline {
    config:      DrumConfig,
    calibration: Calibration,
    projected:   ProjectedPoint,
    dispatcher:  Dispatcher,
    diagnostics: Box<dyn Diagnostics>,
}

impl DrumPipeline {
    pub fn new(config: DrumConfig) -> Self {
        DrumPipeline::with_diagnostics(config, Box::new(NullDiagnostics))
    }

    pub fn with_diagnostics(config: DrumConfig, diagnostics: Box<dyn Diagnostics>) -> Self {
        DrumPipeline {
            config,
            calibration: Calibration::new(
                config.horizontal_multiple,
                config.vertical_multiple,
            ),
            projected:   ProjectedPoint::default(),
            dispatcher:  Dispatcher::new(config.min_dwell),
            diagnostics,
        }
    }

    // ── accessors for the host render loop ──────────────────────────────

    pub fn calibration(&self)      -> &Calibration    { &self.calibration }
    pub fn projected_point(&self)  -> ProjectedPoint  { self.projected }
    pub fn current_quadrant(&self) -> Quadrant        { self.dispatcher.current() }
    pub fn config(&self)           -> &DrumConfig     { &self.config }

    // ── the update cycle ─────────────────────────────────────────────────

    /// Process one event end to end. Returns `true` when a pad transition
    /// fired.
    ///
    /// Geometry events rederive the dead zone and reclassify the last
    /// known point against the fresh calibration; a pose that fails to
    /// project logs and skips the cycle, leaving all state untouched.
    pub fn handle_event(&mut self, event: TrackerEvent, pads: &mut dyn PadBank) -> bool {
        match event {
            TrackerEvent::Pose(sample) => self.handle_pose(sample, pads),
            TrackerEvent::PlaneWidth(w) => {
                self.calibration.set_width(w);
                self.diagnostics.watch("focal plane width", w);
                self.reclassify(pads)
            }
            TrackerEvent::PlaneHeight(h) => {
                self.calibration.set_height(h);
                self.diagnostics.watch("focal plane height", h);
                self.reclassify(pads)
            }
            TrackerEvent::PlaneDistance(d) => {
                self.calibration.set_distance(d);
                self.diagnostics.watch("focal plane distance", d);
                false
            }
            TrackerEvent::Shutdown => false,
        }
    }

    /// Drain a receiver until it disconnects or sends `Shutdown`.
    /// Convenience for hosts without a render loop of their own.
    pub fn run(&mut self, rx: Receiver<TrackerEvent>, pads: &mut dyn PadBank) {
        for event in rx {
            if event == TrackerEvent::Shutdown {
                return;
            }
            self.handle_event(event, pads);
        }
    }

    fn handle_pose(&mut self, sample: PoseSample, pads: &mut dyn PadBank) -> bool {
        let point = match project(&sample, self.calibration.plane(), &self.config.pointer) {
            Some(p) => p,
            None => {
                self.diagnostics.log("degenerate pose sample, cycle skipped");
                return false;
            }
        };

        self.projected = point;
        self.diagnostics.watch("projected x", point.x);
        self.diagnostics.watch("projected y", point.y);
        self.classify_and_dispatch(point, pads)
    }

    fn reclassify(&mut self, pads: &mut dyn PadBank) -> bool {
        self.classify_and_dispatch(self.projected, pads)
    }

    fn classify_and_dispatch(&mut self, point: ProjectedPoint, pads: &mut dyn PadBank) -> bool {
        let quadrant = classify(point, &self.calibration, &self.config.mode);
        let fired = self.dispatcher.observe(quadrant, pads);
        if fired {
            self.diagnostics.log(&format!("strike: {}", quadrant.label()));
        }
        fired
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
