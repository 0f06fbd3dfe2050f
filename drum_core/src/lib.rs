//! # drum_core
//!
//! Pose-to-quadrant reactive classifier for a face-driven virtual drum:
//! a tracked head pose steers a virtual drumstick tip whose focal-plane
//! projection is classified into one of four corner pads, and a pad strike
//! fires exactly on quadrant transitions.
//!
//! ## Pipeline
//!
//! | Stage | Input | Output |
//! |---|---|---|
//! | [`projector::project`] | [`pose::PoseSample`] + plane geometry | focal-plane point |
//! | [`classifier::classify`] | point + [`calibration::Calibration`] | [`classifier::Quadrant`] |
//! | [`dispatcher::Dispatcher`] | new vs. stored quadrant | strike on the bound [`dispatcher::PadBank`] |
//!
//! ## Quadrant → pad mapping
//!
//! | Quadrant | Pad |
//! |---|---|
//! | TopLeft | hi-hat |
//! | TopRight | cymbal |
//! | BottomLeft | snare |
//! | BottomRight | tom |
//!
//! The whole pipeline is single-threaded and event-driven: the host feeds
//! [`pose::TrackerEvent`]s (atomic pose samples and plane-geometry changes)
//! to a [`pipeline::DrumPipeline`], which runs one synchronous
//! recompute-and-dispatch cycle per event. Geometric failures degrade to
//! `Quadrant::None` or a skipped cycle; nothing panics, and nothing but
//! diagnostics text crosses the boundary outward.

pub mod calibration;
pub mod classifier;
pub mod diagnostics;
pub mod dispatcher;
pub mod pipeline;
pub mod pose;
pub mod projector;

pub use calibration::{Calibration, DeadZone, PlaneGeometry};
pub use classifier::{classify, ClassifyMode, Quadrant};
pub use diagnostics::{Diagnostics, NullDiagnostics, StderrDiagnostics};
pub use dispatcher::{Dispatcher, NullPads, PadBank};
pub use pipeline::{DrumConfig, DrumPipeline};
pub use pose::{
    spawn_tracker_source, FaceTransform, PoseSample, TrackerEvent, TrackerSource,
};
pub use projector::{project, PointerConfig, ProjectedPoint};
