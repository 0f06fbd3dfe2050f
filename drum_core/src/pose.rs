//! Pose samples and the event boundary into the core.
//!
//! The public interface is [`TrackerEvent`] delivered over a `mpsc` channel.
//! Consumers don't need to know whether events came from a real face tracker
//! or the keyboard simulator.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use glam::{Quat, Vec3};

// ════════════════════════════════════════════════════════════════════════════
// FaceTransform
// ════════════════════════════════════════════════════════════════════════════

/// The tracked camera/head transform: a rotation plus a translation in
/// camera space.
///
/// `apply_to_point` maps face-local coordinates into camera space;
/// `apply_to_vector` rotates a direction without translating it, which is
/// what steers the pointer when the head turns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceTransform {
    pub rotation:    Quat,
    pub translation: Vec3,
}

impl FaceTransform {
    pub const IDENTITY: FaceTransform = FaceTransform {
        rotation:    Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        FaceTransform { rotation, translation }
    }

    /// Rotate and translate a face-local point into camera space.
    pub fn apply_to_point(&self, p: Vec3) -> Vec3 {
        self.rotation * p + self.translation
    }

    /// Rotate a direction vector; translation does not apply.
    pub fn apply_to_vector(&self, v: Vec3) -> Vec3 {
        self.rotation * v
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PoseSample
// ════════════════════════════════════════════════════════════════════════════

/// One tracked face pose, immutable per sample.
///
/// `nose_tip` is in face-local coordinates; `transform` maps it into camera
/// space, where the camera sits at the origin looking down -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseSample {
    pub nose_tip:  Vec3,
    pub transform: FaceTransform,
}

impl PoseSample {
    pub fn new(nose_tip: Vec3, transform: FaceTransform) -> Self {
        PoseSample { nose_tip, transform }
    }

    /// The nose tip in camera space.
    pub fn nose_tip_camera(&self) -> Vec3 {
        self.transform.apply_to_point(self.nose_tip)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TrackerEvent
// ════════════════════════════════════════════════════════════════════════════

/// A discrete update from the tracking host, delivered in order on one
/// logical thread.
///
/// Pose x/y always arrive batched in a single [`PoseSample`] — per-axis
/// delivery is the boundary's problem to coalesce, so the classifier never
/// runs against a half-updated point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerEvent {
    /// A new face pose.
    Pose(PoseSample),

    /// The focal plane's width changed (camera-space units).
    PlaneWidth(f32),

    /// The focal plane's height changed.
    PlaneHeight(f32),

    /// The focal plane's distance from the camera changed.
    PlaneDistance(f32),

    /// The tracking session ended; the pipeline loop should return.
    Shutdown,
}

// ════════════════════════════════════════════════════════════════════════════
// TrackerSource trait — unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`TrackerEvent`]s over a channel.
pub trait TrackerSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<TrackerEvent>);
}

/// Spawn a tracker source on its own thread and return the receiving end.
pub fn spawn_tracker_source<T: TrackerSource>(source: T) -> Receiver<TrackerEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
