//! Keyboard head-pose simulator.
//!
//! The visualizer window sends [`SimInput`] events here; this translator
//! integrates them into a head orientation and emits atomic
//! [`TrackerEvent::Pose`] samples. The pipeline cannot tell it from a real
//! tracker.

use std::sync::mpsc::{Receiver, Sender};

use drum_core::{FaceTransform, PoseSample, TrackerEvent, TrackerSource};
use glam::{EulerRot, Quat, Vec3};

// ════════════════════════════════════════════════════════════════════════════
// Simulated scene constants
// ════════════════════════════════════════════════════════════════════════════

/// Simulated focal plane (camera-space units). Square, so the dead zone
/// derives from the same edge in both axes.
pub const PLANE_WIDTH:    f32 = 0.72;
pub const PLANE_HEIGHT:   f32 = 0.72;
pub const PLANE_DISTANCE: f32 = 1.0;

/// Depth of the simulated face. With the default 0.24 pointer the stick
/// tip sits right at the focal plane.
const FACE_DEPTH: f32 = 0.76;

/// Degrees per steer step, and the hard limit either side of center.
const STEP_DEG:     f32 = 2.0;
const FAST_STEP_DEG: f32 = 6.0;
const MAX_ANGLE_DEG: f32 = 45.0;

// ════════════════════════════════════════════════════════════════════════════
// SimInput
// ════════════════════════════════════════════════════════════════════════════

/// Raw input event from the simulation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    Steer(SimKey),
    /// Shift held: bigger steer step.
    SteerFast(SimKey),
    Recenter,
    Quit,
}

/// Simulated steering keys (mapped from minifb arrow keys).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKey {
    Left,
    Right,
    Up,
    Down,
}

// ════════════════════════════════════════════════════════════════════════════
// SimTracker
// ════════════════════════════════════════════════════════════════════════════

/// Tracker source driven by [`SimInput`] events (from the visualizer's
/// window). Decouples the window event loop from pose generation.
pub struct SimTracker {
    pub rx: Receiver<SimInput>,
}

impl SimTracker {
    pub fn new(rx: Receiver<SimInput>) -> Self {
        SimTracker { rx }
    }
}

impl TrackerSource for SimTracker {
    fn run(self: Box<Self>, tx: Sender<TrackerEvent>) {
        // Plane geometry first, the way a host reports it on session start.
        let _ = tx.send(TrackerEvent::PlaneWidth(PLANE_WIDTH));
        let _ = tx.send(TrackerEvent::PlaneHeight(PLANE_HEIGHT));
        let _ = tx.send(TrackerEvent::PlaneDistance(PLANE_DISTANCE));
        let _ = tx.send(TrackerEvent::Pose(pose_from_angles(0.0, 0.0)));

        let mut yaw_deg   = 0.0_f32;
        let mut pitch_deg = 0.0_f32;

        for input in self.rx {
            match input {
                SimInput::Steer(key) | SimInput::SteerFast(key) => {
                    let step = if matches!(input, SimInput::SteerFast(_)) {
                        FAST_STEP_DEG
                    } else {
                        STEP_DEG
                    };
                    match key {
                        SimKey::Left  => yaw_deg -= step,
                        SimKey::Right => yaw_deg += step,
                        SimKey::Up    => pitch_deg += step,
                        SimKey::Down  => pitch_deg -= step,
                    }
                    yaw_deg   = yaw_deg.clamp(-MAX_ANGLE_DEG, MAX_ANGLE_DEG);
                    pitch_deg = pitch_deg.clamp(-MAX_ANGLE_DEG, MAX_ANGLE_DEG);
                }
                SimInput::Recenter => {
                    yaw_deg = 0.0;
                    pitch_deg = 0.0;
                }
                SimInput::Quit => {
                    let _ = tx.send(TrackerEvent::Shutdown);
                    return;
                }
            }
            // One atomic pose per input: x and y never arrive split.
            if tx.send(TrackerEvent::Pose(pose_from_angles(yaw_deg, pitch_deg))).is_err() {
                return;
            }
        }
    }
}

/// Build a pose for a head turned `yaw_deg` right and `pitch_deg` up,
/// sitting on the optical axis at the simulated depth.
fn pose_from_angles(yaw_deg: f32, pitch_deg: f32) -> PoseSample {
    // Positive yaw (head turning toward the camera's +X) deflects the
    // projected tip toward +X after depth normalization; pitch up goes -Y,
    // so it is negated to keep "Up key = marker up".
    let rotation = Quat::from_euler(
        EulerRot::YXZ,
        yaw_deg.to_radians(),
        -pitch_deg.to_radians(),
        0.0,
    );
    PoseSample::new(
        Vec3::ZERO,
        FaceTransform::new(rotation, Vec3::new(0.0, 0.0, FACE_DEPTH)),
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use drum_core::{project, Calibration, PointerConfig};

    fn sim_plane() -> Calibration {
        let mut cal = Calibration::default();
        cal.set_width(PLANE_WIDTH);
        cal.set_height(PLANE_HEIGHT);
        cal.set_distance(PLANE_DISTANCE);
        cal
    }

    #[test]
    fn centered_pose_projects_to_plane_center() {
        let p = project(
            &pose_from_angles(0.0, 0.0),
            sim_plane().plane(),
            &PointerConfig::default(),
        )
        .unwrap();
        assert!(p.x.abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    #[test]
    fn steering_matches_screen_directions() {
        let cal = sim_plane();
        let cfg = PointerConfig::default();

        let right = project(&pose_from_angles(20.0, 0.0), cal.plane(), &cfg).unwrap();
        assert!(right.x > 0.05, "yaw right should deflect +X, got {}", right.x);

        let up = project(&pose_from_angles(0.0, 20.0), cal.plane(), &cfg).unwrap();
        assert!(up.y > 0.05, "pitch up should deflect +Y, got {}", up.y);
    }

    #[test]
    fn full_yaw_reaches_past_the_dead_zone() {
        let cal = sim_plane();
        let boundary = cal.plane().width / 2.0 - cal.dead_zone().horizontal_edge;
        let p = project(
            &pose_from_angles(MAX_ANGLE_DEG, 0.0),
            cal.plane(),
            &PointerConfig::default(),
        )
        .unwrap();
        assert!(p.x > boundary, "max yaw must cross the pad boundary");
    }

    #[test]
    fn quit_emits_shutdown() {
        use std::sync::mpsc;

        let (in_tx, in_rx) = mpsc::channel();
        in_tx.send(SimInput::Steer(SimKey::Left)).unwrap();
        in_tx.send(SimInput::Quit).unwrap();

        let rx = drum_core::spawn_tracker_source(SimTracker::new(in_rx));
        let events: Vec<TrackerEvent> = rx.iter().collect();
        assert_eq!(events.last(), Some(&TrackerEvent::Shutdown));
        // geometry (3) + initial pose + steered pose + shutdown
        assert_eq!(events.len(), 6);
    }
}
