//! Geometric projector: face pose → 2D point on the focal plane.
//!
//! The pointer is a virtual drumstick tip anchored at the nose. A forward
//! vector held at the nose's own depth is rotated by the head transform, so
//! head *rotation* (not translation) steers the tip; the tip is then
//! projected onto the focal plane for the quadrant test.

use glam::Vec3;

use crate::calibration::PlaneGeometry;
use crate::pose::PoseSample;

/// Depths closer to zero than this are treated as degenerate.
const MIN_DEPTH: f32 = 1e-6;

// ════════════════════════════════════════════════════════════════════════════
// ProjectedPoint
// ════════════════════════════════════════════════════════════════════════════

/// A 2D point in focal-plane coordinates, recomputed on every pose sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedPoint {
    pub x: f32,
    pub y: f32,
}

impl ProjectedPoint {
    pub fn new(x: f32, y: f32) -> Self {
        ProjectedPoint { x, y }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PointerConfig
// ════════════════════════════════════════════════════════════════════════════

/// Length of the virtual drumstick in world units.
///
/// This should coordinate with the length of whatever pointer asset the host
/// renders; the tip lands `length` units from the nose along the steered
/// direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerConfig {
    pub length: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        PointerConfig { length: 0.24 }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// project
// ════════════════════════════════════════════════════════════════════════════

/// Project a pose sample onto the focal plane.
///
/// Steps:
/// 1. Nose tip into camera space.
/// 2. Forward vector `(0, 0, -nose.z)` — from the nose back toward the
///    camera's optical axis, held at the nose's own depth.
/// 3. Rotate it by the head transform.
/// 4. Normalize by its own depth, so the next step is independent of how
///    far the user sits from the camera.
/// 5. Scale by the pointer length.
/// 6. Translate to the nose tip, giving the pointer tip in camera space.
/// 7. Scale the tip by `distance / |tip.z|` onto the focal plane.
///
/// Returns `None` when any depth used as a divisor is (near) zero or any
/// intermediate value is non-finite; callers skip the cycle rather than
/// classify a corrupt point.
pub fn project(
    sample: &PoseSample,
    plane:  &PlaneGeometry,
    cfg:    &PointerConfig,
) -> Option<ProjectedPoint> {
    let nose = sample.nose_tip_camera();
    if !nose.is_finite() {
        return None;
    }

    let forward   = Vec3::new(0.0, 0.0, -nose.z);
    let direction = sample.transform.apply_to_vector(forward);
    if !direction.is_finite() || direction.z.abs() < MIN_DEPTH {
        return None;
    }

    let unit   = direction / direction.z;
    let scaled = unit * cfg.length;
    let tip    = nose + scaled;
    if !tip.is_finite() || tip.z.abs() < MIN_DEPTH {
        return None;
    }

    let scale     = plane.distance / tip.z.abs();
    let projected = tip * scale;
    if !projected.is_finite() {
        return None;
    }

    Some(ProjectedPoint::new(projected.x, projected.y))
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::FaceTransform;
    use glam::Quat;

    fn plane() -> PlaneGeometry {
        PlaneGeometry { width: 2.0, height: 2.0, distance: 1.0 }
    }

    fn sample_at(nose: Vec3, rotation: Quat) -> PoseSample {
        PoseSample::new(Vec3::ZERO, FaceTransform::new(rotation, nose))
    }

    #[test]
    fn centered_face_projects_to_origin() {
        // Nose on the optical axis, no rotation: the pointer extends straight
        // toward the camera and lands at the plane center.
        let s = sample_at(Vec3::new(0.0, 0.0, 0.76), Quat::IDENTITY);
        let p = project(&s, &plane(), &PointerConfig::default()).unwrap();
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn offset_nose_without_rotation_projects_to_offset() {
        // With identity rotation and pointer 0.24, a nose at depth 0.76 puts
        // the tip at depth 1.0, so (x, y) survive the plane scale unchanged.
        let s = sample_at(Vec3::new(-0.9, 0.8, 0.76), Quat::IDENTITY);
        let p = project(&s, &plane(), &PointerConfig::default()).unwrap();
        assert!((p.x - -0.9).abs() < 1e-5);
        assert!((p.y - 0.8).abs() < 1e-5);
    }

    #[test]
    fn yaw_steers_the_tip_sideways() {
        let deg15 = 15.0_f32.to_radians();
        let s = sample_at(Vec3::new(0.0, 0.0, 0.76), Quat::from_rotation_y(deg15));
        let p = project(&s, &plane(), &PointerConfig::default()).unwrap();
        // Positive yaw swings the camera-bound vector toward -X; the depth
        // normalization flips it, so the tip deflects toward +X by tan(yaw).
        assert!(p.x > 0.01, "expected +X deflection, got {}", p.x);
        assert!(p.y.abs() < 1e-4);
    }

    #[test]
    fn deflection_is_independent_of_user_distance() {
        // Depth-normalizing the direction means the steered offset from the
        // nose does not grow as the user backs away.
        let deg10 = 10.0_f32.to_radians();
        let near = sample_at(Vec3::new(0.0, 0.0, 0.5), Quat::from_rotation_y(deg10));
        let far  = sample_at(Vec3::new(0.0, 0.0, 1.5), Quat::from_rotation_y(deg10));

        let pn = project(&near, &plane(), &PointerConfig::default()).unwrap();
        let pf = project(&far,  &plane(), &PointerConfig::default()).unwrap();

        // The lateral tip offset from the nose is the same; the focal-plane
        // scale shrinks it with depth, so the farther face deflects less.
        assert!(pn.x > 0.0 && pf.x > 0.0);
        assert!(pn.x > pf.x);
    }

    #[test]
    fn zero_depth_nose_is_rejected() {
        // Nose at depth zero makes the forward vector zero-length.
        let s = sample_at(Vec3::new(0.1, 0.1, 0.0), Quat::IDENTITY);
        assert_eq!(project(&s, &plane(), &PointerConfig::default()), None);
    }

    #[test]
    fn sideways_rotated_direction_is_rejected() {
        // A 90-degree yaw turns the forward vector fully into X; its depth
        // component vanishes and the unit-direction divide would blow up.
        let s = sample_at(
            Vec3::new(0.0, 0.0, 0.76),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        assert_eq!(project(&s, &plane(), &PointerConfig::default()), None);
    }

    #[test]
    fn non_finite_pose_is_rejected() {
        let s = sample_at(Vec3::new(f32::NAN, 0.0, 0.76), Quat::IDENTITY);
        assert_eq!(project(&s, &plane(), &PointerConfig::default()), None);
    }

    #[test]
    fn pointer_tip_at_camera_depth_is_rejected() {
        // The tip always lands at nose.z + pointer length, so a nose at
        // -0.24 puts it exactly on the camera plane (z = 0); the projection
        // divide has no answer there.
        let s = sample_at(Vec3::new(0.0, 0.0, -0.24), Quat::IDENTITY);
        assert_eq!(project(&s, &plane(), &PointerConfig::default()), None);
    }
}
