//! Quadrant classifier: projected point → one of four corner regions.
//!
//! The corner tests are evaluated in a fixed priority order and are not
//! mutually exclusive at the boundary; when a dead-zone edge exceeds half a
//! plane dimension the left corners can overlap their right counterparts in
//! x, and the left corner wins by priority. That tie-break is deliberate.

use crate::calibration::Calibration;
use crate::projector::ProjectedPoint;

// ════════════════════════════════════════════════════════════════════════════
// Quadrant
// ════════════════════════════════════════════════════════════════════════════

/// Where the pointer currently sits. Exactly one value is current at any
/// time; `None` is the central region plus everything degenerate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quadrant {
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Display label, matching the drum voice each corner carries.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::None        => "none",
            Quadrant::TopLeft     => "hi-hat",
            Quadrant::TopRight    => "cymbal",
            Quadrant::BottomLeft  => "snare",
            Quadrant::BottomRight => "tom",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ClassifyMode — the two configuration profiles
// ════════════════════════════════════════════════════════════════════════════

/// How a projected point is tested against the corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClassifyMode {
    /// Test against the plane's half-dimensions minus the dead-zone edges.
    /// Needs usable plane geometry; without it everything is `None`.
    GeometryRelative,

    /// Sign-based test against fixed absolute thresholds, for hosts that
    /// never report plane geometry.
    FixedThreshold { x_threshold: f32, y_threshold: f32 },
}

// ════════════════════════════════════════════════════════════════════════════
// classify
// ════════════════════════════════════════════════════════════════════════════

/// Classify a projected point. First match wins: TopLeft, TopRight,
/// BottomLeft, BottomRight, then `None`.
///
/// NaN coordinates fail every comparison and land on `None`.
pub fn classify(p: ProjectedPoint, cal: &Calibration, mode: &ClassifyMode) -> Quadrant {
    let (left, right, top, bottom) = match mode {
        ClassifyMode::GeometryRelative => {
            let plane = cal.plane();
            if !plane.is_usable() {
                return Quadrant::None;
            }
            let dz          = cal.dead_zone();
            let half_width  = plane.width / 2.0;
            let half_height = plane.height / 2.0;
            (
                p.x < -half_width + dz.horizontal_edge,
                p.x > half_width - dz.horizontal_edge,
                p.y > half_height - dz.vertical_edge,
                p.y < -half_height + dz.vertical_edge,
            )
        }
        ClassifyMode::FixedThreshold { x_threshold, y_threshold } => (
            p.x < -x_threshold,
            p.x > *x_threshold,
            p.y > *y_threshold,
            p.y < -y_threshold,
        ),
    };

    if left && top {
        Quadrant::TopLeft
    } else if right && top {
        Quadrant::TopRight
    } else if left && bottom {
        Quadrant::BottomLeft
    } else if right && bottom {
        Quadrant::BottomRight
    } else {
        Quadrant::None
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// 2×2 plane at distance 1 with the reference multipliers:
    /// edges 0.8 horizontal, 0.7 vertical, so corners begin past
    /// x = ±0.2, y = ±0.3.
    fn reference_cal() -> Calibration {
        let mut cal = Calibration::default();
        cal.set_width(2.0);
        cal.set_height(2.0);
        cal.set_distance(1.0);
        cal
    }

    fn classify_geo(x: f32, y: f32) -> Quadrant {
        classify(
            ProjectedPoint::new(x, y),
            &reference_cal(),
            &ClassifyMode::GeometryRelative,
        )
    }

    #[test]
    fn strict_interior_of_each_corner() {
        assert_eq!(classify_geo(-0.9, 0.8), Quadrant::TopLeft);
        assert_eq!(classify_geo(0.9, 0.8), Quadrant::TopRight);
        assert_eq!(classify_geo(-0.9, -0.8), Quadrant::BottomLeft);
        assert_eq!(classify_geo(0.9, -0.8), Quadrant::BottomRight);
    }

    #[test]
    fn central_region_is_none() {
        assert_eq!(classify_geo(0.0, 0.0), Quadrant::None);
        assert_eq!(classify_geo(-0.19, 0.29), Quadrant::None);
        assert_eq!(classify_geo(0.19, -0.29), Quadrant::None);
    }

    #[test]
    fn edge_bands_without_both_conditions_are_none() {
        // Far left but vertically centered: only the x test passes.
        assert_eq!(classify_geo(-0.9, 0.0), Quadrant::None);
        // High up but horizontally centered: only the y test passes.
        assert_eq!(classify_geo(0.0, 0.8), Quadrant::None);
    }

    #[test]
    fn out_of_range_points_still_classify() {
        // The projection has no inherent bound; way outside the plane the
        // same corner conditions apply.
        assert_eq!(classify_geo(-50.0, 50.0), Quadrant::TopLeft);
    }

    #[test]
    fn priority_tie_break_left_beats_right() {
        // Horizontal multiplier of 2.5 pushes the horizontal edge to 2.5 on
        // a 2x2 plane — past half-width, so the top corners overlap for x
        // near 0. TopLeft is tested first and must win.
        let mut cal = Calibration::new(2.5, 0.7);
        cal.set_width(2.0);
        cal.set_height(2.0);
        let p = ProjectedPoint::new(0.0, 0.8);
        // Both corner conditions hold at x = 0.
        assert!(p.x < -1.0 + cal.dead_zone().horizontal_edge);
        assert!(p.x > 1.0 - cal.dead_zone().horizontal_edge);
        assert_eq!(
            classify(p, &cal, &ClassifyMode::GeometryRelative),
            Quadrant::TopLeft
        );
    }

    #[test]
    fn degenerate_plane_classifies_none() {
        let cal = Calibration::default(); // zero plane
        let p = ProjectedPoint::new(-0.9, 0.8);
        assert_eq!(classify(p, &cal, &ClassifyMode::GeometryRelative), Quadrant::None);
    }

    #[test]
    fn nan_point_classifies_none() {
        let p = ProjectedPoint::new(f32::NAN, f32::NAN);
        assert_eq!(
            classify(p, &reference_cal(), &ClassifyMode::GeometryRelative),
            Quadrant::None
        );
    }

    #[test]
    fn fixed_threshold_profile() {
        let mode = ClassifyMode::FixedThreshold { x_threshold: 0.02, y_threshold: 0.04 };
        let cal = Calibration::default(); // geometry is irrelevant here
        let q = |x, y| classify(ProjectedPoint::new(x, y), &cal, &mode);

        assert_eq!(q(0.03, 0.05), Quadrant::TopRight);
        assert_eq!(q(0.03, 0.03), Quadrant::None); // y below threshold
        assert_eq!(q(-0.03, 0.05), Quadrant::TopLeft);
        assert_eq!(q(-0.03, -0.05), Quadrant::BottomLeft);
        assert_eq!(q(0.03, -0.05), Quadrant::BottomRight);
        assert_eq!(q(0.0, 0.0), Quadrant::None);
    }
}
