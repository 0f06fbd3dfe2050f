//! Calibration state: focal-plane geometry and the derived dead zone.
//!
//! The dead zone keeps the hit regions away from the plane center so small
//! pointer wobbles near the middle never trigger a pad. It is rederived on
//! every geometry change, so no stale width/height combination outlives one
//! update.

// ════════════════════════════════════════════════════════════════════════════
// Dead-space multipliers
// ════════════════════════════════════════════════════════════════════════════

/// Fraction of the hit-test edge kept after compensating for the empty
/// space in the pad artwork (reference variant values).
pub const HORIZONTAL_DEAD_SPACE_MULTIPLE: f32 = 0.8;
pub const VERTICAL_DEAD_SPACE_MULTIPLE:   f32 = 0.7;

// ════════════════════════════════════════════════════════════════════════════
// PlaneGeometry
// ════════════════════════════════════════════════════════════════════════════

/// The focal plane's camera-space dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneGeometry {
    pub width:    f32,
    pub height:   f32,
    pub distance: f32,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, distance: f32) -> Self {
        PlaneGeometry { width, height, distance }
    }

    /// True when the plane can host a quadrant test at all.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
            && self.height.is_finite() && self.height > 0.0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DeadZone
// ════════════════════════════════════════════════════════════════════════════

/// Hit-test edge lengths at each corner, in focal-plane coordinates.
///
/// Derived from the plane via the dead-space multipliers; with multipliers
/// of at most 1.0 each edge stays within half the corresponding plane
/// dimension. Larger multipliers make the corner regions overlap, which the
/// classifier resolves by priority order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeadZone {
    pub horizontal_edge: f32,
    pub vertical_edge:   f32,
}

// ════════════════════════════════════════════════════════════════════════════
// Calibration
// ════════════════════════════════════════════════════════════════════════════

/// Owns the plane geometry and the dead zone derived from it.
///
/// Mutations go through the `set_*` methods, each of which rederives the
/// dead zone from the latest geometry before returning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    plane:               PlaneGeometry,
    dead_zone:           DeadZone,
    horizontal_multiple: f32,
    vertical_multiple:   f32,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration::new(
            HORIZONTAL_DEAD_SPACE_MULTIPLE,
            VERTICAL_DEAD_SPACE_MULTIPLE,
        )
    }
}

impl Calibration {
    /// Start with a zero plane; geometry arrives from the host as events.
    pub fn new(horizontal_multiple: f32, vertical_multiple: f32) -> Self {
        Calibration {
            plane:     PlaneGeometry::default(),
            dead_zone: DeadZone::default(),
            horizontal_multiple,
            vertical_multiple,
        }
    }

    pub fn plane(&self)     -> &PlaneGeometry { &self.plane }
    pub fn dead_zone(&self) -> &DeadZone      { &self.dead_zone }

    pub fn set_width(&mut self, width: f32) {
        self.plane.width = width;
        self.rederive();
    }

    pub fn set_height(&mut self, height: f32) {
        self.plane.height = height;
        self.rederive();
    }

    /// Distance only scales the projection; the dead zone is unaffected.
    pub fn set_distance(&mut self, distance: f32) {
        self.plane.distance = distance;
    }

    /// The square pad edge the host should size corner assets to:
    /// the largest square that fits a quadrant of the plane.
    pub fn square_edge_length(&self) -> f32 {
        (self.plane.width / 2.0).min(self.plane.height / 2.0)
    }

    fn rederive(&mut self) {
        let edge = self.square_edge_length();
        self.dead_zone.horizontal_edge = edge * self.horizontal_multiple;
        self.dead_zone.vertical_edge   = edge * self.vertical_multiple;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_multipliers_on_square_plane() {
        let mut cal = Calibration::default();
        cal.set_width(2.0);
        cal.set_height(2.0);
        cal.set_distance(1.0);
        // hit-test edge = min(1.0, 1.0) = 1.0
        assert!((cal.dead_zone().horizontal_edge - 0.8).abs() < 1e-6);
        assert!((cal.dead_zone().vertical_edge - 0.7).abs() < 1e-6);
    }

    #[test]
    fn width_then_height_leaves_no_stale_combination() {
        let mut cal = Calibration::default();
        cal.set_width(0.72);
        cal.set_height(1.28);
        // Both edges derive from min(0.36, 0.64) = 0.36.
        assert!((cal.dead_zone().horizontal_edge - 0.36 * 0.8).abs() < 1e-6);
        assert!((cal.dead_zone().vertical_edge - 0.36 * 0.7).abs() < 1e-6);

        // Shrinking the height below the width re-binds both edges to it.
        cal.set_height(0.5);
        assert!((cal.dead_zone().horizontal_edge - 0.25 * 0.8).abs() < 1e-6);
        assert!((cal.dead_zone().vertical_edge - 0.25 * 0.7).abs() < 1e-6);
    }

    #[test]
    fn distance_change_does_not_touch_dead_zone() {
        let mut cal = Calibration::default();
        cal.set_width(2.0);
        cal.set_height(2.0);
        let dz = *cal.dead_zone();
        cal.set_distance(3.0);
        assert_eq!(*cal.dead_zone(), dz);
        assert!((cal.plane().distance - 3.0).abs() < 1e-6);
    }

    #[test]
    fn square_edge_follows_smaller_dimension() {
        let mut cal = Calibration::default();
        cal.set_width(0.72);
        cal.set_height(1.28);
        assert!((cal.square_edge_length() - 0.36).abs() < 1e-6);
    }

    #[test]
    fn edges_within_half_dimensions_for_unit_multipliers() {
        let mut cal = Calibration::default();
        cal.set_width(1.0);
        cal.set_height(3.0);
        let dz = cal.dead_zone();
        assert!(dz.horizontal_edge <= cal.plane().width / 2.0);
        assert!(dz.vertical_edge <= cal.plane().height / 2.0);
    }

    #[test]
    fn zero_plane_is_not_usable() {
        let cal = Calibration::default();
        assert!(!cal.plane().is_usable());
    }
}
