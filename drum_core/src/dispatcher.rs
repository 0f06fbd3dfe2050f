//! Transition dispatcher: fires a pad strike exactly when the quadrant
//! changes.
//!
//! The action is bound to the destination quadrant only — every ordered
//! pair of distinct quadrants is a valid transition edge, and `None` is a
//! valid destination whose action is a no-op. An optional minimum-dwell
//! guard suppresses rapid flapping across a boundary.

use std::time::{Duration, Instant};

use crate::classifier::Quadrant;

// ════════════════════════════════════════════════════════════════════════════
// PadBank — abstraction over the host's sound triggers
// ════════════════════════════════════════════════════════════════════════════

/// The action sink: four triggerable pads plus the `None` no-op.
///
/// `strike` carries reset-and-play semantics: the bound sample is rewound
/// to the start and set playing, so repeated strikes restart it rather than
/// layering. Implementations must not fail outward — a pad that cannot
/// sound is the implementation's problem, never the dispatcher's.
pub trait PadBank {
    fn strike(&mut self, quadrant: Quadrant);
}

/// No-op bank, for hosts without audio and for driving the pipeline in
/// tests.
pub struct NullPads;

impl PadBank for NullPads {
    fn strike(&mut self, _quadrant: Quadrant) {}
}

// ════════════════════════════════════════════════════════════════════════════
// Dispatcher
// ════════════════════════════════════════════════════════════════════════════

/// Tracks the current quadrant and fires on change.
#[derive(Debug)]
pub struct Dispatcher {
    current:    Quadrant,
    min_dwell:  Option<Duration>,
    last_fired: Option<Instant>,
}

impl Dispatcher {
    /// `min_dwell = None` fires on every change, matching the reference
    /// behavior; `Some(d)` suppresses a change observed less than `d`
    /// after the previous fired transition, absorbing boundary jitter.
    pub fn new(min_dwell: Option<Duration>) -> Self {
        Dispatcher {
            current: Quadrant::None,
            min_dwell,
            last_fired: None,
        }
    }

    pub fn current(&self) -> Quadrant {
        self.current
    }

    /// Feed one freshly computed classification. Returns `true` when a
    /// transition fired (including into `None`, whose strike is a no-op on
    /// any reasonable bank).
    pub fn observe(&mut self, new: Quadrant, pads: &mut dyn PadBank) -> bool {
        if new == self.current {
            return false;
        }
        if let (Some(dwell), Some(fired)) = (self.min_dwell, self.last_fired) {
            if fired.elapsed() < dwell {
                // Suppressed: the state does not move either, so a value
                // that keeps flapping settles wherever it last fired.
                return false;
            }
        }
        self.current = new;
        self.last_fired = Some(Instant::now());
        pads.strike(new);
        true
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every strike for assertions.
    #[derive(Default)]
    struct RecordingPads {
        strikes: Vec<Quadrant>,
    }

    impl PadBank for RecordingPads {
        fn strike(&mut self, quadrant: Quadrant) {
            self.strikes.push(quadrant);
        }
    }

    #[test]
    fn fires_once_on_change() {
        let mut d = Dispatcher::new(None);
        let mut pads = RecordingPads::default();
        assert!(d.observe(Quadrant::TopLeft, &mut pads));
        assert_eq!(pads.strikes, vec![Quadrant::TopLeft]);
        assert_eq!(d.current(), Quadrant::TopLeft);
    }

    #[test]
    fn repeats_are_silent() {
        let mut d = Dispatcher::new(None);
        let mut pads = RecordingPads::default();
        d.observe(Quadrant::TopLeft, &mut pads);
        for _ in 0..10 {
            assert!(!d.observe(Quadrant::TopLeft, &mut pads));
        }
        assert_eq!(pads.strikes.len(), 1);
    }

    #[test]
    fn none_is_a_valid_destination() {
        let mut d = Dispatcher::new(None);
        let mut pads = RecordingPads::default();
        d.observe(Quadrant::TopLeft, &mut pads);
        assert!(d.observe(Quadrant::None, &mut pads));
        assert_eq!(d.current(), Quadrant::None);
        // The bank still sees the strike; NullPads-style banks ignore it.
        assert_eq!(pads.strikes, vec![Quadrant::TopLeft, Quadrant::None]);
    }

    #[test]
    fn leaving_and_returning_restrikes() {
        let mut d = Dispatcher::new(None);
        let mut pads = RecordingPads::default();
        d.observe(Quadrant::TopLeft, &mut pads);
        d.observe(Quadrant::None, &mut pads);
        d.observe(Quadrant::TopLeft, &mut pads);
        assert_eq!(
            pads.strikes,
            vec![Quadrant::TopLeft, Quadrant::None, Quadrant::TopLeft]
        );
    }

    #[test]
    fn initial_none_never_fires() {
        let mut d = Dispatcher::new(None);
        let mut pads = RecordingPads::default();
        assert!(!d.observe(Quadrant::None, &mut pads));
        assert!(pads.strikes.is_empty());
    }

    #[test]
    fn dwell_guard_suppresses_flapping() {
        let mut d = Dispatcher::new(Some(Duration::from_secs(60)));
        let mut pads = RecordingPads::default();
        assert!(d.observe(Quadrant::TopLeft, &mut pads));
        // Immediate flap back and forth: all inside the dwell window.
        assert!(!d.observe(Quadrant::None, &mut pads));
        assert!(!d.observe(Quadrant::TopRight, &mut pads));
        assert_eq!(pads.strikes, vec![Quadrant::TopLeft]);
        assert_eq!(d.current(), Quadrant::TopLeft);
    }

    #[test]
    fn zero_dwell_behaves_like_no_guard() {
        let mut d = Dispatcher::new(Some(Duration::ZERO));
        let mut pads = RecordingPads::default();
        assert!(d.observe(Quadrant::TopLeft, &mut pads));
        assert!(d.observe(Quadrant::TopRight, &mut pads));
        assert_eq!(pads.strikes.len(), 2);
    }
}
