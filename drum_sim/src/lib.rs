//! # drum_sim
//!
//! Simulation host for the [`drum_core`] pose-to-quadrant classifier: a
//! keyboard-steered head pose, a software-rendered pad view, and General
//! MIDI percussion for the four pads.
//!
//! ## Pad layout
//!
//! | Corner | Pad | GM voice |
//! |---|---|---|
//! | top-left | hi-hat | closed hi-hat (42) |
//! | top-right | cymbal | crash cymbal (49) |
//! | bottom-left | snare | acoustic snare (38) |
//! | bottom-right | tom | low tom (45) |
//!
//! ## Keyboard
//!
//! | Key | Effect |
//! |---|---|
//! | Arrow keys | Turn the simulated head (hold to keep turning) |
//! | Shift + arrows | Faster turn |
//! | `R` | Recenter the head |
//! | `Q` | Quit |
//!
//! Steer the marker into a corner pad to strike it; the strike fires once
//! per entry, exactly like the AR filter firing on quadrant transitions.

pub mod app;
pub mod sim;
pub mod sound;
pub mod visualizer;
