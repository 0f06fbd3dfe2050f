//! General MIDI percussion output for the four pads.
//!
//! Each quadrant maps to a fixed drum voice on the percussion channel.
//! A strike is reset-and-play by construction: a fresh Note On retriggers
//! the sample from the start on every GM synthesizer.

use drum_core::{PadBank, Quadrant};

/// GM reserves channel 10 (0-indexed 9) for percussion.
const PERCUSSION_CHANNEL: u8 = 9;
const STRIKE_VELOCITY:    u8 = 110;

/// GM percussion key numbers.
const CLOSED_HI_HAT:  u8 = 42;
const CRASH_CYMBAL:   u8 = 49;
const ACOUSTIC_SNARE: u8 = 38;
const LOW_TOM:        u8 = 45;

fn percussion_key(quadrant: Quadrant) -> Option<u8> {
    match quadrant {
        Quadrant::None        => None,
        Quadrant::TopLeft     => Some(CLOSED_HI_HAT),
        Quadrant::TopRight    => Some(CRASH_CYMBAL),
        Quadrant::BottomLeft  => Some(ACOUSTIC_SNARE),
        Quadrant::BottomRight => Some(LOW_TOM),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PercussionOut — abstraction over midir / null (for testing)
// ════════════════════════════════════════════════════════════════════════════

trait PercussionOut: Send {
    fn note_on(&mut self, channel: u8, note: u8, velocity: u8);
    fn note_off(&mut self, channel: u8, note: u8);
}

// ── midir backend ─────────────────────────────────────────────────────────

struct MidirOut {
    conn: midir::MidiOutputConnection,
}

impl PercussionOut for MidirOut {
    fn note_on(&mut self, channel: u8, note: u8, velocity: u8) {
        let _ = self.conn.send(&[0x90 | (channel & 0x0F), note, velocity]);
    }
    fn note_off(&mut self, channel: u8, note: u8) {
        let _ = self.conn.send(&[0x80 | (channel & 0x0F), note, 0]);
    }
}

// ── null backend (used when no MIDI port is available) ────────────────────

struct NullOut;
impl PercussionOut for NullOut {
    fn note_on(&mut self, _ch: u8, _n: u8, _v: u8) {}
    fn note_off(&mut self, _ch: u8, _n: u8)        {}
}

// ════════════════════════════════════════════════════════════════════════════
// open_percussion_output — enumerate ports and pick first available
// ════════════════════════════════════════════════════════════════════════════

/// Try to open the first available MIDI output port.
/// Falls back to `NullOut` with a warning if none found.
fn open_percussion_output() -> Box<dyn PercussionOut> {
    let midi_out = match midir::MidiOutput::new("drum_sim_pads") {
        Ok(m)  => m,
        Err(e) => {
            eprintln!("[pads] MIDI init error: {} — using null output", e);
            return Box::new(NullOut);
        }
    };

    let ports = midi_out.ports();
    if ports.is_empty() {
        eprintln!("[pads] No MIDI output ports found — pads will be silent.");
        eprintln!("[pads] Install a MIDI synthesiser such as:");
        eprintln!("       • macOS: built-in CoreMIDI (always available)");
        eprintln!("       • Linux: `timidity -iA` or `fluidsynth`");
        eprintln!("       • Windows: built-in GS Wavetable Synth");
        return Box::new(NullOut);
    }

    // Prefer a softsynth if visible
    let port_idx = ports.iter().enumerate()
        .find(|(_, p)| {
            midi_out.port_name(p).map(|n| {
                let n = n.to_lowercase();
                n.contains("fluid") || n.contains("timidity") ||
                n.contains("microsoft") || n.contains("gm") ||
                n.contains("synth")
            }).unwrap_or(false)
        })
        .map(|(i, _)| i)
        .unwrap_or(0);

    let port = &ports[port_idx];
    let name = midi_out.port_name(port)
        .unwrap_or_else(|_| "Unknown".to_string());
    eprintln!("[pads] Opening MIDI port: {}", name);

    match midi_out.connect(port, "drum-sim-pads") {
        Ok(conn) => Box::new(MidirOut { conn }),
        Err(e) => {
            eprintln!("[pads] Failed to connect: {} — using null output", e);
            Box::new(NullOut)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DrumKit — the PadBank the pipeline strikes
// ════════════════════════════════════════════════════════════════════════════

/// Four percussion voices behind the [`PadBank`] seam.
pub struct DrumKit {
    out: Box<dyn PercussionOut>,
}

impl DrumKit {
    /// Open the first usable MIDI port; silent kit when none exists.
    pub fn open() -> Self {
        DrumKit { out: open_percussion_output() }
    }
}

impl PadBank for DrumKit {
    fn strike(&mut self, quadrant: Quadrant) {
        if let Some(key) = percussion_key(quadrant) {
            // Percussion voices are one-shots; the off message just clears
            // the note state so the next strike is a clean retrigger.
            self.out.note_on(PERCUSSION_CHANNEL, key, STRIKE_VELOCITY);
            self.out.note_off(PERCUSSION_CHANNEL, key);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
