//! Software-rendered pad view using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │  HI-HAT (top-left)   │  CYMBAL (top-right)  │
//! │            · · · · · ┼ · · · · ·            │
//! │          dead-zone boundary lines           │
//! │            · · · · · ┼ · · · · ·            │
//! │  SNARE (bottom-left) │  TOM (bottom-right)  │
//! ├──────────────────────┴──────────────────────┤
//! │  status bar / key legend                    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The pads are squares sized from the calibration's pad edge (the same
//! rule the AR host uses to size its corner artwork), the dashed lines are
//! the dead-zone boundaries, and the diamond marker is the projected
//! drumstick tip.

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use drum_core::{Calibration, ClassifyMode, DrumPipeline, Quadrant};
use std::sync::mpsc::Sender;

use crate::sim::{SimInput, SimKey};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 640;
pub const WIN_H: usize = 700;
/// Square region mapping the focal plane; the strip below is for text.
const VIEW_H:    usize = 640;
const STATUS_Y:  usize = VIEW_H + 12;
const LEGEND_Y:  usize = WIN_H - 16;

const BG_COLOR:      u32 = 0xFF1A1A2E;
const TEXT_BG:       u32 = 0xFF0F3460;
const BOUNDARY:      u32 = 0xFF4E6E9E;
const MARKER_COLOR:  u32 = 0xFFFFD700; // gold
const HIHAT_COLOR:   u32 = 0xFF3D8361;
const CYMBAL_COLOR:  u32 = 0xFFB08B2E;
const SNARE_COLOR:   u32 = 0xFF7D4A8C;
const TOM_COLOR:     u32 = 0xFF9E4A4A;

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf:    Vec<u32>,
    sim_tx: Sender<SimInput>,
}

impl Visualizer {
    pub fn new(sim_tx: Sender<SimInput>) -> Result<Self, String> {
        let mut window = Window::new(
            "Face Drum — pose-to-quadrant simulator",
            WIN_W, WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf: vec![BG_COLOR; WIN_W * WIN_H],
            sim_tx,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll keyboard input and translate to SimInput events.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() { return false; }

        let shift = self.window.is_key_down(Key::LeftShift)
                 || self.window.is_key_down(Key::RightShift);

        // Keys that trigger on first press only
        let one_shot = |w: &Window, k: Key| w.is_key_pressed(k, KeyRepeat::No);
        // Keys that repeat while held
        let held     = |w: &Window, k: Key| w.is_key_pressed(k, KeyRepeat::Yes);

        if one_shot(&self.window, Key::Q) {
            let _ = self.sim_tx.send(SimInput::Quit);
            return false;
        }
        if one_shot(&self.window, Key::R) {
            let _ = self.sim_tx.send(SimInput::Recenter);
        }

        let steer = |key: SimKey| {
            if shift { SimInput::SteerFast(key) } else { SimInput::Steer(key) }
        };
        if held(&self.window, Key::Left) {
            let _ = self.sim_tx.send(steer(SimKey::Left));
        }
        if held(&self.window, Key::Right) {
            let _ = self.sim_tx.send(steer(SimKey::Right));
        }
        if held(&self.window, Key::Up) {
            let _ = self.sim_tx.send(steer(SimKey::Up));
        }
        if held(&self.window, Key::Down) {
            let _ = self.sim_tx.send(steer(SimKey::Down));
        }

        true
    }

    /// Render one frame from the pipeline's current state.
    pub fn render(&mut self, pipeline: &DrumPipeline, status: &str) {
        self.buf.fill(BG_COLOR);

        let cal = pipeline.calibration();
        let active = pipeline.current_quadrant();

        self.draw_pads(cal, active);
        self.draw_boundaries(cal, &pipeline.config().mode);
        self.draw_marker(cal, pipeline);

        // ── Status bar ────────────────────────────────────────────────────
        self.fill_rect(0, VIEW_H, WIN_W, WIN_H - VIEW_H, TEXT_BG);
        self.draw_label(status, 10, STATUS_Y, 0xFFEEEEEE);
        self.draw_label(
            "Arrows=steer  Shift=fast  R=recenter  Q=quit",
            10, LEGEND_Y, 0xFF888888,
        );

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── Focal-plane → pixel mapping ───────────────────────────────────────

    /// Focal-plane (x, y) to view pixels; +y is up on the plane, down in
    /// the buffer.
    fn to_px(&self, cal: &Calibration, x: f32, y: f32) -> (isize, isize) {
        let w = cal.plane().width.max(1e-6);
        let h = cal.plane().height.max(1e-6);
        let px = (WIN_W as f32 / 2.0) + x / w * WIN_W as f32;
        let py = (VIEW_H as f32 / 2.0) - y / h * VIEW_H as f32;
        (px as isize, py as isize)
    }

    // ── Pads ──────────────────────────────────────────────────────────────

    fn draw_pads(&mut self, cal: &Calibration, active: Quadrant) {
        // Pads are squares of the calibration's pad edge, pinned to the
        // view corners — the simulator's version of the host resizing its
        // corner artwork.
        let w = cal.plane().width.max(1e-6);
        let edge_px = (cal.square_edge_length() / w * WIN_W as f32) as usize;
        if edge_px == 0 { return; }
        let edge_px = edge_px.min(VIEW_H / 2).min(WIN_W / 2);

        let pads = [
            (Quadrant::TopLeft,     0,                 0,                 HIHAT_COLOR),
            (Quadrant::TopRight,    WIN_W - edge_px,   0,                 CYMBAL_COLOR),
            (Quadrant::BottomLeft,  0,                 VIEW_H - edge_px,  SNARE_COLOR),
            (Quadrant::BottomRight, WIN_W - edge_px,   VIEW_H - edge_px,  TOM_COLOR),
        ];

        for (quadrant, x, y, color) in pads {
            let color = if quadrant == active {
                blend(color, 0xFFFFFFFF, 0.45)
            } else {
                color
            };
            self.fill_rect(x, y, edge_px, edge_px, color);
            self.draw_border(x, y, edge_px, edge_px, 0xFF000000);
            self.draw_label(quadrant.label(), x + 8, y + 8, 0xFF101018);
        }
    }

    // ── Dead-zone boundaries ──────────────────────────────────────────────

    fn draw_boundaries(&mut self, cal: &Calibration, mode: &ClassifyMode) {
        let (x_edge, y_edge) = match mode {
            ClassifyMode::GeometryRelative => {
                if !cal.plane().is_usable() { return; }
                (
                    cal.plane().width / 2.0 - cal.dead_zone().horizontal_edge,
                    cal.plane().height / 2.0 - cal.dead_zone().vertical_edge,
                )
            }
            ClassifyMode::FixedThreshold { x_threshold, y_threshold } => {
                (*x_threshold, *y_threshold)
            }
        };

        let (x0, y0) = self.to_px(cal, -x_edge, y_edge);
        let (x1, y1) = self.to_px(cal, x_edge, -y_edge);

        // Dashed verticals at ±x_edge, dashed horizontals at ±y_edge.
        for y in (0..VIEW_H).step_by(6) {
            self.set_px(x0, y as isize, BOUNDARY);
            self.set_px(x1, y as isize, BOUNDARY);
        }
        for x in (0..WIN_W).step_by(6) {
            self.set_px(x as isize, y0, BOUNDARY);
            self.set_px(x as isize, y1, BOUNDARY);
        }
    }

    // ── Pointer marker ────────────────────────────────────────────────────

    fn draw_marker(&mut self, cal: &Calibration, pipeline: &DrumPipeline) {
        let p = pipeline.projected_point();
        let (cx, cy) = self.to_px(cal, p.x, p.y);
        self.draw_diamond(cx, cy, 6, MARKER_COLOR);
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y+h).min(WIN_H) {
            for col in x..(x+w).min(WIN_W) {
                self.buf[row * WIN_W + col] = color;
            }
        }
    }

    fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for col in x..(x+w).min(WIN_W) {
            if y < WIN_H           { self.buf[y           * WIN_W + col] = color; }
            if y+h-1 < WIN_H       { self.buf[(y+h-1)     * WIN_W + col] = color; }
        }
        for row in y..(y+h).min(WIN_H) {
            if x < WIN_W           { self.buf[row * WIN_W + x    ] = color; }
            if x+w-1 < WIN_W       { self.buf[row * WIN_W + x+w-1] = color; }
        }
    }

    fn set_px(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && (x as usize) < WIN_W && y >= 0 && (y as usize) < WIN_H {
            self.buf[y as usize * WIN_W + x as usize] = color;
        }
    }

    fn draw_diamond(&mut self, cx: isize, cy: isize, r: isize, color: u32) {
        for dy in 0..=r {
            let dx = r - dy;
            for &(sx, sy) in &[
                (cx + dx, cy + dy),
                (cx - dx, cy + dy),
                (cx + dx, cy - dy),
                (cx - dx, cy - dy),
            ] {
                self.set_px(sx, sy, color);
            }
        }
    }

    /// Minimal bitmap font — 3×5 characters for label rendering.
    /// Each character is encoded as 5 rows × 3 bits.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.set_px((cx + col) as isize, (y + row) as isize, color);
                    }
                }
            }
            cx += 4; // 3 wide + 1 gap
            if cx + 4 > WIN_W { break; }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

/// Alpha-blend two ARGB colors. `t` = 0.0 → all `a`, `t` = 1.0 → all `b`.
fn blend(a: u32, b: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |ca: u32, cb: u32| (ca as f32 * (1.0-t) + cb as f32 * t) as u32;
    let ar = (a >> 16) & 0xFF; let br = (b >> 16) & 0xFF;
    let ag = (a >>  8) & 0xFF; let bg = (b >>  8) & 0xFF;
    let ab =  a        & 0xFF; let bb =  b        & 0xFF;
    0xFF000000 | (lerp(ar,br) << 16) | (lerp(ag,bg) << 8) | lerp(ab,bb)
}
