//! drum_sim — interactive entry point.

use std::io::{self, Write};
use std::time::Duration;

use drum_core::{ClassifyMode, DrumConfig};
use drum_sim::app::{run, SimConfig};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Face Drum — pose-to-quadrant strike simulator         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Steer a virtual drumstick with the arrow keys; entering a");
    println!("  corner pad strikes its drum once, exactly on the transition.");
    println!();

    let cfg = if std::env::args().any(|a| a == "--quick") {
        println!("  Quick-start: geometry-relative mode, reference dead zone\n");
        SimConfig::default()
    } else {
        configure_interactively()
    };

    println!();
    println!("  Opening simulator window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure_interactively() -> SimConfig {
    println!("  Classification mode:");
    println!("    1) geometry-relative (dead zone from plane dimensions)");
    println!("    2) fixed thresholds on (x, y)");
    let mode = match read_line("  Mode (default 1): ").trim() {
        "2" => {
            let x = read_f32("  x threshold (default 0.02): ", 0.02);
            let y = read_f32("  y threshold (default 0.04): ", 0.04);
            ClassifyMode::FixedThreshold { x_threshold: x, y_threshold: y }
        }
        _ => ClassifyMode::GeometryRelative,
    };

    let mut drum = DrumConfig { mode, ..DrumConfig::default() };

    if matches!(mode, ClassifyMode::GeometryRelative) {
        drum.horizontal_multiple =
            read_f32("  Horizontal dead-space multiple (default 0.8): ", 0.8);
        drum.vertical_multiple =
            read_f32("  Vertical dead-space multiple (default 0.7): ", 0.7);
    }

    drum.pointer.length =
        read_f32("  Drumstick length in world units (default 0.24): ", 0.24);

    let dwell_ms: u64 = read_line("  Minimum dwell between strikes, ms (default 0 = off): ")
        .trim().parse().unwrap_or(0);
    drum.min_dwell = if dwell_ms > 0 {
        Some(Duration::from_millis(dwell_ms))
    } else {
        None
    };

    let debug = read_line("  Diagnostics to stderr? (y/N): ")
        .trim().eq_ignore_ascii_case("y");

    SimConfig { drum, debug }
}

fn read_f32(prompt: &str, default: f32) -> f32 {
    let v = read_line(prompt).trim().parse().unwrap_or(default);
    if v.is_finite() { v } else { default }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
