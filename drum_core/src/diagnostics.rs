//! Write-only diagnostics sink.
//!
//! Hosts hand the pipeline something to log into; the pipeline never reads
//! back and never fails because of it. `watch` mirrors the debug-watch
//! style of AR hosts: a named value updated as it changes.

// ════════════════════════════════════════════════════════════════════════════
// Diagnostics trait
// ════════════════════════════════════════════════════════════════════════════

/// A non-blocking, infallible diagnostics target.
pub trait Diagnostics: Send {
    fn log(&mut self, msg: &str);
    fn watch(&mut self, name: &str, value: f32);
}

/// Swallows everything; the default for production hosts.
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn log(&mut self, _msg: &str) {}
    fn watch(&mut self, _name: &str, _value: f32) {}
}

/// Prints to stderr, prefixed so host output stays greppable.
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn log(&mut self, msg: &str) {
        eprintln!("[drum] {}", msg);
    }
    fn watch(&mut self, name: &str, value: f32) {
        eprintln!("[drum] {} = {:.4}", name, value);
    }
}
