// src/progress.rs

/// Lightweight status reporting used by the search path.
/// Frontends (GUI/CLI) implement this to surface progress to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once at the end, successful or not.
    fn finish(&mut self, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
