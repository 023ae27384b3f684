// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (collection/export). Frontends implement this to surface status.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a cruise folder fetched).
    fn item_done(&mut self, _cruise_id: &str) {}

    /// Called when a unit fails; the run continues.
    fn item_failed(&mut self, _cruise_id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink for callers without a UI.
pub struct NullProgress;
impl Progress for NullProgress {}
