// src/progress.rs
/// Progress reporting for season loads (roster → stats → merge).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one step completes; `step` counts from 1.
    fn step_done(&mut self, _step: usize, _what: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Collects every message; handy in tests and for replaying into a status bar.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: usize,
    pub lines: Vec<String>,
    pub steps: Vec<usize>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn step_done(&mut self, step: usize, _what: &str) { self.steps.push(step); }
    fn finish(&mut self) { self.finished = true; }
}
