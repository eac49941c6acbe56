// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn step_done(&mut self, step: usize, what: &str) {
        self.done = step;
        self.set_status(format!("Done: {what} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Load complete");
        } else {
            self.set_status(format!("Load complete ({}/{})", self.done, self.total));
        }
    }
}
