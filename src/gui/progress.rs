// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap() = msg.into();
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn finish(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
}
