// src/config/state.rs
use super::consts::{DEFAULT_WINDOW_H, DEFAULT_WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: DEFAULT_WINDOW_W,
            window_h: DEFAULT_WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
