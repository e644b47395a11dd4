// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::GameOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Right-hand group statistics panel
    pub show_stats: bool,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            show_stats: false,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: GameOptions,
    pub gui: GuiState,
}
