// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use polidle::{
    config::{consts::CONFIG_FILE, file, state::AppState},
    gui,
};

fn main() {
    let mut state = AppState::default();
    state.options = file::load(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Polidle")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
