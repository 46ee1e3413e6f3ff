// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use matchstats::{config, gui};

fn main() {
    let state = config::file::load();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(state, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
