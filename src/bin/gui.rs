// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use nyc_procurement::{
    config::{
        consts::{CONFIG_FILE, LOG_FILE},
        options::{AppOptions, load_options},
        state::GuiState,
    },
    gui, log,
};

fn main() {
    if let Err(e) = log::init(Some(Path::new(LOG_FILE))) {
        eprintln!("Logging disabled: {e}");
    }

    // A broken config should not keep the window from opening.
    let options = load_options(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
        eprintln!("Config error, using defaults: {e}");
        nyc_procurement::loge!("Config: {}", e);
        AppOptions::default()
    });

    let size = GuiState::default();
    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("NYC Procurement")
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
