#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // no console window in release
// Entry point stays small: logger, config, window options, then the app.

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod app;
mod celebration;
mod interaction;
mod logger;
mod render;
mod style;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // In-app logger (also mirrors to stderr on request)
    logger::init();
    app::config::load_config_from_disk();
    let cfg = app::config::with_config(|c| c.clone());

    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_title(ui_constants::WINDOW_TITLE)
            .with_inner_size(cfg.window_size())
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        ui_constants::WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(app::ValentineApp::new(&cfg))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
