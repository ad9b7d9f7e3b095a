#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide the console in release
// Entry point stays minimal: window config and app launch only.
// Screen state and drawing live in the app module (src/app.rs).

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod app;
mod catalog;
mod localization;
mod logger;
mod theme;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // Logger first so settings/localization failures are captured.
    logger::init();
    app::settings::load_settings_from_disk();
    let preferred_lang = app::settings::with_settings(|s| s.language);
    if let Err(e) = localization::initialize_localization(preferred_lang) {
        log::error!("Localization initialization failed: {e}");
    }
    log::info!("UI language: {}", localization::current_language());

    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(ui_constants::WINDOW_SIZE)
            .with_min_inner_size(ui_constants::WINDOW_MIN_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|_cc| Box::new(app::CourseCardsApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
