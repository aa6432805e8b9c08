mod app;
mod color;
mod config;
mod data;
mod sim;
mod state;
mod ui;

use app::ExplorerApp;
use clap::Parser;
use config::Args;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Loaded once; every consumer shares the same read-only handle.
    let catalog_path = Args::parse().catalog;
    let load = data::loader::load_or_empty(&catalog_path);
    let state = AppState::new(load, catalog_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exoplanet Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(state)))),
    )
}
