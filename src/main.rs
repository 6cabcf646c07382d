mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::TipviewApp;
use eframe::egui;
use state::AppState;

/// Table loaded at startup; File → Open can replace it later.
const DEFAULT_DATA_PATH: &str = "data/tips.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let mut app_state = AppState::default();
    match data::loader::load_file(Path::new(DEFAULT_DATA_PATH)) {
        Ok(dataset) => app_state.set_dataset(dataset),
        // Startup load is best-effort; the viewer starts with an empty table.
        Err(e) => log::warn!("Could not load {DEFAULT_DATA_PATH}: {e:#}"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 520.0])
            .with_min_inner_size([640.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tipview – Group Averages",
        options,
        Box::new(|_cc| Ok(Box::new(TipviewApp::new(app_state)))),
    )
}
