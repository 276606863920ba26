mod app;
mod chart;
mod color;
mod config;
mod data;
mod export;
mod state;
mod ui;

use anyhow::{Context, Result, anyhow};
use app::SpaceXDashApp;
use config::DashConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashConfig::from_env();

    // No data, no dashboard.
    let dataset = data::loader::load_file(&config.data_path)
        .inspect_err(|e| log::error!("Cannot start dashboard: {e}"))
        .with_context(|| format!("loading launch records from {}", config.data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let initial_site = config.initial_site;
    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SpaceXDashApp::new(dataset, initial_site)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
