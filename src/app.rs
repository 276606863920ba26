use eframe::egui;

use crate::data::model::{LaunchDataset, SiteSelection};
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpaceXDashApp {
    pub state: AppState,
}

impl SpaceXDashApp {
    pub fn new(dataset: LaunchDataset, initial_site: SiteSelection) -> Self {
        let mut state = AppState::new(dataset);
        state.apply_initial_site(initial_site);
        Self { state }
    }
}

impl eframe::App for SpaceXDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered launches ----
        egui::TopBottomPanel::bottom("launch_table")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                table::launch_table(ui, &self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::charts(ui, &self.state);
        });
    }
}
