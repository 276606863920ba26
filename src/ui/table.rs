use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const HEADERS: [&str; 6] = [
    "Flight",
    "Launch Site",
    "Payload Mass (kg)",
    "Outcome",
    "Booster Version",
    "Booster Version Category",
];

/// Table of the launches currently shown in the scatter plot.
pub fn launch_table(ui: &mut Ui, state: &AppState) {
    let Some(scatter) = &state.scatter else {
        return;
    };
    let rows = &scatter.points;

    ui.strong(format!("{} launches in view", rows.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let launch = &rows[row.index()];
                row.col(|ui| {
                    if let Some(flight) = launch.flight_number {
                        ui.label(flight.to_string());
                    }
                });
                row.col(|ui| {
                    ui.label(&launch.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", launch.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(launch.outcome.label());
                });
                row.col(|ui| {
                    ui.label(launch.booster_version.as_deref().unwrap_or("–"));
                });
                row.col(|ui| {
                    let color = state.color_map.color_for(&launch.booster_category);
                    ui.label(RichText::new(&launch.booster_category).color(color));
                });
            });
        });
}
