use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};
use crate::export::{self, DashboardSnapshot};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the two controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.separator();

    // ---- Site selector (searchable) ----
    let mut query = std::mem::take(&mut state.site_search);
    let mut chosen = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.selector.site.display_label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(egui::TextEdit::singleline(&mut query).hint_text("Select a Launch Site here"));
            let options = state.dataset.sites().filtered_options(&query);
            if options.is_empty() {
                ui.weak("No matching site");
            }
            for option in &options {
                let selected = state.selector.site == *option;
                if ui.selectable_label(selected, option.display_label()).clicked() {
                    chosen = Some(option.clone());
                }
            }
        });
    state.site_search = query;
    if let Some(site) = chosen {
        state.site_search.clear();
        state.set_site(site);
    }

    ui.add_space(12.0);

    // ---- Payload range: two handles over a fixed 0..10000 span ----
    ui.strong("Payload range (Kg)");
    let mut low = state.selector.payload_range.low();
    let mut high = state.selector.payload_range.high();
    let range = PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX;
    if ui
        .add(egui::Slider::new(&mut low, range.clone()).step_by(PAYLOAD_SLIDER_STEP).text("min"))
        .changed()
    {
        state.set_payload_low(low);
    }
    if ui
        .add(egui::Slider::new(&mut high, range).step_by(PAYLOAD_SLIDER_STEP).text("max"))
        .changed()
    {
        state.set_payload_high(high);
    }

    ui.add_space(12.0);
    ui.separator();

    // ---- Dataset summary ----
    ui.strong("Dataset");
    let bounds = state.dataset.payload_bounds();
    ui.label(format!("{} launches", state.dataset.len()));
    ui.label(format!("{} launch sites", state.dataset.sites().len()));
    ui.label(format!("Payload {:.0} – {:.0} kg", bounds.min, bounds.max));
    ui.label(RichText::new(&state.dataset.source).small().weak());

    ui.add_space(12.0);
    ui.separator();

    // ---- Booster colour legend ----
    ui.strong("Booster Version Category");
    for (category, color) in state.color_map.legend_entries() {
        ui.label(RichText::new(format!("● {category}")).color(color));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let in_view = state.scatter.as_ref().map_or(0, |s| s.points.len());
        ui.label(format!(
            "{} launches loaded, {} in payload range",
            state.dataset.len(),
            in_view
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

/// Load another launch table. A failed load keeps the current dataset.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

/// Write the current selector and both charts to a JSON file.
pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export charts")
        .set_file_name("spacex_dash_charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        let snapshot = DashboardSnapshot {
            source: &state.dataset.source,
            selector: &state.selector,
            pie: state.pie.as_ref(),
            scatter: state.scatter.as_ref(),
        };
        if let Err(e) = export::write_json(&path, &snapshot) {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
