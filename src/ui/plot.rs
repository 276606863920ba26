use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Corner, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::palette_color;
use crate::data::model::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: pie on top, scatter below
// ---------------------------------------------------------------------------

/// Render both charts in the central panel.
pub fn charts(ui: &mut Ui, state: &AppState) {
    // Heading + caption of each chart take roughly this much.
    let chrome = 64.0;
    let chart_height = ((ui.available_height() - 2.0 * chrome) / 2.0).max(120.0);

    success_pie(ui, state, chart_height);
    ui.separator();
    payload_scatter(ui, state, chart_height);
}

/// Success pie chart.
pub fn success_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(pie) = &state.pie else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Pie chart unavailable for this selection.");
        });
        return;
    };

    ui.heading(&pie.title);
    let wedges = pie.wedges();
    let n_slices = pie.slices.len();

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.6)
        .include_x(1.6)
        .include_y(-1.1)
        .include_y(1.1)
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            if wedges.is_empty() {
                plot_ui.text(Text::new(PlotPoint::new(0.0, 0.0), "No successful launches"));
                return;
            }
            for wedge in &wedges {
                let slice = &pie.slices[wedge.slice];
                let color = palette_color(wedge.slice, n_slices);
                // Parts share a name so the legend shows one entry per slice.
                for part in wedge.convex_parts() {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(part))
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color))
                            .name(&slice.label),
                    );
                }
                let [x, y] = wedge.label_anchor();
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(format!("{:.1}%", wedge.fraction * 100.0))
                        .color(Color32::WHITE)
                        .strong(),
                ));
            }
        });

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for slice in &pie.slices {
            ui.label(format!("{}: {}", slice.label, slice.count));
        }
    });
}

/// Payload vs. launch outcome scatter plot, coloured by booster category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(scatter) = &state.scatter else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Scatter chart unavailable for this selection.");
        });
        return;
    };

    ui.heading(&scatter.title);

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default().position(Corner::RightBottom))
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(PAYLOAD_SLIDER_MIN)
        .include_x(PAYLOAD_SLIDER_MAX)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\npayload = {:.0} kg\nclass = {:.0}", value.x, value.y)
            }
        })
        .show(ui, |plot_ui| {
            for (category, rows) in scatter.by_category() {
                let points: PlotPoints = rows
                    .iter()
                    .map(|r| [r.payload_mass_kg, f64::from(r.outcome.class())])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .color(state.color_map.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0)
                        .name(category),
                );
            }
        });

    if scatter.points.is_empty() {
        ui.label(RichText::new("No launches in the selected payload range.").weak());
    }
}
