use eframe::egui::{RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::generate_palette;
use crate::data::projector::Projection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the chart for the current selection, or a hint explaining why
/// there is none.
pub fn line_chart(ui: &mut Ui, state: &AppState) {
    let projection = match state.projection() {
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV file to view frame data  (File → Open…)");
            });
            return;
        }
        Some(Err(e)) => {
            log::debug!("No chart: {e}");
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(e.to_string());
            });
            return;
        }
        Some(Ok(p)) => p,
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(projection.title()).heading());
    });
    draw(ui, &projection);
}

fn draw(ui: &mut Ui, projection: &Projection) {
    let colors = generate_palette(projection.series.len());

    Plot::new("line_chart")
        .legend(Legend::default())
        .x_axis_label(projection.x_label.clone())
        .y_axis_label(projection.y_label())
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (series, &color) in projection.series.iter().zip(colors.iter()) {
                for segment in segments(&series.points) {
                    let line = Line::new(PlotPoints::from(segment))
                        .name(&series.label)
                        .color(color)
                        .width(1.5);
                    plot_ui.line(line);
                }
            }
        });
}

/// Split a series at absent points so gaps are drawn as breaks in the line.
/// Segments sharing a name collapse into one legend entry.
fn segments(points: &[[f64; 2]]) -> Vec<Vec<[f64; 2]>> {
    points
        .split(|p| p[0].is_nan() || p[1].is_nan())
        .filter(|s| !s.is_empty())
        .map(<[[f64; 2]]>::to_vec)
        .collect()
}
