use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::SummaryMetrics;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – axis selectors
// ---------------------------------------------------------------------------

/// Render the X / Y column lists.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.heading("Columns");
        ui.separator();
        ui.label("No log loaded.");
        return;
    };

    // Clone so the lists can mutate the selection while iterating.
    let columns = dataset.column_names().to_vec();
    let half = (ui.available_height() / 2.0 - 40.0).max(80.0);

    ui.strong("X Axis");
    ScrollArea::vertical()
        .id_salt("x_axis_list")
        .max_height(half)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(state.is_x_selected(col), col).clicked() {
                    state.select_x(col);
                }
            }
        });

    ui.separator();

    ui.strong("Y Axis");
    ScrollArea::vertical()
        .id_salt("y_axis_list")
        .max_height(half)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(state.is_y_selected(col), col).clicked() {
                    state.toggle_y(col);
                }
            }
        });
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
        });

        ui.separator();

        if ui
            .selectable_label(state.selection.normalize, "Normalize")
            .clicked()
        {
            state.selection.normalize = !state.selection.normalize;
        }

        if let Some(ds) = &state.dataset {
            ui.separator();
            ui.label(format!("{} rows, {} columns", ds.len(), ds.column_count()));
            ui.separator();
            ui.label(metrics_line(&state.metrics));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn format_metric(label: &str, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{label}: {v:.2}"),
        None => format!("{label}: N/A"),
    }
}

fn metrics_line(metrics: &SummaryMetrics) -> String {
    [
        format_metric("Avg Latency", metrics.latency),
        format_metric("Avg FPS", metrics.fps),
        format_metric("Avg Frametime", metrics.frametime),
    ]
    .join("   ")
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV File")
        .add_filter("CSV Files", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match state.load_path(&path) {
            Ok(()) => {
                if let Some(ds) = &state.dataset {
                    log::info!(
                        "Loaded {} rows with columns {:?}",
                        ds.len(),
                        ds.column_names()
                    );
                }
                log::info!("{}", metrics_line(&state.metrics));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
