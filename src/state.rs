use std::path::Path;

use anyhow::{Context, Result};

use crate::data::loader::load_csv;
use crate::data::model::{Dataset, SummaryMetrics};
use crate::data::projector::{Projection, SeriesSelection, project};
use crate::error::ProjectionError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded log (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Averages of the well-known columns, computed once per load.
    pub metrics: SummaryMetrics,

    /// Current axis choices and the normalization toggle.
    pub selection: SeriesSelection,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            metrics: SummaryMetrics::default(),
            selection: SeriesSelection {
                normalize: true,
                ..Default::default()
            },
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the axis lists.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.metrics = dataset.summary_metrics();
        self.selection.x_columns.clear();
        self.selection.y_columns.clear();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Load `path` and swap it in. On failure the current dataset and
    /// selections are left untouched.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let dataset = load_csv(path).with_context(|| format!("loading {}", path.display()))?;
        self.set_dataset(dataset);
        Ok(())
    }

    /// Single-select the X column; picking the current one clears it.
    pub fn select_x(&mut self, column: &str) {
        let already = self.selection.x_columns.len() == 1 && self.selection.x_columns[0] == column;
        self.selection.x_columns.clear();
        if !already {
            self.selection.x_columns.push(column.to_string());
        }
    }

    /// Toggle a Y column, keeping the order in which columns were picked.
    pub fn toggle_y(&mut self, column: &str) {
        if let Some(pos) = self.selection.y_columns.iter().position(|c| c == column) {
            self.selection.y_columns.remove(pos);
        } else {
            self.selection.y_columns.push(column.to_string());
        }
    }

    pub fn is_x_selected(&self, column: &str) -> bool {
        self.selection.x_columns.iter().any(|c| c == column)
    }

    pub fn is_y_selected(&self, column: &str) -> bool {
        self.selection.y_columns.iter().any(|c| c == column)
    }

    /// Chart for the current selection, `None` until a file is loaded.
    pub fn projection(&self) -> Option<Result<Projection, ProjectionError>> {
        self.dataset
            .as_ref()
            .map(|ds| project(ds, &self.selection))
    }
}
