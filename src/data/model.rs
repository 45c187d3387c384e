// ---------------------------------------------------------------------------
// Well-known FrameView columns
// ---------------------------------------------------------------------------

pub const LATENCY_COLUMN: &str = "MsRenderPresentLatency";
pub const FPS_COLUMN: &str = "FPS";
pub const FRAMETIME_COLUMN: &str = "Frametime";

// ---------------------------------------------------------------------------
// Column – one named column of the log
// ---------------------------------------------------------------------------

/// A named column. `None` cells were empty or not numeric in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Present (numeric) cells only.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// Arithmetic mean of the present cells, `None` if there are none.
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .present()
            .fold((0.0_f64, 0_usize), |(s, n), v| (s + v, n + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Largest present cell, `None` if there are none.
    pub fn max(&self) -> Option<f64> {
        self.present().reduce(f64::max)
    }
}

// ---------------------------------------------------------------------------
// SummaryMetrics – headline averages shown after a load
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryMetrics {
    pub latency: Option<f64>,
    pub fps: Option<f64>,
    pub frametime: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded log
// ---------------------------------------------------------------------------

/// The parsed log: columns in file order, all of the same length.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    column_names: Vec<String>,
    row_count: usize,
}

impl Dataset {
    /// Callers must supply uniquely named columns of equal length.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map_or(0, |c| c.values.len());
        debug_assert!(columns.iter().all(|c| c.values.len() == row_count));
        let column_names = columns.iter().map(|c| c.name.clone()).collect();
        Dataset {
            columns,
            column_names,
            row_count,
        }
    }

    /// Column names in file order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mean(&self, name: &str) -> Option<f64> {
        self.column(name)?.mean()
    }

    pub fn column_max(&self, name: &str) -> Option<f64> {
        self.column(name)?.max()
    }

    pub fn summary_metrics(&self) -> SummaryMetrics {
        SummaryMetrics {
            latency: self.column_mean(LATENCY_COLUMN),
            fps: self.column_mean(FPS_COLUMN),
            frametime: self.column_mean(FRAMETIME_COLUMN),
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, values: &[Option<f64>]) -> Column {
        Column::new(name, values.to_vec())
    }

    #[test]
    fn test_column_names_keep_file_order() {
        let ds = Dataset::from_columns(vec![
            col("TimeInSeconds", &[Some(0.0)]),
            col("FPS", &[Some(60.0)]),
            col("Application", &[None]),
        ]);
        assert_eq!(ds.column_names(), ["TimeInSeconds", "FPS", "Application"]);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.column_count(), 3);
    }

    #[test]
    fn test_mean_skips_absent_cells() {
        let ds = Dataset::from_columns(vec![col(
            "FPS",
            &[Some(30.0), None, Some(90.0), None],
        )]);
        assert_eq!(ds.column_mean("FPS"), Some(60.0));
    }

    #[test]
    fn test_mean_of_unknown_column_is_absent() {
        let ds = Dataset::from_columns(vec![col("FPS", &[Some(1.0)])]);
        assert_eq!(ds.column_mean("Frametime"), None);
    }

    #[test]
    fn test_mean_of_zero_is_not_absent() {
        let ds = Dataset::from_columns(vec![col("Delta", &[Some(-2.0), Some(2.0), Some(0.0)])]);
        assert_eq!(ds.column_mean("Delta"), Some(0.0));
    }

    #[test]
    fn test_mean_of_all_absent_column_is_absent() {
        let ds = Dataset::from_columns(vec![col("Application", &[None, None])]);
        assert_eq!(ds.column_mean("Application"), None);
        assert_eq!(ds.column_max("Application"), None);
    }

    #[test]
    fn test_max_skips_absent_cells() {
        let ds = Dataset::from_columns(vec![col("GPU", &[Some(-4.0), None, Some(-1.5)])]);
        assert_eq!(ds.column_max("GPU"), Some(-1.5));
    }

    #[test]
    fn test_summary_metrics() {
        let ds = Dataset::from_columns(vec![
            col(FPS_COLUMN, &[Some(50.0), Some(70.0)]),
            col(FRAMETIME_COLUMN, &[Some(20.0), None]),
        ]);
        let metrics = ds.summary_metrics();
        assert_eq!(metrics.fps, Some(60.0));
        assert_eq!(metrics.frametime, Some(20.0));
        assert_eq!(metrics.latency, None);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::from_columns(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.column_names().is_empty());
        assert_eq!(ds.summary_metrics(), SummaryMetrics::default());
    }
}
