use crate::error::{ProjectionError, SelectionError};

use super::model::{Column, Dataset};

// ---------------------------------------------------------------------------
// Selection → renderable series
// ---------------------------------------------------------------------------

/// What the user currently has selected in the axis lists.
///
/// `x_columns` is a list so an invalid multi-selection can be reported rather
/// than silently truncated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSelection {
    pub x_columns: Vec<String>,
    pub y_columns: Vec<String>,
    pub normalize: bool,
}

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSeries {
    pub label: String,
    /// `[x, y]` per dataset row; absent cells are `NaN`.
    pub points: Vec<[f64; 2]>,
}

impl RenderedSeries {
    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[1])
    }
}

/// Everything the renderer needs for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub series: Vec<RenderedSeries>,
    pub x_label: String,
    pub normalized: bool,
}

impl Projection {
    pub fn title(&self) -> &'static str {
        if self.normalized {
            "Normalized Line Graph"
        } else {
            "Line Graph"
        }
    }

    pub fn y_label(&self) -> &'static str {
        if self.normalized {
            "Normalized Values"
        } else {
            "Values"
        }
    }
}

/// Build the chart for `selection`. Pure: the same inputs always give the same
/// output, and any error aborts the whole projection.
pub fn project(dataset: &Dataset, selection: &SeriesSelection) -> Result<Projection, ProjectionError> {
    let [x_name] = selection.x_columns.as_slice() else {
        return Err(SelectionError::NoOrMultipleXAxis.into());
    };
    if selection.y_columns.is_empty() {
        return Err(SelectionError::NoYAxis.into());
    }

    let x_col = lookup(dataset, x_name)?;
    let y_cols = selection
        .y_columns
        .iter()
        .map(|name| lookup(dataset, name))
        .collect::<Result<Vec<_>, _>>()?;

    let series = y_cols
        .into_iter()
        .map(|y_col| project_series(x_col, y_col, selection.normalize))
        .collect();

    Ok(Projection {
        series,
        x_label: x_name.clone(),
        normalized: selection.normalize,
    })
}

fn lookup<'a>(dataset: &'a Dataset, name: &str) -> Result<&'a Column, ProjectionError> {
    dataset
        .column(name)
        .ok_or_else(|| ProjectionError::UnknownColumn(name.to_string()))
}

fn project_series(x_col: &Column, y_col: &Column, normalize: bool) -> RenderedSeries {
    // A zero (or missing) maximum leaves the values raw instead of producing
    // Inf/NaN.
    let divisor = if normalize {
        y_col.max().filter(|&m| m != 0.0)
    } else {
        None
    };

    let points = x_col
        .values
        .iter()
        .zip(&y_col.values)
        .map(|(x, y)| {
            let y = y.map(|v| divisor.map_or(v, |m| v / m));
            [x.unwrap_or(f64::NAN), y.unwrap_or(f64::NAN)]
        })
        .collect();

    let label = if normalize {
        format!("{} (Normalized)", y_col.name)
    } else {
        y_col.name.clone()
    };

    RenderedSeries { label, points }
}
