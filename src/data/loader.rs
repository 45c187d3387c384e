use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

use crate::error::LoadError;

use super::model::{Column, Dataset};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a frame log from a comma-separated file on disk.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let reader = csv_builder().from_path(path)?;
    read_records(reader)
}

/// Parse a frame log from any reader (header row first).
pub fn read_csv<R: io::Read>(source: R) -> Result<Dataset, LoadError> {
    read_records(csv_builder().from_reader(source))
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Short rows are padded below; long rows are rejected explicitly.
    builder.has_headers(true).flexible(true);
    builder
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let raw_headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if raw_headers.is_empty() {
        return Err(LoadError::Empty);
    }
    let names = dedup_headers(&raw_headers);
    let width = names.len();

    let mut cells: Vec<Vec<Option<f64>>> = vec![Vec::new(); width];

    for result in reader.records() {
        let record = result?;
        if record.len() > width {
            return Err(LoadError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                found: record.len(),
            });
        }
        for (col_idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(col_idx).and_then(parse_cell));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();

    Ok(Dataset::from_columns(columns))
}

/// Numeric cell or absent. `NaN` text counts as absent so it never reaches
/// the aggregates.
fn parse_cell(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Make header names unique: blank names become `Unnamed: <idx>`, repeats get
/// a `.1`, `.2`, ... suffix that does not collide with an existing name.
fn dedup_headers(raw: &[String]) -> Vec<String> {
    let named: Vec<String> = raw
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            if h.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                h.clone()
            }
        })
        .collect();

    let mut taken: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(named.len());

    for name in named {
        if !taken.contains(&name) {
            taken.insert(name.clone());
            out.push(name);
            continue;
        }
        let counter = counts.entry(name.clone()).or_insert(1);
        let mut candidate = format!("{name}.{counter}");
        while taken.contains(&candidate) {
            *counter += 1;
            candidate = format!("{name}.{counter}");
        }
        *counter += 1;
        taken.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> Result<Dataset, LoadError> {
        read_csv(text.as_bytes())
    }

    #[test]
    fn test_reads_header_and_numeric_cells() {
        let ds = parse("TimeInSeconds,FPS,Frametime\n0,30,33.3\n1,60,16.6\n2,90,11.1\n").unwrap();
        assert_eq!(ds.column_names(), ["TimeInSeconds", "FPS", "Frametime"]);
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.column("FPS").unwrap().values,
            vec![Some(30.0), Some(60.0), Some(90.0)]
        );
    }

    #[test]
    fn test_non_numeric_and_empty_cells_are_absent() {
        let ds = parse("Application,FPS\ngame.exe,60\ngame.exe,\n,NaN\n, 30 \n").unwrap();
        assert_eq!(
            ds.column("Application").unwrap().values,
            vec![None, None, None, None]
        );
        assert_eq!(
            ds.column("FPS").unwrap().values,
            vec![Some(60.0), None, None, Some(30.0)]
        );
        assert_eq!(ds.column_mean("FPS"), Some(45.0));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let ds = parse("A,B,C\n1,2,3\n4\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column("C").unwrap().values, vec![Some(3.0), None]);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let err = parse("A,B\n1,2\n3,4,5\n").unwrap_err();
        match err {
            LoadError::RaggedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(parse(""), Err(LoadError::Empty)));
    }

    #[test]
    fn test_header_only_gives_empty_dataset() {
        let ds = parse("FPS,Frametime\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column_names(), ["FPS", "Frametime"]);
        assert_eq!(ds.column_mean("FPS"), None);
    }

    #[test]
    fn test_duplicate_headers_are_suffixed() {
        let ds = parse("FPS,FPS,FPS.1,FPS\n1,2,3,4\n").unwrap();
        assert_eq!(ds.column_names(), ["FPS", "FPS.1", "FPS.1.1", "FPS.2"]);
        assert_eq!(ds.column("FPS.2").unwrap().values, vec![Some(4.0)]);
    }

    #[test]
    fn test_dedup_headers_skips_taken_names() {
        let raw: Vec<String> = ["a", "a.1", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dedup_headers(&raw), ["a", "a.1", "a.2"]);
    }

    #[test]
    fn test_blank_headers_are_named_by_position() {
        let ds = parse("FPS,,Frametime\n1,2,3\n").unwrap();
        assert_eq!(ds.column_names(), ["FPS", "Unnamed: 1", "Frametime"]);
    }

    #[test]
    fn test_load_csv_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "TimeInSeconds,MsRenderPresentLatency,FPS,Frametime").unwrap();
        writeln!(file, "0.0,10,50,20").unwrap();
        writeln!(file, "0.5,20,70,14").unwrap();
        file.flush().unwrap();

        let ds = load_csv(file.path()).expect("Failed to load CSV");
        let metrics = ds.summary_metrics();
        assert_eq!(metrics.latency, Some(15.0));
        assert_eq!(metrics.fps, Some(60.0));
        assert_eq!(metrics.frametime, Some(17.0));
    }

    #[test]
    fn test_missing_file_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }
}
