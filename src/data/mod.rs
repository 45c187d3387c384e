/// Data layer: log loading, column queries and chart projection.
///
/// Architecture:
/// ```text
///   frame log .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  named columns, means / maxima
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ projector  │  SeriesSelection → Projection
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod projector;
