/// Data layer: catalog types, loading, filtering, and export.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog (empty + warning on failure)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  Vec<ExoplanetRecord>, spectral-type index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  system-name substring → selected rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  period vs radius, grouped by spectral type
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
