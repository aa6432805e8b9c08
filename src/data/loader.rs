use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Catalog, ExoplanetRecord, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Schema-level problems with a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Result of the startup load: always a catalog, plus a notice on failure.
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub warning: Option<String>,
}

/// Load the catalog, degrading to an empty one if anything goes wrong.
pub fn load_or_empty(path: &Path) -> CatalogLoad {
    match load_file(path) {
        Ok(catalog) => {
            log::info!(
                "Loaded {} planets from {} ({} spectral types)",
                catalog.len(),
                path.display(),
                catalog.spectral_types.len()
            );
            CatalogLoad {
                catalog,
                warning: None,
            }
        }
        Err(e) => {
            let warning = match e.downcast_ref::<CatalogError>() {
                Some(CatalogError::NotFound(_)) => format!(
                    "Data file '{}' not found. Showing demo mode.",
                    path.display()
                ),
                _ => format!("Could not load '{}': {e:#}. Showing demo mode.", path.display()),
            };
            log::warn!("{warning}");
            CatalogLoad {
                catalog: Catalog::default(),
                warning: Some(warning),
            }
        }
    }
}

/// Load an exoplanet catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – NASA Exoplanet Archive export; `#` lines are comments
/// * `.json`    – `[{ "pl_name": ..., "pl_orbper": ..., ... }, ...]`
/// * `.parquet` – one scalar column per field
pub fn load_file(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()).into());
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(CatalogError::UnsupportedExtension(other.to_string()).into()),
    }
}

/// Fail with the first required column not present in `columns`.
fn check_columns(columns: &[&str]) -> Result<(), CatalogError> {
    for required in REQUIRED_COLUMNS {
        if !columns.contains(&required) {
            return Err(CatalogError::MissingColumn(required));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header row with at least the required columns; extra columns are ignored.
/// Empty or non-numeric cells in numeric columns load as missing values, and
/// short rows are padded with missing values.
fn load_csv(path: &Path) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_columns(&headers.iter().collect::<Vec<_>>())?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<ExoplanetRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV data row {}", row_no + 1))?;
        records.push(record);
    }

    Ok(Catalog::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "pl_name": "TRAPPIST-1 b", "pl_orbper": 1.51, "pl_orbsmax": 0.0115,
///     "pl_rade": 1.12, "st_spectype": "M8V" },
///   ...
/// ]
/// ```
///
/// Elements that do not decode as a record are skipped with a warning.
fn load_json(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;
    if !rows.is_empty() {
        let keys: Vec<&str> = rows
            .iter()
            .filter_map(|r| r.as_object())
            .flat_map(|obj| obj.keys().map(String::as_str))
            .collect();
        check_columns(&keys)?;
    }

    let mut records = Vec::with_capacity(rows.len());
    for (row_no, row) in rows.iter().enumerate() {
        match ExoplanetRecord::deserialize(row) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Skipping JSON record {}: {e}", row_no + 1),
        }
    }
    Ok(Catalog::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one scalar column per catalog field.
///
/// Numeric columns may be any integer or float type and are widened to
/// `f64`; values that cannot be cast load as missing.
fn load_parquet(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let fields: Vec<&str> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect();
    check_columns(&fields)?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        records.extend(batch_records(&batch)?);
    }

    Ok(Catalog::from_records(records))
}

// -- Parquet / Arrow helpers --

fn batch_records(batch: &RecordBatch) -> Result<Vec<ExoplanetRecord>> {
    let names = string_column(batch, "pl_name")?;
    let periods = f64_column(batch, "pl_orbper")?;
    let axes = f64_column(batch, "pl_orbsmax")?;
    let radii = f64_column(batch, "pl_rade")?;
    let spectral = string_column(batch, "st_spectype")?;

    Ok((0..batch.num_rows())
        .map(|row| ExoplanetRecord {
            name: names[row].clone(),
            orbital_period: periods[row],
            semi_major_axis: axes[row],
            radius: radii[row],
            spectral_type: spectral[row].clone(),
        })
        .collect())
}

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| CatalogError::MissingColumn(name))?;
    Ok(batch.column(idx))
}

/// Extract a column as `f64`, widening ints and floats.
fn f64_column(batch: &RecordBatch, name: &'static str) -> Result<Vec<Option<f64>>> {
    let col = cast(column(batch, name)?.as_ref(), &DataType::Float64)
        .with_context(|| format!("casting '{name}' to Float64"))?;
    let values = col.as_primitive::<Float64Type>();
    Ok((0..values.len())
        .map(|i| (!values.is_null(i)).then(|| values.value(i)))
        .collect())
}

/// Extract a column as text; empty strings count as missing.
fn string_column(batch: &RecordBatch, name: &'static str) -> Result<Vec<Option<String>>> {
    let col = cast(column(batch, name)?.as_ref(), &DataType::Utf8)
        .with_context(|| format!("casting '{name}' to Utf8"))?;
    let values = col.as_string::<i32>();
    Ok((0..values.len())
        .map(|i| {
            (!values.is_null(i))
                .then(|| values.value(i).trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .collect())
}
