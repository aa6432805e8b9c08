use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::print_batches;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// One catalog row in NASA Exoplanet Archive column naming.
#[derive(Serialize)]
struct Row {
    pl_name: &'static str,
    pl_orbper: Option<f64>,
    pl_orbsmax: Option<f64>,
    pl_rade: Option<f64>,
    st_spectype: Option<&'static str>,
}

const fn row(
    pl_name: &'static str,
    pl_orbper: f64,
    pl_orbsmax: Option<f64>,
    pl_rade: Option<f64>,
    st_spectype: Option<&'static str>,
) -> Row {
    Row {
        pl_name,
        pl_orbper: Some(pl_orbper),
        pl_orbsmax,
        pl_rade,
        st_spectype,
    }
}

/// A handful of well-known planets, with a few gaps left in on purpose so the
/// viewer's fallbacks have something to do.
const PLANETS: [Row; 18] = [
    row("TRAPPIST-1 b", 1.510826, Some(0.01154), Some(1.116), Some("M8V")),
    row("TRAPPIST-1 c", 2.421937, Some(0.01580), Some(1.097), Some("M8V")),
    row("TRAPPIST-1 d", 4.049219, Some(0.02227), Some(0.788), Some("M8V")),
    row("TRAPPIST-1 e", 6.101013, Some(0.02925), Some(0.920), Some("M8V")),
    row("TRAPPIST-1 f", 9.207540, Some(0.03849), Some(1.045), Some("M8V")),
    row("TRAPPIST-1 g", 12.352446, Some(0.04683), Some(1.129), Some("M8V")),
    row("TRAPPIST-1 h", 18.772866, None, Some(0.755), Some("M8V")),
    row("Kepler-452 b", 384.843, Some(1.046), Some(1.63), Some("G2V")),
    row("Proxima Cen b", 11.18427, Some(0.04856), None, Some("M5.5V")),
    row("Kepler-186 f", 129.9441, Some(0.432), Some(1.17), Some("M1V")),
    row("Kepler-22 b", 289.8623, Some(0.849), Some(2.38), Some("G5V")),
    row("HD 209458 b", 3.52474859, Some(0.04707), Some(15.4), Some("F9V")),
    row("51 Peg b", 4.230785, Some(0.0527), None, Some("G2IV")),
    row("TOI-700 d", 37.4260, Some(0.1633), Some(1.073), Some("M2V")),
    row("K2-18 b", 32.940045, Some(0.1429), Some(2.610), Some("M2.5V")),
    row("LHS 1140 b", 24.73723, Some(0.0946), Some(1.730), Some("M4.5V")),
    row("GJ 1214 b", 1.58040433, Some(0.01505), Some(2.742), Some("M4.5V")),
    row("Kepler-10 b", 0.837495, Some(0.01685), Some(1.47), None),
];

fn write_csv(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for planet in &PLANETS {
        writer.serialize(planet).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn build_batch() -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("pl_name", DataType::Utf8, false),
        Field::new("pl_orbper", DataType::Float64, true),
        Field::new("pl_orbsmax", DataType::Float64, true),
        Field::new("pl_rade", DataType::Float64, true),
        Field::new("st_spectype", DataType::Utf8, true),
    ]));

    let names = StringArray::from(PLANETS.iter().map(|p| p.pl_name).collect::<Vec<_>>());
    let periods = Float64Array::from(PLANETS.iter().map(|p| p.pl_orbper).collect::<Vec<_>>());
    let axes = Float64Array::from(PLANETS.iter().map(|p| p.pl_orbsmax).collect::<Vec<_>>());
    let radii = Float64Array::from(PLANETS.iter().map(|p| p.pl_rade).collect::<Vec<_>>());
    let spectral = StringArray::from(PLANETS.iter().map(|p| p.st_spectype).collect::<Vec<_>>());

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(names),
            Arc::new(periods),
            Arc::new(axes),
            Arc::new(radii),
            Arc::new(spectral),
        ],
    )
    .context("building record batch")
}

fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating parquet writer")?;
    writer.write(batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = Path::new("data");
    std::fs::create_dir_all(out_dir).context("creating data directory")?;

    let csv_path = out_dir.join("exoplanets.csv");
    write_csv(&csv_path)?;

    let batch = build_batch()?;
    let parquet_path = out_dir.join("exoplanets.parquet");
    write_parquet(&parquet_path, &batch)?;

    print_batches(&[batch]).context("printing batch")?;
    println!(
        "Wrote {} planets to {} and {}",
        PLANETS.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
