use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::sim::transit::LightCurve;

/// One exported light-curve sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightCurveRow {
    pub time_days: f64,
    pub relative_brightness: f64,
}

fn rows(curve: &LightCurve) -> impl Iterator<Item = LightCurveRow> + '_ {
    curve.points().map(|[t, b]| LightCurveRow {
        time_days: t,
        relative_brightness: b,
    })
}

/// Write a light curve to disk.  Dispatch by extension.
///
/// * `.csv`  – header `time_days,relative_brightness`
/// * `.json` – pretty-printed array of the same records
pub fn export_light_curve(path: &Path, curve: &LightCurve) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
            for row in rows(curve) {
                writer.serialize(row).context("writing CSV row")?;
            }
            writer.flush().context("flushing CSV")?;
        }
        "json" => {
            let file = File::create(path).context("creating JSON file")?;
            let records: Vec<LightCurveRow> = rows(curve).collect();
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &records).context("writing JSON")?;
            writer.flush().context("flushing JSON")?;
        }
        other => bail!("Unsupported export extension: .{other}"),
    }

    log::info!("Exported {} light-curve samples to {}", curve.sample_count(), path.display());
    Ok(())
}
