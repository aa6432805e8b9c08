use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const HEADERS: [&str; 5] = [
    "Name",
    "Period (days)",
    "Semi-major axis (AU)",
    "Radius (Earth radii)",
    "Spectral type",
];

fn format_value(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "-".to_string())
}

/// Table of the rows in the selected system.
pub fn catalog_table(ui: &mut Ui, state: &AppState) {
    let rows = &state.scene.system.records;
    if rows.is_empty() {
        ui.label("No catalog rows selected.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(90.0), HEADERS.len() - 1)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let record = &rows[row.index()];
                row.col(|ui| {
                    ui.label(record.display_name());
                });
                row.col(|ui| {
                    ui.label(format_value(record.orbital_period));
                });
                row.col(|ui| {
                    ui.label(format_value(record.semi_major_axis));
                });
                row.col(|ui| {
                    ui.label(format_value(record.radius));
                });
                row.col(|ui| {
                    let label = record.spectral_label();
                    ui.label(RichText::new(label).color(state.color_map.color_for(label)));
                });
            });
        });
}
