use std::collections::BTreeMap;

use super::model::Catalog;

/// Period-vs-radius points grouped by spectral-type label.
pub type ScatterGroups = BTreeMap<String, Vec<[f64; 2]>>;

/// Group `(orbital period, planet radius)` points by host spectral type.
///
/// Rows missing either coordinate are skipped.
pub fn period_radius_by_spectral_type(catalog: &Catalog) -> ScatterGroups {
    let mut groups = ScatterGroups::new();
    for record in &catalog.records {
        if let Some(point) = record.period_radius() {
            groups
                .entry(record.spectral_label().to_string())
                .or_default()
                .push(point);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ExoplanetRecord, UNKNOWN_SPECTRAL_TYPE};

    fn row(period: Option<f64>, radius: Option<f64>, spec: Option<&str>) -> ExoplanetRecord {
        ExoplanetRecord {
            name: Some("p".into()),
            orbital_period: period,
            semi_major_axis: None,
            radius,
            spectral_type: spec.map(str::to_string),
        }
    }

    #[test]
    fn groups_points_and_skips_incomplete_rows() {
        let catalog = Catalog::from_records(vec![
            row(Some(1.5), Some(1.1), Some("M8V")),
            row(Some(6.1), Some(0.9), Some("M8V")),
            row(Some(384.8), Some(1.6), Some("G2V")),
            row(None, Some(2.0), Some("G2V")),
            row(Some(11.2), None, Some("M5.5V")),
            row(Some(3.0), Some(4.0), None),
        ]);
        let groups = period_radius_by_spectral_type(&catalog);

        assert_eq!(groups["M8V"], vec![[1.5, 1.1], [6.1, 0.9]]);
        assert_eq!(groups["G2V"], vec![[384.8, 1.6]]);
        assert_eq!(groups[UNKNOWN_SPECTRAL_TYPE], vec![[3.0, 4.0]]);
        assert!(!groups.contains_key("M5.5V"));
    }

    #[test]
    fn empty_catalog_has_no_groups() {
        assert!(period_radius_by_spectral_type(&Catalog::default()).is_empty());
    }
}
