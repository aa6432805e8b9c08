use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Group label for rows whose host star has no spectral type.
pub const UNKNOWN_SPECTRAL_TYPE: &str = "unknown";

/// Columns every catalog file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "pl_name",
    "pl_orbper",
    "pl_orbsmax",
    "pl_rade",
    "st_spectype",
];

// ---------------------------------------------------------------------------
// ExoplanetRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single planet as listed in the NASA Exoplanet Archive column layout.
///
/// Every field may be missing in real exports; an unparseable cell becomes
/// `None` for that row only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetRecord {
    #[serde(rename = "pl_name", default)]
    pub name: Option<String>,
    /// Orbital period in days.
    #[serde(rename = "pl_orbper", default, deserialize_with = "csv::invalid_option")]
    pub orbital_period: Option<f64>,
    /// Orbit semi-major axis in AU.
    #[serde(rename = "pl_orbsmax", default, deserialize_with = "csv::invalid_option")]
    pub semi_major_axis: Option<f64>,
    /// Planet radius in Earth radii.
    #[serde(rename = "pl_rade", default, deserialize_with = "csv::invalid_option")]
    pub radius: Option<f64>,
    #[serde(rename = "st_spectype", default)]
    pub spectral_type: Option<String>,
}

impl ExoplanetRecord {
    /// Name shown in legends and tables.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Group label for the statistics scatter.
    pub fn spectral_label(&self) -> &str {
        self.spectral_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SPECTRAL_TYPE)
    }

    /// Semi-major axis if the catalog has a usable one, else `fallback`.
    pub fn orbit_radius_or(&self, fallback: f64) -> f64 {
        match self.semi_major_axis {
            Some(a) if a.is_finite() => a,
            _ => fallback,
        }
    }

    /// `(period, radius)` when both are present and finite.
    pub fn period_radius(&self) -> Option<[f64; 2]> {
        let period = self.orbital_period.filter(|p| p.is_finite())?;
        let radius = self.radius.filter(|r| r.is_finite())?;
        Some([period, radius])
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed catalog with pre-computed spectral-type index.
///
/// Never mutated after construction; consumers share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// All planets (rows), in file order.
    pub records: Vec<ExoplanetRecord>,
    /// Sorted set of spectral-type labels present in `records`.
    pub spectral_types: BTreeSet<String>,
}

impl Catalog {
    /// Build the spectral-type index from the loaded records.
    pub fn from_records(records: Vec<ExoplanetRecord>) -> Self {
        let spectral_types = records
            .iter()
            .map(|r| r.spectral_label().to_string())
            .collect();
        Catalog {
            records,
            spectral_types,
        }
    }

    /// Copy of the rows at `indices`, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Catalog {
        let records = indices
            .iter()
            .filter_map(|&i| self.records.get(i).cloned())
            .collect();
        Catalog::from_records(records)
    }

    /// Number of planets.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(name: Option<&str>, smax: Option<f64>, spec: Option<&str>) -> ExoplanetRecord {
        ExoplanetRecord {
            name: name.map(str::to_string),
            orbital_period: Some(10.0),
            semi_major_axis: smax,
            radius: Some(1.0),
            spectral_type: spec.map(str::to_string),
        }
    }

    #[test]
    fn orbit_radius_falls_back_when_missing_or_nan() {
        assert_eq!(planet(None, Some(0.3), None).orbit_radius_or(0.1), 0.3);
        assert_eq!(planet(None, None, None).orbit_radius_or(0.1), 0.1);
        assert_eq!(planet(None, Some(f64::NAN), None).orbit_radius_or(0.1), 0.1);
    }

    #[test]
    fn spectral_types_are_indexed_with_unknown_bucket() {
        let catalog = Catalog::from_records(vec![
            planet(Some("a"), None, Some("M8V")),
            planet(Some("b"), None, Some("G2V")),
            planet(Some("c"), None, None),
            planet(Some("d"), None, Some("  ")),
            planet(Some("e"), None, Some("M8V")),
        ]);
        let types: Vec<&str> = catalog.spectral_types.iter().map(String::as_str).collect();
        assert_eq!(types, vec!["G2V", "M8V", UNKNOWN_SPECTRAL_TYPE]);
    }

    #[test]
    fn subset_keeps_order_and_ignores_out_of_range() {
        let catalog = Catalog::from_records(vec![
            planet(Some("a"), None, Some("K")),
            planet(Some("b"), None, Some("G")),
            planet(Some("c"), None, Some("M")),
        ]);
        let sub = catalog.subset(&[2, 0, 7]);
        let names: Vec<&str> = sub.records.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, vec!["c", "a"]);
        assert!(!sub.spectral_types.contains("G"));
    }

    #[test]
    fn period_radius_requires_both_values() {
        let mut p = planet(Some("a"), None, None);
        assert_eq!(p.period_radius(), Some([10.0, 1.0]));
        p.radius = None;
        assert_eq!(p.period_radius(), None);
        assert_eq!(p.display_name(), "a");
        assert_eq!(ExoplanetRecord::default().display_name(), "<unnamed>");
    }
}
