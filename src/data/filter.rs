use std::fmt;

use super::model::Catalog;

// ---------------------------------------------------------------------------
// System selector: "all" or a planet-name substring
// ---------------------------------------------------------------------------

/// Which planetary system the dashboard is focused on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SystemSelector {
    /// Every row, including rows without a name.
    #[default]
    All,
    /// Rows whose name contains this text, ignoring case.
    Name(String),
}

impl SystemSelector {
    /// Parse a selector label. `all` in any case means [`SystemSelector::All`].
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("all") {
            SystemSelector::All
        } else {
            SystemSelector::Name(label.to_string())
        }
    }

    /// Whether a row with this name passes the selector.
    pub fn matches(&self, name: Option<&str>) -> bool {
        match self {
            SystemSelector::All => true,
            SystemSelector::Name(needle) => name
                .map(|n| n.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for SystemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemSelector::All => write!(f, "All"),
            SystemSelector::Name(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of planets that pass the selector.
pub fn filtered_indices(catalog: &Catalog, selector: &SystemSelector) -> Vec<usize> {
    catalog
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selector.matches(r.name.as_deref()))
        .map(|(i, _)| i)
        .collect()
}

/// The rows of `catalog` belonging to the selected system.
///
/// An empty catalog, or a selector that matches nothing, yields an empty
/// catalog rather than an error.
pub fn filter_by_system(catalog: &Catalog, selector: &SystemSelector) -> Catalog {
    match selector {
        SystemSelector::All => catalog.clone(),
        SystemSelector::Name(_) => catalog.subset(&filtered_indices(catalog, selector)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ExoplanetRecord;

    fn named(name: Option<&str>) -> ExoplanetRecord {
        ExoplanetRecord {
            name: name.map(str::to_string),
            ..Default::default()
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            named(Some("TRAPPIST-1 b")),
            named(Some("TRAPPIST-1 e")),
            named(Some("Kepler-452 b")),
            named(None),
            named(Some("Proxima Cen b")),
        ])
    }

    #[test]
    fn all_returns_full_table_unchanged() {
        let catalog = sample_catalog();
        assert_eq!(filter_by_system(&catalog, &SystemSelector::All), catalog);
        assert_eq!(filtered_indices(&catalog, &SystemSelector::All), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn substring_match_ignores_case() {
        let catalog = sample_catalog();
        let selector = SystemSelector::parse("trappist-1");
        assert_eq!(filtered_indices(&catalog, &selector), vec![0, 1]);
    }

    #[test]
    fn unnamed_rows_never_match_a_substring() {
        let catalog = sample_catalog();
        // Empty substring matches every named row but still drops the unnamed one.
        let selector = SystemSelector::Name(String::new());
        assert_eq!(filtered_indices(&catalog, &selector), vec![0, 1, 2, 4]);
    }

    #[test]
    fn no_match_yields_empty_table() {
        let catalog = sample_catalog();
        let filtered = filter_by_system(&catalog, &SystemSelector::parse("Proxima Centauri"));
        assert!(filtered.is_empty());
        assert!(filter_by_system(&Catalog::default(), &SystemSelector::parse("Kepler")).is_empty());
    }

    #[test]
    fn parse_recognises_all_sentinel() {
        assert_eq!(SystemSelector::parse("All"), SystemSelector::All);
        assert_eq!(SystemSelector::parse("  ALL "), SystemSelector::All);
        assert_eq!(
            SystemSelector::parse(" Kepler-452 "),
            SystemSelector::Name("Kepler-452".into())
        );
        assert_eq!(SystemSelector::parse("Kepler-452").to_string(), "Kepler-452");
    }
}
