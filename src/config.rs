use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;

// ---------------------------------------------------------------------------
// Catalog location
// ---------------------------------------------------------------------------

/// Catalog path used when neither an argument nor the env var is given.
pub const DEFAULT_CATALOG_PATH: &str = "data/exoplanets.csv";

/// Environment variable overriding the catalog path.
pub const CATALOG_ENV_VAR: &str = "EXOPLANET_CATALOG";

#[derive(Debug, Parser)]
#[command(name = "exoplanet-explorer")]
#[command(version, about = "Exoplanet catalog explorer and transit light-curve simulator", long_about = None)]
pub struct Args {
    /// Catalog file (.csv, .json, .parquet), or set EXOPLANET_CATALOG
    #[arg(env = CATALOG_ENV_VAR, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,
}

// ---------------------------------------------------------------------------
// Slider ranges
// ---------------------------------------------------------------------------

/// Bounds, default and step of one simulation slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParamRange {
    pub fn range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// Planet radius in Earth radii.
pub const PLANET_RADIUS: ParamRange = ParamRange {
    min: 0.5,
    max: 10.0,
    default: 2.0,
    step: 0.1,
};

/// Fallback orbital radius in AU.
pub const ORBITAL_RADIUS: ParamRange = ParamRange {
    min: 0.01,
    max: 2.0,
    default: 0.1,
    step: 0.01,
};

/// Orbital period in days.
pub const ORBITAL_PERIOD: ParamRange = ParamRange {
    min: 1.0,
    max: 100.0,
    default: 10.0,
    step: 0.1,
};

/// Relative star brightness.
pub const STAR_BRIGHTNESS: ParamRange = ParamRange {
    min: 0.8,
    max: 1.2,
    default: 1.0,
    step: 0.01,
};

// ---------------------------------------------------------------------------
// System presets
// ---------------------------------------------------------------------------

/// Entries of the system selector, in display order.
pub const SYSTEM_PRESETS: [&str; 4] = ["All", "TRAPPIST-1", "Kepler-452", "Proxima Centauri"];

#[cfg(test)]
mod tests {
    use super::*;

    // Only this test touches the env var, so the three cases run in order.
    #[test]
    fn catalog_argument_then_env_then_default() {
        std::env::set_var(CATALOG_ENV_VAR, "env.parquet");

        let args = Args::try_parse_from(["exoplanet-explorer", "cli.csv"]).unwrap();
        assert_eq!(args.catalog, PathBuf::from("cli.csv"));

        let args = Args::try_parse_from(["exoplanet-explorer"]).unwrap();
        assert_eq!(args.catalog, PathBuf::from("env.parquet"));

        std::env::remove_var(CATALOG_ENV_VAR);
        let args = Args::try_parse_from(["exoplanet-explorer"]).unwrap();
        assert_eq!(args.catalog, PathBuf::from(DEFAULT_CATALOG_PATH));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Args::try_parse_from(["exoplanet-explorer", "a.csv", "b.csv"]).is_err());
    }

    #[test]
    fn defaults_lie_within_ranges() {
        for p in [PLANET_RADIUS, ORBITAL_RADIUS, ORBITAL_PERIOD, STAR_BRIGHTNESS] {
            assert!(p.range().contains(&p.default), "{p:?}");
            assert!(p.step > 0.0);
        }
    }
}
