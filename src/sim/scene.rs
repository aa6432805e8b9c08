use crate::data::filter::{filter_by_system, SystemSelector};
use crate::data::model::Catalog;
use crate::data::stats::{period_radius_by_spectral_type, ScatterGroups};

use super::orbit::{marker_size, OrbitPath, STAR_POSITION};
use super::transit::{simulate_transit, LightCurve};
use super::SimulationParams;

/// Legend name used when no catalog rows are selected.
pub const SAMPLE_PLANET_NAME: &str = "Sample planet";

// ---------------------------------------------------------------------------
// Orbit traces
// ---------------------------------------------------------------------------

/// One planet on the orbit map: its path plus the sized marker.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitTrace {
    /// Legend name of the orbit line.
    pub name: String,
    /// Legend name of the marker.
    pub marker_name: String,
    pub path: OrbitPath,
    pub marker_size: f64,
    /// Whether the radius came from the catalog rather than the slider.
    pub from_catalog: bool,
}

// ---------------------------------------------------------------------------
// Scene – everything the charts need for one set of inputs
// ---------------------------------------------------------------------------

/// Derived arrays for one `(catalog, selector, params)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Rows of the selected system.
    pub system: Catalog,
    pub star: [f64; 2],
    pub orbits: Vec<OrbitTrace>,
    pub light_curve: LightCurve,
    /// Present only when the catalog has data.
    pub scatter: Option<ScatterGroups>,
}

impl Scene {
    /// Run the whole pipeline: filter, project orbits, simulate, group.
    pub fn build(catalog: &Catalog, selector: &SystemSelector, params: &SimulationParams) -> Self {
        let system = filter_by_system(catalog, selector);
        let orbits = orbit_traces(&system, params);
        let light_curve = simulate_transit(
            params.planet_radius,
            params.orbital_period,
            params.star_brightness,
        );
        let scatter = (!catalog.is_empty()).then(|| period_radius_by_spectral_type(&system));

        log::debug!(
            "scene for {selector}: {} rows, {} orbits, depth {:.4}",
            system.len(),
            orbits.len(),
            light_curve.depth
        );

        Scene {
            system,
            star: STAR_POSITION,
            orbits,
            light_curve,
            scatter,
        }
    }
}

/// Orbit per selected planet, or a single sample orbit when nothing is selected.
fn orbit_traces(system: &Catalog, params: &SimulationParams) -> Vec<OrbitTrace> {
    let size = marker_size(params.planet_radius);

    if system.is_empty() {
        return vec![OrbitTrace {
            name: SAMPLE_PLANET_NAME.to_string(),
            marker_name: SAMPLE_PLANET_NAME.to_string(),
            path: OrbitPath::circle(params.orbital_radius),
            marker_size: size,
            from_catalog: false,
        }];
    }

    system
        .records
        .iter()
        .map(|record| {
            let radius = record.orbit_radius_or(params.orbital_radius);
            let name = record.display_name().to_string();
            OrbitTrace {
                marker_name: format!("{name} (adjusted)"),
                name,
                path: OrbitPath::circle(radius),
                marker_size: size,
                from_catalog: record.semi_major_axis.is_some_and(f64::is_finite),
            }
        })
        .collect()
}
