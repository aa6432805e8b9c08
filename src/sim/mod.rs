/// Numerical core: transit light curve, orbit projection, and the scene
/// pipeline that feeds the charts.
///
/// ```text
///   SimulationParams ──┐
///                      ▼
///   Catalog ──► filter ──► Scene::build ──► orbits / light curve / scatter
/// ```
///
/// Everything here is a pure function of its inputs and knows nothing
/// about egui.
pub mod orbit;
pub mod scene;
pub mod transit;

use crate::config;

/// Resolution of every generated curve.
pub const SAMPLE_COUNT: usize = 100;

/// `n` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last sample is exactly `stop` regardless of rounding.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation parameters
// ---------------------------------------------------------------------------

/// The four slider values driving the simulation.
///
/// Ranges are enforced by the sliders; the model itself does no validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Earth radii.
    pub planet_radius: f64,
    /// AU; used for planets without a catalog semi-major axis.
    pub orbital_radius: f64,
    /// Days.
    pub orbital_period: f64,
    /// Relative baseline brightness of the host star.
    pub star_brightness: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            planet_radius: config::PLANET_RADIUS.default,
            orbital_radius: config::ORBITAL_RADIUS.default,
            orbital_period: config::ORBITAL_PERIOD.default,
            star_brightness: config::STAR_BRIGHTNESS.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(0.0, 7.3, SAMPLE_COUNT);
        assert_eq!(v.len(), SAMPLE_COUNT);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[SAMPLE_COUNT - 1], 7.3);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_lengths() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(1.0, 1.0, 3), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn default_params_match_slider_defaults() {
        let p = SimulationParams::default();
        assert_eq!(p.planet_radius, 2.0);
        assert_eq!(p.orbital_radius, 0.1);
        assert_eq!(p.orbital_period, 10.0);
        assert_eq!(p.star_brightness, 1.0);
    }
}
