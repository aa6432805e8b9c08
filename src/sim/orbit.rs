use std::f64::consts::TAU;

use super::{linspace, SAMPLE_COUNT};

/// Marker size per Earth radius of the simulated planet.
pub const MARKER_SIZE_PER_EARTH_RADIUS: f64 = 5.0;

/// Where the host star is drawn.
pub const STAR_POSITION: [f64; 2] = [0.0, 0.0];

/// A closed circular path, purely illustrative (no Kepler anomaly).
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    pub radius: f64,
    pub points: Vec<[f64; 2]>,
}

impl OrbitPath {
    /// Trace a circle of `radius` around the origin.
    ///
    /// Angles are [`SAMPLE_COUNT`] evenly spaced values over `[0, 2π]`, so the
    /// first and last points coincide.
    pub fn circle(radius: f64) -> Self {
        let points = linspace(0.0, TAU, SAMPLE_COUNT)
            .into_iter()
            .map(|angle| [radius * angle.cos(), radius * angle.sin()])
            .collect();
        Self { radius, points }
    }

    /// Fixed position of the planet marker, on the +x axis.
    pub fn marker(&self) -> [f64; 2] {
        [self.radius, 0.0]
    }
}

/// Marker size for a planet of `planet_radius` Earth radii.
pub fn marker_size(planet_radius: f64) -> f64 {
    planet_radius * MARKER_SIZE_PER_EARTH_RADIUS
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_radius_collapses_to_origin() {
        let orbit = OrbitPath::circle(0.0);
        assert_eq!(orbit.points.len(), SAMPLE_COUNT);
        assert!(orbit.points.iter().all(|&[x, y]| x == 0.0 && y == 0.0));
    }

    #[test]
    fn every_point_lies_on_the_circle() {
        let orbit = OrbitPath::circle(1.5);
        assert_eq!(orbit.points.len(), SAMPLE_COUNT);
        for [x, y] in &orbit.points {
            assert_relative_eq!(x.hypot(*y), 1.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn path_is_closed_and_starts_on_x_axis() {
        let orbit = OrbitPath::circle(0.3);
        let first = orbit.points[0];
        let last = orbit.points[SAMPLE_COUNT - 1];
        assert_eq!(first, [0.3, 0.0]);
        assert_relative_eq!(last[0], first[0], epsilon = 1e-12);
        assert_relative_eq!(last[1], first[1], epsilon = 1e-12);
        assert_eq!(orbit.marker(), [0.3, 0.0]);
    }

    #[test]
    fn marker_scales_with_planet_radius() {
        assert_eq!(marker_size(2.0), 10.0);
        assert_eq!(marker_size(0.5), 2.5);
    }
}
