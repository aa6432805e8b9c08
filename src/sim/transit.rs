use super::{linspace, SAMPLE_COUNT};

/// Transit window start, as a fraction of the orbital period.
pub const TRANSIT_START_FRACTION: f64 = 0.4;
/// Transit duration, as a fraction of the orbital period.
pub const TRANSIT_DURATION_FRACTION: f64 = 0.1;
/// Planet radius (Earth radii) at which the toy model fully occludes the star.
pub const OCCLUSION_RADIUS: f64 = 10.0;

// ---------------------------------------------------------------------------
// Transit window
// ---------------------------------------------------------------------------

/// Closed time interval during which the planet is in front of the star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitWindow {
    pub start: f64,
    pub end: f64,
}

impl TransitWindow {
    pub fn for_period(orbital_period: f64) -> Self {
        let start = TRANSIT_START_FRACTION * orbital_period;
        let duration = TRANSIT_DURATION_FRACTION * orbital_period;
        Self {
            start,
            end: start + duration,
        }
    }

    /// Both ends inclusive.
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Fraction of starlight blocked during transit: `(radius / 10)^2`.
///
/// Not clamped; radii above 10 give a depth above 1.
pub fn transit_depth(planet_radius: f64) -> f64 {
    (planet_radius / OCCLUSION_RADIUS).powi(2)
}

// ---------------------------------------------------------------------------
// Light curve
// ---------------------------------------------------------------------------

/// Relative brightness of the star over one orbital period.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    /// Days, evenly spaced over `[0, period]`.
    pub time: Vec<f64>,
    /// Same length as `time`.
    pub brightness: Vec<f64>,
    pub window: TransitWindow,
    pub depth: f64,
}

impl LightCurve {
    /// `(time, brightness)` pairs for plotting.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.time
            .iter()
            .zip(&self.brightness)
            .map(|(&t, &b)| [t, b])
    }

    pub fn sample_count(&self) -> usize {
        self.time.len()
    }
}

/// Simulate the brightness dip of a transiting planet.
///
/// The curve is a flat baseline at `star_brightness` with a rectangular notch
/// over [`TransitWindow::for_period`], where each sample is multiplied by
/// `1 - (planet_radius / 10)^2`. There is no ingress/egress shaping and the
/// multiplier is not clamped, so radii of 10 or more reach zero or negative
/// brightness.
pub fn simulate_transit(planet_radius: f64, orbital_period: f64, star_brightness: f64) -> LightCurve {
    let time = linspace(0.0, orbital_period, SAMPLE_COUNT);
    let window = TransitWindow::for_period(orbital_period);
    let depth = transit_depth(planet_radius);
    let dip = 1.0 - depth;

    let brightness = time
        .iter()
        .map(|&t| {
            let mut b = star_brightness;
            if window.contains(t) {
                b *= dip;
            }
            b
        })
        .collect();

    LightCurve {
        time,
        brightness,
        window,
        depth,
    }
}
