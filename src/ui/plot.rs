use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};

use crate::color::generate_palette;
use crate::state::AppState;

const ORBIT_MAP_HEIGHT: f32 = 420.0;
const CHART_HEIGHT: f32 = 300.0;
const STAR_MARKER_RADIUS: f32 = 10.0;

// ---------------------------------------------------------------------------
// Orbit map
// ---------------------------------------------------------------------------

/// Star at the origin, one circular orbit and one sized marker per planet.
pub fn orbit_map(ui: &mut Ui, state: &AppState) {
    let scene = &state.scene;
    let marker_colors = generate_palette(scene.orbits.len());

    Plot::new("orbit_map")
        .legend(Legend::default())
        .height(ORBIT_MAP_HEIGHT)
        .data_aspect(1.0)
        .x_axis_label("X (AU)")
        .y_axis_label("Y (AU)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let star: PlotPoints = std::iter::once(scene.star).collect();
            plot_ui.points(
                Points::new(star)
                    .name("Star")
                    .color(Color32::YELLOW)
                    .radius(STAR_MARKER_RADIUS)
                    .filled(true),
            );

            for (trace, color) in scene.orbits.iter().zip(marker_colors) {
                let path: PlotPoints = trace.path.points.iter().copied().collect();
                // Dashed when the radius is the slider fallback.
                let style = if trace.from_catalog {
                    LineStyle::Solid
                } else {
                    LineStyle::dashed_dense()
                };
                plot_ui.line(
                    Line::new(path)
                        .name(&trace.name)
                        .color(Color32::BLUE)
                        .width(1.5)
                        .style(style),
                );

                // Marker size is a diameter, egui wants a radius.
                let marker: PlotPoints = std::iter::once(trace.path.marker()).collect();
                plot_ui.points(
                    Points::new(marker)
                        .name(&trace.marker_name)
                        .color(color)
                        .radius((trace.marker_size / 2.0) as f32)
                        .filled(true),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Transit light curve
// ---------------------------------------------------------------------------

/// Relative brightness over one orbit, with the transit window marked.
pub fn light_curve(ui: &mut Ui, state: &AppState) {
    let curve = &state.scene.light_curve;

    Plot::new("light_curve")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Time (days)")
        .y_axis_label("Relative brightness")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let points: PlotPoints = curve.points().collect();
            plot_ui.line(
                Line::new(points)
                    .name("Brightness curve")
                    .color(Color32::BLUE)
                    .width(2.0),
            );
            for x in [curve.window.start, curve.window.end] {
                plot_ui.vline(
                    VLine::new(x)
                        .name("Transit window")
                        .color(Color32::GRAY)
                        .style(LineStyle::dashed_loose()),
                );
            }
        });

    ui.label(format!(
        "Transit depth {:.2}% between day {:.2} and day {:.2}",
        curve.depth * 100.0,
        curve.window.start,
        curve.window.end
    ));
}

// ---------------------------------------------------------------------------
// Statistics scatter
// ---------------------------------------------------------------------------

/// Orbital period against planet radius, coloured by spectral type.
pub fn stats_scatter(ui: &mut Ui, state: &AppState) {
    let Some(groups) = &state.scene.scatter else {
        return;
    };

    Plot::new("stats_scatter")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Orbital period (days)")
        .y_axis_label("Planet radius (Earth radii)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (label, points) in groups {
                let points: PlotPoints = points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(label)
                        .color(state.color_map.color_for(label))
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}
