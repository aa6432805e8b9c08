use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: sliders and system selector ----
        egui::SidePanel::left("param_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Planetary system map");
                    ui.label("Orbits of the selected system. Planets without a catalog semi-major axis use the orbital radius slider.");
                    plot::orbit_map(ui, &self.state);

                    ui.add_space(12.0);
                    ui.heading("Transit simulation");
                    ui.label("Brightness of the star while the planet passes in front of it.");
                    plot::light_curve(ui, &self.state);

                    if self.state.scene.scatter.is_some() {
                        ui.add_space(12.0);
                        ui.heading("Exoplanet statistics");
                        ui.label("Orbital period against planet radius, by host spectral type.");
                        plot::stats_scatter(ui, &self.state);
                    }

                    if self.state.show_table {
                        ui.add_space(12.0);
                        ui.heading("Selected planets");
                        table::catalog_table(ui, &self.state);
                    }
                });
        });
    }
}
