use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::{self, ParamRange};
use crate::data::filter::SystemSelector;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – simulation parameters and system selection
// ---------------------------------------------------------------------------

/// Render the left parameter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Planet parameters");
    ui.separator();

    let params = &mut state.params;
    let mut changed = false;
    changed |= param_slider(
        ui,
        "Planet radius (Earth radii)",
        &mut params.planet_radius,
        &config::PLANET_RADIUS,
    );
    changed |= param_slider(
        ui,
        "Orbital radius (AU)",
        &mut params.orbital_radius,
        &config::ORBITAL_RADIUS,
    );
    changed |= param_slider(
        ui,
        "Orbital period (days)",
        &mut params.orbital_period,
        &config::ORBITAL_PERIOD,
    );
    changed |= param_slider(
        ui,
        "Star brightness (relative)",
        &mut params.star_brightness,
        &config::STAR_BRIGHTNESS,
    );
    if changed {
        state.recompute();
    }

    ui.add_space(8.0);
    ui.heading("Planetary system");
    ui.separator();

    let current = state.selector.to_string();
    egui::ComboBox::from_id_salt("system_select")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for preset in config::SYSTEM_PRESETS {
                let selector = SystemSelector::parse(preset);
                if ui
                    .selectable_label(state.selector == selector, preset)
                    .clicked()
                {
                    state.search_text.clear();
                    state.select_system(selector);
                }
            }
        });

    ui.label("Name contains");
    if ui.text_edit_singleline(&mut state.search_text).changed() {
        state.apply_search();
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(format!("Catalog: {}", state.catalog_path.display()));
    if state.catalog.is_empty() {
        ui.label(RichText::new("Demo mode: no catalog data").italics());
    } else {
        ui.label(format!(
            "{} planets, {} spectral types",
            state.catalog.len(),
            state.color_map.label_count()
        ));
    }
}

fn param_slider(ui: &mut Ui, label: &str, value: &mut f64, range: &ParamRange) -> bool {
    ui.label(label);
    ui.add(egui::Slider::new(value, range.range()).step_by(range.step))
        .changed()
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open catalog…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export light curve…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} planets loaded, {} selected",
            state.catalog.len(),
            state.scene.system.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Show table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open exoplanet catalog")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_catalog(path);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export light curve")
        .set_file_name("light_curve.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        state.export_light_curve(&path);
    }
}
