use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::export::export_light_curve;
use crate::data::filter::SystemSelector;
use crate::data::loader::{self, CatalogLoad};
use crate::data::model::Catalog;
use crate::sim::scene::Scene;
use crate::sim::SimulationParams;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog, shared read-only. Empty when loading failed.
    pub catalog: Arc<Catalog>,

    /// Where `catalog` came from.
    pub catalog_path: PathBuf,

    /// Slider values.
    pub params: SimulationParams,

    /// Current system selection.
    pub selector: SystemSelector,

    /// Text of the free-form name filter.
    pub search_text: String,

    /// Derived arrays for the current inputs (cached).
    pub scene: Scene,

    /// Colours per spectral type.
    pub color_map: ColorMap,

    /// Whether the table of selected rows is shown.
    pub show_table: bool,

    /// Status / warning message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// State for a freshly loaded catalog, warning included.
    pub fn new(load: CatalogLoad, catalog_path: PathBuf) -> Self {
        let catalog = Arc::new(load.catalog);
        let params = SimulationParams::default();
        let selector = SystemSelector::default();
        let scene = Scene::build(&catalog, &selector, &params);

        Self {
            color_map: ColorMap::new(&catalog.spectral_types),
            catalog,
            catalog_path,
            params,
            selector,
            search_text: String::new(),
            scene,
            show_table: false,
            status_message: load.warning,
        }
    }

    /// Swap in a newly loaded catalog and rebuild everything derived from it.
    pub fn set_catalog(&mut self, catalog: Catalog, path: PathBuf) {
        self.catalog = Arc::new(catalog);
        self.catalog_path = path;
        self.color_map = ColorMap::new(&self.catalog.spectral_types);
        self.status_message = None;
        self.recompute();
    }

    /// Load `path`, keeping the current catalog if that fails.
    pub fn open_catalog(&mut self, path: PathBuf) {
        match loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} planets from {}",
                    catalog.len(),
                    path.display()
                );
                self.set_catalog(catalog, path);
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Write the current light curve; a success clears any stale notice.
    pub fn export_light_curve(&mut self, path: &Path) {
        match export_light_curve(path, &self.scene.light_curve) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                log::error!("Failed to export light curve: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-run the pipeline after an input change.
    pub fn recompute(&mut self) {
        self.scene = Scene::build(&self.catalog, &self.selector, &self.params);
    }

    /// Change the system selection.
    pub fn select_system(&mut self, selector: SystemSelector) {
        if self.selector != selector {
            self.selector = selector;
            self.recompute();
        }
    }

    /// Apply the free-form filter; blank text means all systems.
    pub fn apply_search(&mut self) {
        let text = self.search_text.trim();
        let selector = if text.is_empty() {
            SystemSelector::All
        } else {
            SystemSelector::parse(text)
        };
        self.select_system(selector);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ExoplanetRecord;
    use crate::sim::scene::SAMPLE_PLANET_NAME;

    fn load(names: &[&str]) -> CatalogLoad {
        let records = names
            .iter()
            .map(|n| ExoplanetRecord {
                name: Some(n.to_string()),
                orbital_period: Some(3.0),
                semi_major_axis: Some(0.05),
                radius: Some(1.0),
                spectral_type: Some("M8V".into()),
            })
            .collect();
        CatalogLoad {
            catalog: Catalog::from_records(records),
            warning: None,
        }
    }

    #[test]
    fn missing_catalog_starts_in_demo_mode() {
        let state = AppState::new(
            CatalogLoad {
                catalog: Catalog::default(),
                warning: Some("Data file not found".into()),
            },
            PathBuf::from("data/exoplanets.csv"),
        );
        assert!(state.status_message.is_some());
        assert_eq!(state.scene.orbits.len(), 1);
        assert_eq!(state.scene.orbits[0].name, SAMPLE_PLANET_NAME);
        assert!(state.scene.scatter.is_none());
    }

    #[test]
    fn selection_and_params_refresh_the_scene() {
        let mut state = AppState::new(load(&["TRAPPIST-1 b", "Kepler-452 b"]), PathBuf::new());
        assert_eq!(state.scene.system.len(), 2);

        state.select_system(SystemSelector::parse("kepler"));
        assert_eq!(state.scene.system.len(), 1);

        state.params.orbital_period = 40.0;
        state.recompute();
        assert_eq!(state.scene.light_curve.time[99], 40.0);
    }

    #[test]
    fn blank_search_means_all() {
        let mut state = AppState::new(load(&["TRAPPIST-1 b", "Kepler-452 b"]), PathBuf::new());
        state.search_text = "trappist".into();
        state.apply_search();
        assert_eq!(state.selector, SystemSelector::Name("trappist".into()));
        assert_eq!(state.scene.system.len(), 1);

        state.search_text = "   ".into();
        state.apply_search();
        assert_eq!(state.selector, SystemSelector::All);
        assert_eq!(state.scene.system.len(), 2);
    }

    #[test]
    fn failed_reopen_keeps_current_catalog() {
        let mut state = AppState::new(load(&["TRAPPIST-1 b"]), PathBuf::from("a.csv"));
        let before = Arc::clone(&state.catalog);
        state.open_catalog(std::env::temp_dir().join("exoplanet-state-missing.csv"));
        assert!(Arc::ptr_eq(&before, &state.catalog));
        assert!(state.status_message.unwrap().contains("not found"));
    }

    #[test]
    fn reopen_swaps_in_a_new_catalog() {
        let mut state = AppState::new(
            CatalogLoad {
                warning: Some("Data file 'a.csv' not found. Showing demo mode.".into()),
                ..load(&["TRAPPIST-1 b"])
            },
            PathBuf::from("a.csv"),
        );
        let before = Arc::clone(&state.catalog);

        let path = std::env::temp_dir().join(format!("exoplanet-state-{}-new.csv", std::process::id()));
        std::fs::write(
            &path,
            "pl_name,pl_orbper,pl_orbsmax,pl_rade,st_spectype\n\
             Kepler-452 b,384.843,1.046,1.63,G2V\n\
             Kepler-22 b,289.86,0.849,2.38,G5V\n",
        )
        .unwrap();
        state.open_catalog(path.clone());
        std::fs::remove_file(&path).ok();

        assert!(!Arc::ptr_eq(&before, &state.catalog));
        assert_eq!(before.len(), 1);
        assert_eq!(before.records[0].name.as_deref(), Some("TRAPPIST-1 b"));

        assert_eq!(state.catalog_path, path);
        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.status_message, None);
        assert_eq!(state.scene.system.len(), 2);
        assert_eq!(state.scene.orbits[0].name, "Kepler-452 b");
        assert_eq!(state.color_map.label_count(), 2);
        assert_eq!(state.color_map.color_for("M8V"), eframe::egui::Color32::GRAY);
    }

    #[test]
    fn export_updates_status_message() {
        let mut state = AppState::new(load(&["TRAPPIST-1 b"]), PathBuf::new());

        state.export_light_curve(Path::new("curve.txt"));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));

        let path = std::env::temp_dir().join(format!("exoplanet-state-{}-curve.csv", std::process::id()));
        state.export_light_curve(&path);
        let written = path.exists();
        std::fs::remove_file(&path).ok();

        assert!(written);
        assert_eq!(state.status_message, None);
    }
}
