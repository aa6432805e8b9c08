/// egui rendering: side/top panels, charts, and the catalog table.
///
/// Widgets read from and write to [`crate::state::AppState`]; none of them
/// compute anything beyond asking the state to rebuild its scene.
pub mod panels;
pub mod plot;
pub mod table;
