//! Handler für die Plot-Sammlung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{PlainPoint, PlotId};

/// Legt einen neuen Plot an.
pub fn add(state: &mut AppState) {
    use_cases::plots::add_plot(state);
}

/// Dupliziert den aktiven Plot.
pub fn duplicate_active(state: &mut AppState) {
    use_cases::plots::duplicate_active_plot(state);
}

/// Entfernt einen Plot.
pub fn remove(state: &mut AppState, plot_id: PlotId) {
    use_cases::plots::remove_plot(state, plot_id);
}

/// Benennt einen Plot um.
pub fn rename(state: &mut AppState, plot_id: PlotId, name: &str) {
    use_cases::plots::rename_plot(state, plot_id, name);
}

/// Aktiviert einen Plot.
pub fn activate(state: &mut AppState, plot_id: PlotId) {
    use_cases::plots::activate_plot(state, plot_id);
}

/// Ersetzt die Punkte des aktiven Plots.
pub fn replace_points(state: &mut AppState, points: &[PlainPoint]) {
    use_cases::plots::replace_points(state, points);
}
