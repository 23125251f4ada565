//! Use-Case: Punkte per Klick selektieren.

use crate::app::AppState;
use crate::core::{PointId, Selection};

/// Selektiert einen Punkt. Additiv schaltet den Punkt in der bestehenden
/// Selektion um, sonst wird er einzige Selektion.
pub fn select_point(state: &mut AppState, id: PointId, additive: bool) {
    let Some(plot) = state.active_arc() else {
        return;
    };
    if plot.point(id).is_none() {
        log::debug!("Selektion: Punkt {} existiert nicht", id);
        return;
    }

    let selection = if additive {
        let mut selection = plot.live_selection();
        if !selection.shift_remove(&id) {
            selection.insert(id);
        }
        selection
    } else {
        std::iter::once(id).collect()
    };
    state.replace_plot(plot.with_selection(selection));
}

/// Selektiert alle Punkte des aktiven Plots.
pub fn select_all(state: &mut AppState) {
    let Some(plot) = state.active_arc() else {
        return;
    };
    let selection: Selection = plot.points.iter().map(|p| p.id).collect();
    log::info!("Alle {} Punkte selektiert", selection.len());
    state.replace_plot(plot.with_selection(selection));
}

/// Hebt die Selektion des aktiven Plots auf.
pub fn clear_selection(state: &mut AppState) {
    let Some(plot) = state.active_arc() else {
        return;
    };
    if plot.selection.is_empty() {
        return;
    }
    state.replace_plot(plot.with_selection(Selection::new()));
}
