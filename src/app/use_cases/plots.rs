//! Use-Cases für die Plot-Sammlung: anlegen, duplizieren, entfernen,
//! umbenennen, aktivieren und Punkte ersetzen.

use crate::app::AppState;
use crate::core::{
    point_set, CurvePoint, IdGenerator, PlainPoint, PlotId, PlotState, Selection, MIN_POINT_COUNT,
};
use glam::DVec2;
use std::sync::Arc;

/// Legt einen neuen Plot mit Startkurve an und aktiviert ihn.
pub fn add_plot(state: &mut AppState) {
    state.record_undo_snapshot();
    let name = state.next_plot_name();
    let plot = PlotState::new(name, &state.options, &mut state.ids);
    log::info!("Plot {} '{}' angelegt", plot.id, plot.name);
    state.active_plot = Some(plot.id);
    state.plots.insert(plot.id, Arc::new(plot));
}

/// Dupliziert den aktiven Plot (neue IDs, leere Selektion). Die Kopie wird
/// hinten angehängt und aktiviert.
pub fn duplicate_active_plot(state: &mut AppState) {
    let Some(source) = state.active_arc() else {
        log::warn!("Duplizieren: kein aktiver Plot");
        return;
    };
    state.record_undo_snapshot();
    let copy = source.duplicated(format!("{} copy", source.name), &mut state.ids);
    log::info!("Plot {} dupliziert als {} '{}'", source.id, copy.id, copy.name);
    state.active_plot = Some(copy.id);
    state.plots.insert(copy.id, Arc::new(copy));
}

/// Entfernt einen Plot. Der letzte Plot bleibt immer stehen; war der
/// entfernte Plot aktiv, wird sein Nachbar aktiviert.
pub fn remove_plot(state: &mut AppState, plot_id: PlotId) {
    let Some(index) = state.plots.get_index_of(&plot_id) else {
        log::debug!("Entfernen: Plot {} existiert nicht", plot_id);
        return;
    };
    if state.plots.len() <= 1 {
        log::debug!("Entfernen: letzter Plot bleibt bestehen");
        return;
    }

    state.record_undo_snapshot();
    state.plots.shift_remove_index(index);
    if state.active_plot == Some(plot_id) {
        let neighbour = index.min(state.plots.len() - 1);
        state.active_plot = state.plots.get_index(neighbour).map(|(id, _)| *id);
    }
    if state.drag.as_ref().is_some_and(|drag| drag.plot_id == plot_id) {
        state.drag = None;
    }
    log::info!("Plot {} entfernt", plot_id);
}

/// Benennt einen Plot um.
pub fn rename_plot(state: &mut AppState, plot_id: PlotId, name: &str) {
    let Some(plot) = state.plots.get(&plot_id).cloned() else {
        log::debug!("Umbenennen: Plot {} existiert nicht", plot_id);
        return;
    };
    if plot.name == name {
        return;
    }
    state.record_undo_snapshot();
    state.replace_plot(plot.renamed(name));
    log::info!("Plot {} umbenannt: '{}' -> '{}'", plot_id, plot.name, name);
}

/// Aktiviert einen Plot. Kein Undo-Schritt.
pub fn activate_plot(state: &mut AppState, plot_id: PlotId) {
    if !state.plots.contains_key(&plot_id) {
        log::debug!("Aktivieren: Plot {} existiert nicht", plot_id);
        return;
    }
    state.active_plot = Some(plot_id);
}

/// Ersetzt alle Punkte des aktiven Plots.
///
/// Nicht-endliche Einträge fallen weg, der Rest wird in die Domänen
/// geclampt und bekommt neue IDs. Mit weniger als zwei Punkten passiert
/// nichts.
pub fn replace_points(state: &mut AppState, incoming: &[PlainPoint]) {
    let finite: Vec<PlainPoint> = incoming.iter().copied().filter(|p| p.is_finite()).collect();
    if finite.len() < MIN_POINT_COUNT {
        log::debug!(
            "Punkte ersetzen: {} gültige Punkte sind zu wenig",
            finite.len()
        );
        return;
    }
    state.apply_to_active_plot("Punkte ersetzt", |plot, ids| {
        let mut points: Vec<CurvePoint> = finite
            .iter()
            .map(|p| {
                let position = p.position();
                CurvePoint::new(
                    ids.next_point_id(),
                    DVec2::new(
                        plot.domain_x.clamp(position.x),
                        plot.domain_y.clamp(position.y),
                    ),
                )
            })
            .collect();
        point_set::sort_by_x(&mut points);
        plot.with_points(points).with_selection(Selection::new())
    });
}
