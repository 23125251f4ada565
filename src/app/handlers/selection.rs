//! Handler für Selektions-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Brush, PointId};
use glam::DVec2;

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, before: Snapshot) {
    let current = Snapshot::from_state(state);
    if state.history.commit(before, &current) {
        log::debug!("Selektionsänderung im Verlauf abgelegt");
    }
}

/// Selektiert einen Punkt per Klick.
pub fn select_point(state: &mut AppState, id: PointId, additive: bool) {
    let before = Snapshot::from_state(state);
    use_cases::selection::select_point(state, id, additive);
    record_if_selection_changed(state, before);
}

/// Selektiert alle Punkte.
pub fn select_all(state: &mut AppState) {
    let before = Snapshot::from_state(state);
    use_cases::selection::select_all(state);
    record_if_selection_changed(state, before);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    let before = Snapshot::from_state(state);
    use_cases::selection::clear_selection(state);
    record_if_selection_changed(state, before);
}

/// Aktualisiert das Aufziehrechteck (kein Undo-Schritt).
pub fn set_brush(state: &mut AppState, brush: Option<Brush>) {
    use_cases::selection::set_brush(state, brush);
}

/// Beendet die Rechteck-Selektion: Rechteck entfernen, Punkte darin
/// selektieren.
pub fn select_in_brush(state: &mut AppState, additive: bool) {
    let Some(brush) = state.active().and_then(|plot| plot.brush) else {
        log::debug!("Rechteck-Selektion ohne Rechteck");
        return;
    };
    use_cases::selection::set_brush(state, None);
    let before = Snapshot::from_state(state);
    use_cases::selection::select_in_rect(state, brush.start, brush.end, additive);
    record_if_selection_changed(state, before);
}

/// Startet den Drag-Lifecycle.
pub fn begin_drag(state: &mut AppState) {
    use_cases::selection::begin_drag(state);
}

/// Drag-Zwischenstand.
pub fn update_drag(state: &mut AppState, delta: DVec2) {
    use_cases::selection::update_drag(state, delta);
}

/// Drag-Ende: ein Undo-Schritt für den gesamten Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
