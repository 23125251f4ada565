//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    cancel_drag(state);
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    cancel_drag(state);
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

/// Ein laufender Drag wird auf seinen Ausgangszustand zurückgesetzt, bevor
/// der Verlauf angewendet wird.
fn cancel_drag(state: &mut AppState) {
    if let Some(drag) = state.drag.take() {
        drag.before.apply_to(state);
        log::debug!("Laufender Drag abgebrochen");
    }
}
