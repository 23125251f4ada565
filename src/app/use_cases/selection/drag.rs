//! Use-Case: Selektierte Punkte ziehen.
//!
//! Updates ersetzen den Plot ohne Undo-Eintrag. Erst `end_drag` sortiert,
//! clampt und legt genau einen Undo-Schritt ab (nur bei echter Änderung).

use crate::app::history::Snapshot;
use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::{DragSession, PlotState};
use glam::DVec2;

/// Startet eine Drag-Session für die Selektion des aktiven Plots.
pub fn begin_drag(state: &mut AppState) {
    if state.drag.is_some() {
        log::debug!("Drag läuft bereits");
        return;
    }
    let Some(plot) = state.active_arc() else {
        return;
    };
    let Some(session) = DragSession::begin(&plot.points, &plot.selection) else {
        log::debug!("Drag: keine Selektion");
        return;
    };
    state.drag = Some(DragState {
        plot_id: plot.id,
        session,
        before: Snapshot::from_state(state),
    });
}

/// Setzt die gezogenen Punkte auf Ursprung + `delta` (Gesamtversatz).
pub fn update_drag(state: &mut AppState, delta: DVec2) {
    let Some(drag) = state.drag.as_ref() else {
        return;
    };
    let Some(plot) = state.plot(drag.plot_id) else {
        return;
    };
    let points = drag.session.update(
        &plot.points,
        delta,
        plot.domain_x,
        plot.domain_y,
        plot.x_snap(),
        plot.y_snap(),
    );
    // Sortierung erst beim Commit
    let next = PlotState {
        points,
        ..plot.clone()
    };
    state.replace_plot(next);
}

/// Schließt den Drag ab.
pub fn end_drag(state: &mut AppState) {
    let Some(drag) = state.drag.take() else {
        return;
    };
    let Some(plot) = state.plot(drag.plot_id) else {
        return;
    };
    let points = drag
        .session
        .commit(&plot.points, plot.domain_x, plot.domain_y);
    let next = plot.with_points(points);
    state.replace_plot(next);

    let current = Snapshot::from_state(state);
    if state.history.commit(drag.before, &current) {
        log::info!("{} Punkte verschoben", drag.session.len());
    } else {
        log::debug!("Drag ohne Änderung beendet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::selection::select_point;

    #[test]
    fn drag_records_single_undo_step() {
        let mut state = AppState::new();
        let id = state.active().expect("aktiver Plot").points[4].id;
        select_point(&mut state, id, false);

        begin_drag(&mut state);
        for step in 1..=5 {
            update_drag(&mut state, DVec2::new(0.0, 0.1 * step as f64));
        }
        assert!(!state.can_undo());
        end_drag(&mut state);

        assert_eq!(state.history.undo_len(), 1);
        assert!(state.drag.is_none());
        let moved = state.active().expect("aktiver Plot").point(id).copied();
        approx::assert_abs_diff_eq!(moved.expect("Punkt vorhanden").y(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn drag_back_to_origin_records_nothing() {
        let mut state = AppState::new();
        let id = state.active().expect("aktiver Plot").points[4].id;
        select_point(&mut state, id, false);

        begin_drag(&mut state);
        update_drag(&mut state, DVec2::new(10.0, 0.0));
        update_drag(&mut state, DVec2::ZERO);
        end_drag(&mut state);

        assert!(!state.can_undo());
    }
}
