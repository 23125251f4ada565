//! Use-Case: Punkte entfernen.
//!
//! Beide Varianten lassen mindestens zwei Punkte stehen; sonst passiert
//! nichts.

use crate::app::AppState;
use crate::core::{point_set, PointId};

/// Entfernt einen einzelnen Punkt (Doppelklick auf Punkt).
pub fn remove_point(state: &mut AppState, id: PointId) {
    state.apply_to_active_plot("Punkt entfernt", |plot, _| {
        let mut selection = plot.selection.clone();
        selection.shift_remove(&id);
        plot.with_points(point_set::remove(&plot.points, id))
            .with_selection(selection)
    });
}

/// Löscht alle selektierten Punkte.
pub fn delete_selected_points(state: &mut AppState) {
    state.apply_to_active_plot("Selektion gelöscht", |plot, _| {
        let points = point_set::delete_selected(&plot.points, &plot.selection);
        if points.len() == plot.points.len() {
            return plot.clone();
        }
        let selection = point_set::retain_existing(&points, &plot.selection);
        plot.with_points(points).with_selection(selection)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurvePoint, PlotState};
    use glam::DVec2;

    fn state_with_points(coords: &[(f64, f64)]) -> AppState {
        let mut state = AppState::new();
        let plot = state.active().expect("aktiver Plot").clone();
        let points = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| CurvePoint::new(PointId(500 + i as u64), DVec2::new(x, y)))
            .collect();
        state.replace_plot(PlotState {
            points,
            ..plot
        });
        state
    }

    #[test]
    fn remove_point_refuses_below_two() {
        let mut state = state_with_points(&[(0.0, 0.0), (1.0, 1.0)]);
        remove_point(&mut state, PointId(500));
        assert_eq!(state.active().map(|p| p.points.len()), Some(2));
        assert!(!state.can_undo());
    }

    #[test]
    fn delete_selected_drops_points_and_selection() {
        let mut state = state_with_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let plot = state.active().expect("aktiver Plot").clone();
        state.replace_plot(plot.with_selection([PointId(501)].into_iter().collect()));

        delete_selected_points(&mut state);

        let plot = state.active().expect("aktiver Plot");
        assert_eq!(plot.points.len(), 2);
        assert!(plot.selection.is_empty());
        assert!(state.can_undo());
    }
}
