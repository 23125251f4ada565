//! Use-Cases: selektionsbasierte Transformationen des aktiven Plots.

use crate::app::AppState;
use crate::core::{point_set, Axis, Direction};

/// Spiegelt die Selektion vertikal (y -> -y).
pub fn flip_y(state: &mut AppState) {
    state.apply_to_active_plot("Vertikal gespiegelt", |plot, _| {
        plot.with_points(point_set::flip_y(
            &plot.points,
            &plot.selection,
            plot.domain_y,
            plot.y_snap(),
        ))
    });
}

/// Spiegelt die Selektion horizontal um ihre eigene Mitte.
pub fn flip_x(state: &mut AppState) {
    state.apply_to_active_plot("Horizontal gespiegelt", |plot, _| {
        plot.with_points(point_set::flip_x(
            &plot.points,
            &plot.selection,
            plot.domain_x,
            plot.x_snap(),
        ))
    });
}

/// Entfernt alle Punkte außerhalb des X-Bereichs der Selektion.
pub fn trim_to_selection(state: &mut AppState) {
    state.apply_to_active_plot("Auf Selektion zugeschnitten", |plot, _| {
        let points = point_set::trim(&plot.points, &plot.selection);
        let selection = point_set::retain_existing(&points, &plot.selection);
        plot.with_points(points).with_selection(selection)
    });
}

/// Spiegelt die Selektion am Randpunkt und hängt die Kopien an.
pub fn mirror_selection(state: &mut AppState, direction: Direction) {
    state.apply_to_active_plot("Selektion gespiegelt angehängt", |plot, ids| {
        let edit = point_set::mirror(
            &plot.points,
            &plot.selection,
            direction,
            plot.domain_x,
            plot.domain_y,
            ids,
        );
        plot.with_edit(edit)
    });
}

/// Hängt eine verschobene Kopie der Selektion an.
pub fn duplicate_selection(state: &mut AppState, direction: Direction) {
    state.apply_to_active_plot("Selektion dupliziert", |plot, ids| {
        let edit = point_set::duplicate(
            &plot.points,
            &plot.selection,
            direction,
            plot.domain_x,
            plot.domain_y,
            ids,
        );
        plot.with_edit(edit)
    });
}

/// Setzt den Schwerpunkt der Selektion auf eine Koordinate.
pub fn move_selection_to(state: &mut AppState, axis: Axis, target: f64) {
    state.apply_to_active_plot("Selektion verschoben", |plot, _| {
        plot.with_selection_moved_to(axis, target)
    });
}

/// Tastet die Spline neu über die X-Domäne ab.
pub fn normalize_to_domain(state: &mut AppState) {
    let max_samples = state.options.max_normalize_samples;
    let fallback = state.options.seed_point_count;
    state.apply_to_active_plot("Auf Domäne normalisiert", |plot, ids| {
        plot.normalized_to_domain(max_samples, fallback, ids)
    });
}
