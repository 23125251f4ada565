//! Use-Case: Bereichsselektion per Aufziehrechteck.

use crate::app::AppState;
use crate::core::{point_set, Brush};
use glam::DVec2;

/// Setzt oder entfernt das Aufziehrechteck des aktiven Plots (transient).
pub fn set_brush(state: &mut AppState, brush: Option<Brush>) {
    let Some(plot) = state.active_arc() else {
        return;
    };
    if plot.brush == brush {
        return;
    }
    state.replace_plot(plot.with_brush(brush));
}

/// Selektiert alle Punkte im Rechteck `a`-`b`. Additiv erweitert die
/// bestehende Selektion, sonst wird sie ersetzt.
pub fn select_in_rect(state: &mut AppState, a: DVec2, b: DVec2, additive: bool) {
    let Some(plot) = state.active_arc() else {
        return;
    };
    let hits = point_set::points_in_rect(&plot.points, a, b);
    let mut selection = if additive {
        plot.live_selection()
    } else {
        Default::default()
    };
    selection.extend(hits);
    log::debug!("Rechteck-Selektion: {} Punkte", selection.len());
    state.replace_plot(plot.with_selection(selection));
}
