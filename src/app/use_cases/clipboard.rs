//! Use-Cases: Kopieren und Einfügen von Punkten.

use crate::app::AppState;
use crate::clipboard;
use crate::core::{point_set, PlainPoint};

/// Kopiert die selektierten Punkte in den Session-Puffer und stellt den
/// Payload für die System-Zwischenablage bereit. Kein Undo-Schritt.
pub fn copy_selection(state: &mut AppState) {
    let Some(plot) = state.active() else {
        return;
    };
    let points: Vec<PlainPoint> = plot
        .selected_points()
        .iter()
        .map(|p| p.to_plain())
        .collect();
    if points.is_empty() {
        log::debug!("Kopieren: keine Selektion");
        return;
    }

    match clipboard::serialize_points_for_clipboard(&points) {
        Ok(text) => state.clipboard.outgoing = Some(text),
        Err(e) => log::warn!("Zwischenablage-Payload nicht erstellt: {:#}", e),
    }
    log::info!("{} Punkte kopiert", points.len());
    state.clipboard.last_copied = Some(points);
}

/// Ersetzt die Selektion durch die eingefügten Punkte.
pub fn paste_points(state: &mut AppState, incoming: &[PlainPoint]) {
    state.apply_to_active_plot("Punkte eingefügt", |plot, ids| {
        let edit = point_set::replace_selection_with_points(
            &plot.points,
            &plot.selection,
            incoming,
            plot.domain_x,
            plot.domain_y,
            ids,
        );
        plot.with_edit(edit)
    });
}
