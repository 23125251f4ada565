//! Use-Case: Neuen Punkt an einer Canvas-Position einfügen.

use crate::app::AppState;
use crate::core::{point_set, CurvePoint, IdGenerator, Selection};
use glam::DVec2;

/// Fügt einen Punkt ein. Die Position wird pro Achse gesnappt und in die
/// Domänen geclampt; der neue Punkt wird einzige Selektion.
pub fn add_point_at(state: &mut AppState, position: DVec2) {
    state.apply_to_active_plot("Punkt eingefügt", |plot, ids| {
        let point = CurvePoint::new(ids.next_point_id(), plot.constrain(position));
        log::debug!(
            "Neuer Punkt {} bei ({:.3}, {:.3})",
            point.id,
            point.x(),
            point.y()
        );
        let selection: Selection = std::iter::once(point.id).collect();
        plot.with_points(point_set::insert(&plot.points, point))
            .with_selection(selection)
    });
}
