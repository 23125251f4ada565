//! Handler für Punkt-Editing und Transformationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Axis, Direction, PointId};
use glam::DVec2;

/// Fügt einen Punkt an der Canvas-Position ein.
pub fn add_point(state: &mut AppState, position: DVec2) {
    use_cases::editing::add_point_at(state, position);
}

/// Entfernt einen einzelnen Punkt.
pub fn remove_point(state: &mut AppState, id: PointId) {
    use_cases::editing::remove_point(state, id);
}

/// Löscht die selektierten Punkte.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_points(state);
}

/// Spiegelt die Selektion vertikal.
pub fn flip_y(state: &mut AppState) {
    use_cases::editing::flip_y(state);
}

/// Spiegelt die Selektion horizontal.
pub fn flip_x(state: &mut AppState) {
    use_cases::editing::flip_x(state);
}

/// Schneidet auf die Selektion zu.
pub fn trim(state: &mut AppState) {
    use_cases::editing::trim_to_selection(state);
}

/// Spiegelt und hängt an.
pub fn mirror(state: &mut AppState, direction: Direction) {
    use_cases::editing::mirror_selection(state, direction);
}

/// Dupliziert und hängt an.
pub fn duplicate(state: &mut AppState, direction: Direction) {
    use_cases::editing::duplicate_selection(state, direction);
}

/// Verschiebt die Selektion auf eine Koordinate.
pub fn move_selection_to(state: &mut AppState, axis: Axis, target: f64) {
    use_cases::editing::move_selection_to(state, axis, target);
}

/// Normalisiert den aktiven Plot auf seine X-Domäne.
pub fn normalize(state: &mut AppState) {
    use_cases::editing::normalize_to_domain(state);
}
