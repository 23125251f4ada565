//! Handler für Achsen, Raster und Hintergrund.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Axis, DomainBound};
use glam::DVec2;

/// Setzt eine Domänengrenze.
pub fn set_domain_bound(state: &mut AppState, axis: Axis, bound: DomainBound, value: f64) {
    use_cases::view::set_domain_bound(state, axis, bound, value);
}

/// Setzt die Rasterweite.
pub fn set_snap_precision(state: &mut AppState, axis: Axis, precision: f64) {
    use_cases::view::set_snap_precision(state, axis, precision);
}

/// Schaltet Snapping um.
pub fn toggle_snap(state: &mut AppState, axis: Axis) {
    use_cases::view::toggle_snap(state, axis);
}

/// Schaltet das Raster um.
pub fn toggle_grid(state: &mut AppState) {
    use_cases::view::toggle_grid(state);
}

/// Setzt das Hintergrundbild.
pub fn set_background(state: &mut AppState, image_ref: &str) {
    use_cases::view::set_background(state, image_ref);
}

/// Entfernt das Hintergrundbild.
pub fn clear_background(state: &mut AppState) {
    use_cases::view::clear_background(state);
}

/// Setzt die Hintergrund-Deckkraft.
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    use_cases::view::set_background_opacity(state, opacity);
}

/// Setzt den Hintergrund-Versatz.
pub fn set_background_offset(state: &mut AppState, offset: DVec2) {
    use_cases::view::set_background_offset(state, offset);
}

/// Setzt die Hintergrund-Skalierung.
pub fn set_background_scale(state: &mut AppState, scale: f64) {
    use_cases::view::set_background_scale(state, scale);
}
