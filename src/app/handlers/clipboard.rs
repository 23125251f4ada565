//! Handler für die Zwischenablage.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PlainPoint;

/// Kopiert die Selektion.
pub fn copy(state: &mut AppState) {
    use_cases::clipboard::copy_selection(state);
}

/// Fügt Punkte anstelle der Selektion ein.
pub fn paste(state: &mut AppState, points: &[PlainPoint]) {
    use_cases::clipboard::paste_points(state, points);
}
