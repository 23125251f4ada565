//! Use-Case-Funktionen für das Bearbeiten der Punkte des aktiven Plots.
//!
//! Aufgeteilt nach Operation:
//! - `add_point`: Punkt per Doppelklick einfügen
//! - `delete_points`: Einzelpunkt entfernen, Selektion löschen
//! - `transform`: Spiegeln, Zuschneiden, Duplizieren, Verschieben auf
//!   Koordinate und Normalisieren

mod add_point;
mod delete_points;
mod transform;

pub use add_point::add_point_at;
pub use delete_points::{delete_selected_points, remove_point};
pub use transform::{
    duplicate_selection, flip_x, flip_y, mirror_selection, move_selection_to, normalize_to_domain,
    trim_to_selection,
};
