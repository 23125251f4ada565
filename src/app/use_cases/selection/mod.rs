//! Use-Case-Funktionen für Punkt-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick`: Klick-Selektion, alles/nichts selektieren
//! - `rect`: Aufziehrechteck
//! - `drag`: Ziehen der Selektion (transient bis zum Commit)
//!
//! Selektions-Use-Cases legen selbst keine Undo-Snapshots an; das
//! übernehmen die Handler nur dann, wenn sich die Selektion wirklich
//! geändert hat.

mod drag;
mod pick;
mod rect;

pub use drag::{begin_drag, end_drag, update_drag};
pub use pick::{clear_selection, select_all, select_point};
pub use rect::{select_in_rect, set_brush};
