//! Curve Editor Library.
//! Kern eines interaktiven Kurven-Editors: Punktgeometrie, monotone Spline,
//! Plot-Zustand mit Undo/Redo und Zwischenablage-Format.

pub mod app;
pub mod clipboard;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use clipboard::{parse_points_from_clipboard, serialize_points_for_clipboard};
pub use core::{
    Axis, CurvePoint, Direction, Domain, DomainBound, PlainPoint, PlotId, PlotState, PointId,
};
pub use shared::{EditorOptions, MonotoneSpline, SplinePath};
