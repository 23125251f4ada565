//! Geteilte, layer-neutrale Bausteine.
//!
//! Enthält Spline-Geometrie und Optionen, die von `core`, `app` und dem
//! Binary gleichermaßen genutzt werden.

pub mod options;
pub mod spline_geometry;

pub use options::EditorOptions;
pub use spline_geometry::{CubicSegment, MonotoneSpline, SplinePath};
