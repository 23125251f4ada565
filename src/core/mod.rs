//! Core-Domänentypen: Punkte, Domänen, Snapping, Punktmengen-Geometrie und
//! der Plot-Zustand.

pub mod domain;
pub mod drag;
pub mod ids;
/// Core-Datenmodelle für Kurven
///
/// - CurvePoint: einzelner Kontrollpunkt mit stabiler ID
/// - PlotState: Punkte, Selektion und Achsen-Konfiguration eines Plots
/// - point_set: reine Transformationen auf der sortierten Punktliste
pub mod plot;
pub mod point;
pub mod point_set;
pub mod snap;

pub use domain::{clamp, Domain, DomainBound};
pub use drag::DragSession;
pub use ids::{IdGenerator, SequentialIds};
pub use plot::{Background, Brush, PlotState};
pub use point::{CurvePoint, PlainPoint, PlotId, PointId};
pub use point_set::{Axis, Direction, EditResult, Selection, MIN_POINT_COUNT};
pub use snap::{snap, AxisSnap};
