//! ID-Vergabe für Punkte und Plots.
//!
//! Die Geometrie-Funktionen bekommen den Generator als Parameter, damit sie
//! ohne globalen Zustand deterministisch testbar bleiben.

use super::{PlotId, PointId};

/// Liefert eindeutige IDs für neu erzeugte Punkte und Plots.
pub trait IdGenerator {
    /// Nächste freie Punkt-ID.
    fn next_point_id(&mut self) -> PointId;
    /// Nächste freie Plot-ID.
    fn next_plot_id(&mut self) -> PlotId;
}

/// Monoton steigender Zähler, gehört dem `AppState`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next_point: u64,
    next_plot: u64,
}

impl SequentialIds {
    /// Startet beide Zähler bei 1.
    pub fn new() -> Self {
        Self {
            next_point: 1,
            next_plot: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_point_id(&mut self) -> PointId {
        let id = PointId(self.next_point);
        self.next_point += 1;
        id
    }

    fn next_plot_id(&mut self) -> PlotId {
        let id = PlotId(self.next_plot);
        self.next_plot += 1;
        id
    }
}
