//! Undo/Redo über Snapshots der Plot-Sammlung.

use super::AppState;
use crate::core::{PlotId, PlotState};
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Plots liegen als `Arc`, ein Snapshot kopiert also nur Referenzen. Da
/// Plot-Übergänge immer neue Werte erzeugen, bleibt der alte Zustand in den
/// Snapshots unverändert erhalten.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Alle Plots in Reihenfolge
    pub plots: IndexMap<PlotId, Arc<PlotState>>,
    /// Aktiver Plot zum Zeitpunkt des Snapshots
    pub active_plot: Option<PlotId>,
}

impl Snapshot {
    /// Erstellt einen Snapshot (Arc-Klone der Plots).
    pub fn from_state(state: &AppState) -> Self {
        Self {
            plots: state.plots.clone(),
            active_plot: state.active_plot,
        }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut AppState) {
        state.plots = self.plots;
        state.active_plot = self.active_plot;
    }
}

/// Undo/Redo-Manager mit begrenzter Tiefe.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(max_depth),
            redo_stack: VecDeque::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen vorab erstellten Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        push_bounded(&mut self.undo_stack, snap, self.max_depth);
        self.redo_stack.clear();
    }

    /// Schließt eine transiente Sequenz (z.B. Drag) ab: `before` wird nur
    /// abgelegt, wenn sich `current` davon unterscheidet.
    pub fn commit(&mut self, before: Snapshot, current: &Snapshot) -> bool {
        if before == *current {
            return false;
        }
        self.record_snapshot(before);
        true
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl verfügbarer Undo-Schritte.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Nimmt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop_back()?;
        push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Nimmt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop_back()?;
        push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snap: Snapshot, max_depth: usize) {
    if stack.len() >= max_depth {
        stack.pop_front();
    }
    stack.push_back(snap);
}
