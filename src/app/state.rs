//! Application State: zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{DragSession, PlainPoint, PlotId, PlotState, SequentialIds};
use crate::shared::EditorOptions;
use indexmap::IndexMap;
use std::sync::Arc;

/// In-Session-Zwischenablage.
#[derive(Debug, Clone, Default)]
pub struct ClipboardState {
    /// Zuletzt kopierte Punkte (Fallback, wenn die System-Zwischenablage
    /// nichts Brauchbares liefert)
    pub last_copied: Option<Vec<PlainPoint>>,
    /// Serialisierter Payload, den der Host in die System-Zwischenablage
    /// schreiben soll
    pub outgoing: Option<String>,
}

/// Laufender Drag auf einem Plot.
#[derive(Clone)]
pub struct DragState {
    /// Plot, auf dem gezogen wird
    pub plot_id: PlotId,
    /// Ursprungspositionen und Nachbar-Grenzen
    pub session: DragSession,
    /// Zustand vor Drag-Beginn (wird bei Commit als ein Undo-Schritt abgelegt)
    pub before: Snapshot,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Plots in Erstellungsreihenfolge (Arc für O(1)-Snapshots)
    pub plots: IndexMap<PlotId, Arc<PlotState>>,
    /// Aktiver Plot
    pub active_plot: Option<PlotId>,
    /// ID-Quelle für Punkte und Plots
    pub ids: SequentialIds,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Zwischenablage
    pub clipboard: ClipboardState,
    /// Laufender Drag
    pub drag: Option<DragState>,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen und einem Start-Plot.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen und einem Start-Plot.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self {
            plots: IndexMap::new(),
            active_plot: None,
            ids: SequentialIds::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            clipboard: ClipboardState::default(),
            drag: None,
        };
        let name = state.next_plot_name();
        let plot = PlotState::new(name, &state.options, &mut state.ids);
        state.active_plot = Some(plot.id);
        state.plots.insert(plot.id, Arc::new(plot));
        state
    }

    /// Anzahl der Plots.
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    /// Aktiver Plot (read-only).
    pub fn active(&self) -> Option<&PlotState> {
        self.active_plot
            .and_then(|id| self.plots.get(&id))
            .map(|plot| plot.as_ref())
    }

    /// Aktiver Plot als Arc-Klon (O(1)), damit `ids` parallel ausgeliehen
    /// werden kann.
    pub fn active_arc(&self) -> Option<Arc<PlotState>> {
        self.active_plot.and_then(|id| self.plots.get(&id).cloned())
    }

    /// Plot per ID.
    pub fn plot(&self, id: PlotId) -> Option<&PlotState> {
        self.plots.get(&id).map(|plot| plot.as_ref())
    }

    /// Ersetzt einen Plot ohne Undo-Eintrag (transiente Zwischenstände).
    pub fn replace_plot(&mut self, next: PlotState) {
        if let Some(slot) = self.plots.get_mut(&next.id) {
            *slot = Arc::new(next);
        }
    }

    /// Wendet eine Transition auf den aktiven Plot an.
    ///
    /// Ändert sich nichts, bleibt die History unberührt und es wird `false`
    /// geliefert. Sonst wird vorher ein Undo-Snapshot aufgenommen.
    pub fn apply_to_active_plot(
        &mut self,
        label: &str,
        transition: impl FnOnce(&PlotState, &mut SequentialIds) -> PlotState,
    ) -> bool {
        let Some(current) = self.active_arc() else {
            log::warn!("{}: kein aktiver Plot", label);
            return false;
        };
        let next = transition(&current, &mut self.ids);
        if next == *current {
            log::debug!("{}: keine Änderung", label);
            return false;
        }
        self.record_undo_snapshot();
        self.replace_plot(next);
        log::info!("{} auf {}", label, current.id);
        true
    }

    /// Nächster freier automatischer Plot-Name (`<Präfix> <n>`).
    pub fn next_plot_name(&self) -> String {
        let prefix = &self.options.plot_name_prefix;
        (self.plots.len() + 1..)
            .map(|n| format!("{} {}", prefix, n))
            .find(|name| self.plots.values().all(|plot| &plot.name != name))
            .unwrap_or_else(|| prefix.clone())
    }

    /// Entnimmt den für die System-Zwischenablage vorgesehenen Text.
    pub fn take_outgoing_clipboard(&mut self) -> Option<String> {
        self.clipboard.outgoing.take()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
