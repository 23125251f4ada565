use crate::core::{Axis, Brush, Direction, DomainBound, PlainPoint, PlotId, PointId};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Alle Werte sind bereits validiert.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Plot anlegen und aktivieren
    AddPlot,
    /// Aktiven Plot duplizieren und die Kopie aktivieren
    DuplicateActivePlot,
    /// Plot entfernen (nie den letzten)
    RemovePlot { plot_id: PlotId },
    /// Plot umbenennen
    RenamePlot { plot_id: PlotId, name: String },
    /// Plot aktivieren
    ActivatePlot { plot_id: PlotId },
    /// Punkte des aktiven Plots ersetzen
    ReplacePoints { points: Vec<PlainPoint> },

    /// Domänengrenze setzen
    SetDomainBound {
        axis: Axis,
        bound: DomainBound,
        value: f64,
    },
    /// Rasterweite setzen
    SetSnapPrecision { axis: Axis, precision: f64 },
    /// Snapping umschalten
    ToggleSnap { axis: Axis },
    /// Rastersichtbarkeit umschalten
    ToggleGrid,

    /// Punkt an Position einfügen (wird gesnappt und geclampt)
    AddPointAt { position: DVec2 },
    /// Einzelnen Punkt entfernen
    RemovePoint { id: PointId },
    /// Selektierte Punkte löschen
    DeleteSelected,

    /// Punkt selektieren (additiv = umschalten)
    SelectPoint { id: PointId, additive: bool },
    /// Alle Punkte selektieren
    SelectAll,
    /// Selektion aufheben
    ClearSelection,
    /// Aufziehrechteck setzen/entfernen (transient)
    SetBrush { brush: Option<Brush> },
    /// Punkte im Aufziehrechteck selektieren und Rechteck entfernen
    SelectInBrush { additive: bool },

    /// Drag-Session starten
    BeginDrag,
    /// Drag-Zwischenstand (transient)
    UpdateDrag { delta: DVec2 },
    /// Drag abschließen (ein Undo-Schritt)
    EndDrag,

    /// Selektion vertikal spiegeln
    FlipY,
    /// Selektion horizontal spiegeln
    FlipX,
    /// Auf Selektion zuschneiden
    TrimToSelection,
    /// Spiegeln und anhängen
    Mirror { direction: Direction },
    /// Verschoben anhängen
    Duplicate { direction: Direction },
    /// Schwerpunkt der Selektion auf Koordinate setzen
    MoveSelectionTo { axis: Axis, target: f64 },
    /// Auf Domäne normalisieren
    NormalizeToDomain,

    /// Selektion in die Zwischenablage kopieren
    CopySelection,
    /// Punkte anstelle der Selektion einfügen
    PastePoints { points: Vec<PlainPoint> },

    /// Hintergrundbild setzen
    SetBackground { image_ref: String },
    /// Hintergrundbild entfernen
    ClearBackground,
    /// Hintergrund-Deckkraft setzen
    SetBackgroundOpacity { opacity: f32 },
    /// Hintergrund-Versatz setzen
    SetBackgroundOffset { offset: DVec2 },
    /// Hintergrund-Skalierung setzen
    SetBackgroundScale { scale: f64 },

    /// Undo
    Undo,
    /// Redo
    Redo,
}
