use crate::core::{Axis, Direction, DomainBound, PlainPoint, PlotId, PointId};
use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Textfelder kommen roh an; das Parsen passiert beim Mapping auf Commands.
/// Positionen und Deltas sind bereits in Domänen-Koordinaten umgerechnet.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Plots ───────────────────────────────────────────────────
    /// Neuen Plot mit Startkurve anlegen
    AddPlotRequested,
    /// Aktiven Plot duplizieren
    DuplicatePlotRequested,
    /// Plot entfernen
    RemovePlotRequested { plot_id: PlotId },
    /// Plot umbenennen
    RenamePlotRequested { plot_id: PlotId, name: String },
    /// Plot aktivieren (Tab-Wechsel)
    PlotActivated { plot_id: PlotId },
    /// Punktliste des aktiven Plots komplett ersetzen (z.B. Import)
    ReplacePointsRequested { points: Vec<PlainPoint> },

    // ── Achsen & Raster ─────────────────────────────────────────
    /// Domänen-Eingabefeld bestätigt
    DomainFieldCommitted {
        axis: Axis,
        bound: DomainBound,
        text: String,
    },
    /// Rasterweiten-Eingabefeld bestätigt
    SnapPrecisionFieldCommitted { axis: Axis, text: String },
    /// Snapping einer Achse umschalten
    ToggleSnapRequested { axis: Axis },
    /// Rastersichtbarkeit umschalten
    ToggleGridRequested,

    // ── Canvas ──────────────────────────────────────────────────
    /// Doppelklick; `hit` ist der getroffene Punkt, falls vorhanden
    CanvasDoubleClicked {
        position: DVec2,
        hit: Option<PointId>,
    },
    /// Einfacher Klick auf einen Punkt
    PointClicked { id: PointId, additive: bool },
    /// Klick ins Leere
    CanvasClicked,
    /// Aufziehrechteck beginnt
    BrushStarted { position: DVec2 },
    /// Aufziehrechteck wird aufgezogen
    BrushMoved { position: DVec2 },
    /// Aufziehrechteck losgelassen
    BrushEnded { additive: bool },
    /// Drag der Selektion beginnt
    DragStarted,
    /// Drag-Update mit Gesamtversatz seit Drag-Beginn
    DragMoved { delta: DVec2 },
    /// Drag beendet
    DragEnded,

    // ── Selektion & Transformationen ────────────────────────────
    /// Alle Punkte selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Selektierte Punkte löschen
    DeleteSelectedRequested,
    /// Selektion vertikal spiegeln
    FlipYRequested,
    /// Selektion horizontal spiegeln
    FlipXRequested,
    /// Alles außerhalb der Selektion entfernen
    TrimRequested,
    /// Selektion am Randpunkt spiegeln und anhängen
    MirrorRequested { direction: Direction },
    /// Selektion verschoben anhängen
    DuplicateRequested { direction: Direction },
    /// Koordinaten-Eingabefeld der Selektion bestätigt
    CoordinateFieldCommitted { axis: Axis, text: String },
    /// Spline gleichmäßig über die X-Domäne neu abtasten
    NormalizeRequested,

    // ── Zwischenablage ──────────────────────────────────────────
    /// Selektion kopieren
    CopyRequested,
    /// Einfügen; `clipboard_text` ist der vom Host gelesene Inhalt der
    /// System-Zwischenablage
    PasteRequested { clipboard_text: Option<String> },

    // ── Hintergrund ─────────────────────────────────────────────
    /// Hintergrundbild gewählt
    BackgroundSelected { image_ref: String },
    /// Hintergrundbild entfernen
    BackgroundCleared,
    /// Deckkraft geändert
    BackgroundOpacityChanged { opacity: f32 },
    /// Versatz geändert
    BackgroundOffsetChanged { offset: DVec2 },
    /// Skalierung geändert
    BackgroundScaleChanged { scale: f64 },

    // ── History ─────────────────────────────────────────────────
    /// Rückgängig
    UndoRequested,
    /// Wiederholen
    RedoRequested,
}
