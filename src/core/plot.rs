//! Der Plot-Zustand: Punkte, Selektion, Domänen, Snap-Konfiguration und
//! Hintergrund eines einzelnen Plots.
//!
//! `PlotState` ist ein reiner Wert. Alle Übergänge erzeugen einen neuen Zustand
//! und lassen den alten unangetastet, damit der Undo-Verlauf ihn ohne weiteres
//! Kopieren aufbewahren kann.

use super::point_set::{self, Axis, EditResult, Selection};
use super::{AxisSnap, CurvePoint, Domain, DomainBound, IdGenerator, PlotId, PointId};
use crate::shared::{EditorOptions, MonotoneSpline};
use glam::DVec2;

/// Hintergrundbild zum Abpausen (nur Daten, die Geometrie nutzt es nicht).
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    /// Verweis auf das Bild (Pfad oder URL), vom Host aufgelöst
    pub image_ref: String,
    /// Deckkraft (0.0 = transparent, 1.0 = opak)
    pub opacity: f32,
    /// Versatz im Domänen-Raum
    pub offset: DVec2,
    /// Skalierung (1.0 = Original)
    pub scale: f64,
}

impl Background {
    /// Erstellt einen Hintergrund mit Standardwerten.
    pub fn new(image_ref: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            opacity: 0.5,
            offset: DVec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Aufziehrechteck während einer Bereichsselektion (transient).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub start: DVec2,
    pub end: DVec2,
}

/// Vollständiger Zustand eines Plots.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotState {
    /// Eindeutige Plot-ID
    pub id: PlotId,
    /// Anzeigename (Eindeutigkeit regelt die Anwendung)
    pub name: String,
    /// Kontrollpunkte, aufsteigend nach X
    pub points: Vec<CurvePoint>,
    /// Selektierte Punkt-IDs (kann veraltete IDs enthalten)
    pub selection: Selection,
    /// Laufendes Aufziehrechteck
    pub brush: Option<Brush>,
    /// Wertebereich der X-Achse
    pub domain_x: Domain,
    /// Wertebereich der Y-Achse
    pub domain_y: Domain,
    /// Raster-Snapping auf X aktiv
    pub snap_x: bool,
    /// Raster-Snapping auf Y aktiv
    pub snap_y: bool,
    /// Rasterweite X
    pub snap_precision_x: f64,
    /// Rasterweite Y
    pub snap_precision_y: f64,
    /// Raster sichtbar
    pub show_grid: bool,
    /// Optionales Hintergrundbild
    pub background: Option<Background>,
}

impl PlotState {
    /// Erstellt einen Plot mit Sinus-Startkurve über den Standard-Domänen.
    pub fn new(
        name: impl Into<String>,
        options: &EditorOptions,
        ids: &mut dyn IdGenerator,
    ) -> Self {
        let domain_x = Domain::from(options.default_domain_x);
        let domain_y = Domain::from(options.default_domain_y);
        let points = seed_points(domain_x, domain_y, options.seed_point_count, ids);
        Self {
            id: ids.next_plot_id(),
            name: name.into(),
            points,
            selection: Selection::new(),
            brush: None,
            domain_x,
            domain_y,
            snap_x: options.snap_x,
            snap_y: options.snap_y,
            snap_precision_x: options.snap_precision_x,
            snap_precision_y: options.snap_precision_y,
            show_grid: true,
            background: None,
        }
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Snap-Konfiguration der X-Achse.
    pub fn x_snap(&self) -> AxisSnap {
        AxisSnap::new(self.snap_x, self.snap_precision_x)
    }

    /// Snap-Konfiguration der Y-Achse.
    pub fn y_snap(&self) -> AxisSnap {
        AxisSnap::new(self.snap_y, self.snap_precision_y)
    }

    /// Domäne einer Achse.
    pub fn domain(&self, axis: Axis) -> Domain {
        match axis {
            Axis::X => self.domain_x,
            Axis::Y => self.domain_y,
        }
    }

    /// Snap-Konfiguration einer Achse.
    pub fn snap(&self, axis: Axis) -> AxisSnap {
        match axis {
            Axis::X => self.x_snap(),
            Axis::Y => self.y_snap(),
        }
    }

    /// Monotone Spline durch die aktuellen Punkte.
    pub fn spline(&self) -> MonotoneSpline {
        MonotoneSpline::build(&self.points)
    }

    /// Selektion ohne veraltete IDs.
    pub fn live_selection(&self) -> Selection {
        point_set::retain_existing(&self.points, &self.selection)
    }

    /// Selektierte Punkte in X-Reihenfolge.
    pub fn selected_points(&self) -> Vec<CurvePoint> {
        self.points
            .iter()
            .copied()
            .filter(|p| self.selection.contains(&p.id))
            .collect()
    }

    /// Sucht einen Punkt per ID.
    pub fn point(&self, id: PointId) -> Option<&CurvePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Bringt eine Eingabeposition auf Raster und in die Domänen.
    pub fn constrain(&self, position: DVec2) -> DVec2 {
        DVec2::new(
            self.domain_x.clamp(self.x_snap().apply(position.x)),
            self.domain_y.clamp(self.y_snap().apply(position.y)),
        )
    }

    // ── Übergänge ───────────────────────────────────────────────

    /// Tiefe Kopie mit neuer Plot-ID, neuen Punkt-IDs und leerer Selektion.
    pub fn duplicated(&self, name: impl Into<String>, ids: &mut dyn IdGenerator) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| CurvePoint::new(ids.next_point_id(), p.position))
            .collect();
        Self {
            id: ids.next_plot_id(),
            name: name.into(),
            points,
            selection: Selection::new(),
            brush: None,
            ..self.clone()
        }
    }

    /// Neuer Anzeigename.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Setzt eine Domänengrenze. Ungültige Ergebnisse (`min >= max`, nicht
    /// endlich) lassen den Zustand unverändert. Punkte werden nicht verschoben.
    pub fn with_domain_bound(&self, axis: Axis, bound: DomainBound, value: f64) -> Self {
        let Some(domain) = self.domain(axis).with_bound(bound, value) else {
            return self.clone();
        };
        let mut next = self.clone();
        match axis {
            Axis::X => next.domain_x = domain,
            Axis::Y => next.domain_y = domain,
        }
        next
    }

    /// Schaltet das Snapping einer Achse um.
    pub fn with_snap_toggled(&self, axis: Axis) -> Self {
        let mut next = self.clone();
        match axis {
            Axis::X => next.snap_x = !next.snap_x,
            Axis::Y => next.snap_y = !next.snap_y,
        }
        next
    }

    /// Schaltet die Rastersichtbarkeit um.
    pub fn with_grid_toggled(&self) -> Self {
        Self {
            show_grid: !self.show_grid,
            ..self.clone()
        }
    }

    /// Setzt die Rasterweite einer Achse.
    pub fn with_snap_precision(&self, axis: Axis, precision: f64) -> Self {
        let mut next = self.clone();
        match axis {
            Axis::X => next.snap_precision_x = precision,
            Axis::Y => next.snap_precision_y = precision,
        }
        next
    }

    /// Ersetzt die Selektion.
    pub fn with_selection(&self, selection: Selection) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    /// Setzt oder entfernt das Aufziehrechteck.
    pub fn with_brush(&self, brush: Option<Brush>) -> Self {
        Self {
            brush,
            ..self.clone()
        }
    }

    /// Ersetzt die Punktliste (Ergebnis einer Geometrie-Operation).
    pub fn with_points(&self, mut points: Vec<CurvePoint>) -> Self {
        if !point_set::is_sorted_by_x(&points) {
            point_set::sort_by_x(&mut points);
        }
        Self {
            points,
            ..self.clone()
        }
    }

    /// Übernimmt Punkte und Selektion aus einem `EditResult`.
    pub fn with_edit(&self, edit: EditResult) -> Self {
        self.with_points(edit.points).with_selection(edit.selection)
    }

    /// Verschiebt den Schwerpunkt der Selektion auf `target`.
    pub fn with_selection_moved_to(&self, axis: Axis, target: f64) -> Self {
        let points = point_set::move_selection_to(
            &self.points,
            &self.selection,
            axis,
            target,
            self.domain(axis),
            self.snap(axis),
        );
        self.with_points(points)
    }

    /// Setzt oder entfernt den Hintergrund.
    pub fn with_background(&self, background: Option<Background>) -> Self {
        Self {
            background,
            ..self.clone()
        }
    }

    /// Tastet die aktuelle Spline gleichmäßig über die X-Domäne ab und ersetzt
    /// damit alle Punkte. Die Selektion wird geleert.
    ///
    /// Schrittweite ist die X-Rasterweite; ist sie unbrauchbar, werden
    /// `fallback_count` Punkte verteilt. Mehr als `max_samples` Punkte werden
    /// nie erzeugt.
    pub fn normalized_to_domain(
        &self,
        max_samples: usize,
        fallback_count: usize,
        ids: &mut dyn IdGenerator,
    ) -> Self {
        let spline = self.spline();
        if spline.is_empty() {
            return self.clone();
        }
        let xs = normalize_positions(
            self.domain_x,
            self.x_snap().usable_precision(),
            max_samples.max(2),
            fallback_count.max(2),
        );
        let y_snap = self.y_snap();
        let points = xs
            .into_iter()
            .map(|x| {
                let y = self.domain_y.clamp(y_snap.apply(spline.evaluate(x)));
                CurvePoint::new(ids.next_point_id(), DVec2::new(x, y))
            })
            .collect();
        Self {
            points,
            selection: Selection::new(),
            brush: None,
            ..self.clone()
        }
    }
}

/// X-Positionen für das Normalisieren: Raster ab `domain.min`, Domänen-Maximum
/// immer eingeschlossen.
fn normalize_positions(
    domain: Domain,
    step: Option<f64>,
    max_samples: usize,
    fallback_count: usize,
) -> Vec<f64> {
    let evenly = |count: usize| -> Vec<f64> {
        let step = domain.width() / (count - 1) as f64;
        (0..count)
            .map(|i| {
                if i == count - 1 {
                    domain.max
                } else {
                    domain.min + step * i as f64
                }
            })
            .collect()
    };

    let Some(step) = step else {
        return evenly(fallback_count.min(max_samples));
    };

    let steps = (domain.width() / step).floor();
    if !steps.is_finite() || steps + 1.0 > max_samples as f64 {
        return evenly(max_samples);
    }

    let mut xs: Vec<f64> = (0..=steps as usize)
        .map(|i| (domain.min + step * i as f64).min(domain.max))
        .collect();
    if let Some(&last) = xs.last() {
        if last < domain.max {
            xs.push(domain.max);
        }
    }
    if xs.len() < 2 || xs.len() > max_samples {
        return evenly(xs.len().clamp(2, max_samples));
    }
    xs
}

/// Sinus-Startkurve über eine volle Periode der X-Domäne.
fn seed_points(
    domain_x: Domain,
    domain_y: Domain,
    count: usize,
    ids: &mut dyn IdGenerator,
) -> Vec<CurvePoint> {
    let count = count.max(2);
    let mid_y = 0.5 * (domain_y.min + domain_y.max);
    let amplitude = 0.25 * domain_y.width();
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            let x = domain_x.min + t * domain_x.width();
            let y = mid_y + amplitude * (std::f64::consts::TAU * t).sin();
            CurvePoint::new(ids.next_point_id(), DVec2::new(x, y))
        })
        .collect()
}
