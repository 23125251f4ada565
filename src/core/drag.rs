//! Drag-Protokoll für selektierte Punkte.
//!
//! Eine Session merkt sich beim Start die Ursprungsposition jedes selektierten
//! Punkts sowie dessen feste Nachbarn. Jedes Update rechnet vom Ursprung aus
//! (nicht vom letzten Zwischenstand), damit sich Rundungen durch Snapping nicht
//! aufsummieren. Während des Drags darf die Liste unsortiert sein, erst
//! `commit` stellt die Sortierung wieder her.

use super::point_set::{clamp_between, neighbor_limits, sort_by_x, Selection};
use super::{clamp, AxisSnap, CurvePoint, Domain, PointId};
use glam::DVec2;

/// Ursprungszustand eines gezogenen Punkts.
#[derive(Debug, Clone, PartialEq)]
struct DragOrigin {
    id: PointId,
    origin: DVec2,
    left_limit: Option<f64>,
    right_limit: Option<f64>,
}

/// Laufende Drag-Session.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    origins: Vec<DragOrigin>,
}

impl DragSession {
    /// Startet eine Session für alle selektierten Punkte.
    /// Ohne (gültige) Selektion gibt es nichts zu ziehen.
    pub fn begin(points: &[CurvePoint], selection: &Selection) -> Option<Self> {
        let origins: Vec<DragOrigin> = neighbor_limits(points, selection)
            .into_iter()
            .map(|(i, left_limit, right_limit)| DragOrigin {
                id: points[i].id,
                origin: points[i].position,
                left_limit,
                right_limit,
            })
            .collect();
        (!origins.is_empty()).then_some(Self { origins })
    }

    /// Anzahl gezogener Punkte.
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// `true`, wenn die Session keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Berechnet die Positionen für den Gesamt-Versatz `delta` seit Drag-Start.
    ///
    /// Reihenfolge pro Punkt: Nachbar-Clamp (nur X), Domain-Clamp, Snap.
    /// Ein Rasterwert jenseits eines festen Nachbarn wird auf dessen X
    /// zurückgeklemmt. Selektierte Punkte dürfen sich dabei gegenseitig
    /// überholen.
    pub fn update(
        &self,
        points: &[CurvePoint],
        delta: DVec2,
        domain_x: Domain,
        domain_y: Domain,
        snap_x: AxisSnap,
        snap_y: AxisSnap,
    ) -> Vec<CurvePoint> {
        let mut out = points.to_vec();
        for origin in &self.origins {
            let Some(p) = out.iter_mut().find(|p| p.id == origin.id) else {
                continue;
            };
            let candidate = origin.origin + delta;
            let (left, right) = (origin.left_limit, origin.right_limit);
            let x = clamp_between(candidate.x, left, right);
            let x = clamp_between(snap_x.apply(clamp(x, domain_x)), left, right);
            p.position = DVec2::new(x, snap_y.apply(clamp(candidate.y, domain_y)));
        }
        out
    }

    /// Schließt den Drag ab: sortiert neu und klemmt die gezogenen Punkte in
    /// die Domänen.
    pub fn commit(
        &self,
        points: &[CurvePoint],
        domain_x: Domain,
        domain_y: Domain,
    ) -> Vec<CurvePoint> {
        let mut out = points.to_vec();
        for p in out
            .iter_mut()
            .filter(|p| self.origins.iter().any(|o| o.id == p.id))
        {
            p.position.x = clamp(p.position.x, domain_x);
            p.position.y = clamp(p.position.y, domain_y);
        }
        sort_by_x(&mut out);
        out
    }
}
