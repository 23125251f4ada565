//! Punktmengen-Geometrie: selektionsbasierte Transformationen auf einer nach X
//! sortierten Punktliste.
//!
//! Alle Funktionen sind rein: sie lesen Punkte und Selektion und liefern eine
//! neue Liste (und ggf. eine neue Selektion) zurück. Jede Funktion hinterlässt
//! die Liste aufsteigend nach X sortiert. Operationen mit zu kleiner
//! Selektion sind stille No-Ops und geben die Eingabe als Kopie zurück.
//!
//! Veraltete IDs in der Selektion (Punkt existiert nicht mehr) werden überall
//! wie eine leere Schnittmenge behandelt.

use super::{clamp, AxisSnap, CurvePoint, Domain, IdGenerator, PlainPoint, PointId};
use glam::DVec2;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Selektion als geordnete Menge von Punkt-IDs.
pub type Selection = IndexSet<PointId>;

/// Mindestanzahl an Punkten, die Lösch- und Trim-Operationen stehen lassen.
pub const MIN_POINT_COUNT: usize = 2;

/// Richtung für Spiegeln und Duplizieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Ergebnis einer Operation, die auch die Selektion ersetzt.
#[derive(Debug, Clone, PartialEq)]
pub struct EditResult {
    pub points: Vec<CurvePoint>,
    pub selection: Selection,
}

impl EditResult {
    fn unchanged(points: &[CurvePoint], selection: &Selection) -> Self {
        Self {
            points: points.to_vec(),
            selection: selection.clone(),
        }
    }
}

// ── Hilfsfunktionen ─────────────────────────────────────────────────

/// Sortiert stabil nach X (Gleichstand: Einfügereihenfolge bleibt erhalten).
pub fn sort_by_x(points: &mut [CurvePoint]) {
    points.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
}

/// Prüft, ob die Liste aufsteigend nach X sortiert ist.
pub fn is_sorted_by_x(points: &[CurvePoint]) -> bool {
    points.windows(2).all(|w| w[0].position.x <= w[1].position.x)
}

/// Indizes aller selektierten Punkte in Listenreihenfolge.
pub fn selected_indices(points: &[CurvePoint], selection: &Selection) -> Vec<usize> {
    if selection.is_empty() {
        return Vec::new();
    }
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| selection.contains(&p.id))
        .map(|(i, _)| i)
        .collect()
}

/// X-Spanne `[min, max]` der selektierten Punkte.
pub fn selection_span(points: &[CurvePoint], selection: &Selection) -> Option<(f64, f64)> {
    points
        .iter()
        .filter(|p| selection.contains(&p.id))
        .fold(None, |acc, p| {
            let x = p.position.x;
            Some(match acc {
                None => (x, x),
                Some((lo, hi)) => (lo.min(x), hi.max(x)),
            })
        })
}

/// Entfernt veraltete IDs aus einer Selektion.
pub fn retain_existing(points: &[CurvePoint], selection: &Selection) -> Selection {
    let present: HashSet<PointId> = points.iter().map(|p| p.id).collect();
    selection
        .iter()
        .copied()
        .filter(|id| present.contains(id))
        .collect()
}

/// X-Grenzen, die ein selektierter Punkt beim Verschieben nicht überschreiten
/// darf: die Positionen der nächsten nicht selektierten Nachbarn.
///
/// Liefert pro Index `(links, rechts)`; `None` heißt, dass es auf dieser
/// Seite keinen festen Nachbarn gibt.
pub fn neighbor_limits(
    points: &[CurvePoint],
    selection: &Selection,
) -> Vec<(usize, Option<f64>, Option<f64>)> {
    let mut limits = Vec::new();
    let mut last_fixed: Option<f64> = None;
    for (i, p) in points.iter().enumerate() {
        if selection.contains(&p.id) {
            limits.push((i, last_fixed, None));
        } else {
            last_fixed = Some(p.position.x);
        }
    }

    let mut next_fixed: Option<f64> = None;
    let mut slot = limits.len();
    for (i, p) in points.iter().enumerate().rev() {
        if selection.contains(&p.id) {
            slot -= 1;
            debug_assert_eq!(limits[slot].0, i);
            limits[slot].2 = next_fixed;
        } else {
            next_fixed = Some(p.position.x);
        }
    }
    limits
}

/// Klemmt `x` zwischen optionale Nachbargrenzen.
pub fn clamp_between(x: f64, left: Option<f64>, right: Option<f64>) -> f64 {
    let x = left.map_or(x, |l| x.max(l));
    right.map_or(x, |r| x.min(r))
}

// ── Einfügen / Entfernen ────────────────────────────────────────────

/// Fügt einen Punkt sortiert ein. Bei gleichem X landet er hinter den
/// vorhandenen Punkten.
pub fn insert(points: &[CurvePoint], point: CurvePoint) -> Vec<CurvePoint> {
    let idx = points.partition_point(|p| p.position.x <= point.position.x);
    let mut out = Vec::with_capacity(points.len() + 1);
    out.extend_from_slice(&points[..idx]);
    out.push(point);
    out.extend_from_slice(&points[idx..]);
    out
}

/// Entfernt den Punkt mit `id`. Unbekannte ID oder zu wenige Punkte: No-Op.
pub fn remove(points: &[CurvePoint], id: PointId) -> Vec<CurvePoint> {
    if points.len() <= MIN_POINT_COUNT || !points.iter().any(|p| p.id == id) {
        return points.to_vec();
    }
    points.iter().copied().filter(|p| p.id != id).collect()
}

/// Entfernt alle selektierten Punkte, sofern danach noch genug übrig bleiben.
pub fn delete_selected(points: &[CurvePoint], selection: &Selection) -> Vec<CurvePoint> {
    let remaining: Vec<CurvePoint> = points
        .iter()
        .copied()
        .filter(|p| !selection.contains(&p.id))
        .collect();
    if remaining.len() == points.len() || remaining.len() < MIN_POINT_COUNT {
        return points.to_vec();
    }
    remaining
}

// ── Flip / Trim ─────────────────────────────────────────────────────

/// Spiegelt die Y-Werte der Selektion an der Nulllinie.
pub fn flip_y(
    points: &[CurvePoint],
    selection: &Selection,
    domain_y: Domain,
    snap_y: AxisSnap,
) -> Vec<CurvePoint> {
    let mut out = points.to_vec();
    for p in out.iter_mut().filter(|p| selection.contains(&p.id)) {
        p.position.y = clamp(snap_y.apply(-p.position.y), domain_y);
    }
    out
}

/// Spiegelt die X-Werte der Selektion an der Mitte ihrer eigenen X-Spanne.
pub fn flip_x(
    points: &[CurvePoint],
    selection: &Selection,
    domain_x: Domain,
    snap_x: AxisSnap,
) -> Vec<CurvePoint> {
    let Some((min_x, max_x)) = selection_span(points, selection) else {
        return points.to_vec();
    };
    let mut out = points.to_vec();
    for p in out.iter_mut().filter(|p| selection.contains(&p.id)) {
        let flipped = max_x - (p.position.x - min_x);
        p.position.x = clamp(snap_x.apply(flipped), domain_x);
    }
    sort_by_x(&mut out);
    out
}

/// Behält nur Punkte innerhalb der X-Spanne der Selektion (inklusive nicht
/// selektierter Punkte in diesem Fenster).
pub fn trim(points: &[CurvePoint], selection: &Selection) -> Vec<CurvePoint> {
    if selected_indices(points, selection).len() < 2 {
        return points.to_vec();
    }
    let Some((min_x, max_x)) = selection_span(points, selection) else {
        return points.to_vec();
    };
    points
        .iter()
        .copied()
        .filter(|p| p.position.x >= min_x && p.position.x <= max_x)
        .collect()
}

// ── Mirror / Duplicate ──────────────────────────────────────────────

/// Index-Spanne `[first, last]` der Selektion in der sortierten Liste.
///
/// Nicht selektierte Punkte zwischen `first` und `last` gehören mit zur
/// Spanne.
fn selected_span(points: &[CurvePoint], selection: &Selection) -> Option<(usize, usize)> {
    let indices = selected_indices(points, selection);
    Some((*indices.first()?, *indices.last()?))
}

/// Erzeugt neue Punkte jenseits des Ankers und ersetzt alle bestehenden Punkte
/// im dadurch belegten X-Bereich.
///
/// `sources` sind die Quell-Positionen, nächstgelegene zuerst; `map_x` bildet
/// ein Quell-X auf das Ziel-X ab. Kopien, die nach dem Clamping nicht strikt
/// jenseits des zuletzt behaltenen Punkts liegen (zuerst der Anker selbst),
/// werden verworfen.
fn claim_beyond_anchor(
    anchor: CurvePoint,
    direction: Direction,
    sources: impl Iterator<Item = DVec2>,
    map_x: impl Fn(f64) -> f64,
    domain_x: Domain,
    domain_y: Domain,
    ids: &mut dyn IdGenerator,
) -> Vec<CurvePoint> {
    let beyond = |x: f64, reference: f64| match direction {
        Direction::Right => x > reference,
        Direction::Left => x < reference,
    };

    let mut created: Vec<CurvePoint> = Vec::new();
    let mut frontier = anchor.position.x;
    for src in sources {
        let x = clamp(map_x(src.x), domain_x);
        if !beyond(x, frontier) {
            continue;
        }
        frontier = x;
        let y = clamp(src.y, domain_y);
        created.push(CurvePoint::new(ids.next_point_id(), DVec2::new(x, y)));
    }
    created
}

/// Ersetzt alle Punkte mit `lo <= x <= hi` (ohne `keep`) durch `created`.
fn splice_into_span(
    points: &[CurvePoint],
    lo: f64,
    hi: f64,
    keep: Option<PointId>,
    created: &[CurvePoint],
) -> Vec<CurvePoint> {
    let mut out: Vec<CurvePoint> = points
        .iter()
        .copied()
        .filter(|p| Some(p.id) == keep || p.position.x < lo || p.position.x > hi)
        .collect();
    out.extend_from_slice(created);
    sort_by_x(&mut out);
    out
}

/// X-Bereich, den neu erzeugte Punkte jenseits des Ankers belegen.
fn claimed_range(anchor_x: f64, created: &[CurvePoint]) -> (f64, f64) {
    created.iter().fold((anchor_x, anchor_x), |(lo, hi), p| {
        (lo.min(p.position.x), hi.max(p.position.x))
    })
}

/// Spiegelt die selektierte Spanne am Randpunkt in `direction`.
///
/// Der Anker (Punkt mit max. X bei `Right`, min. X bei `Left`) bleibt
/// unverändert. Jeder andere Punkt der Spanne erzeugt einen neuen Punkt bei
/// `2 * anchor.x - src.x` mit gleichem Y. Bestehende Punkte im neu belegten
/// Bereich werden entfernt. Neue Selektion: Anker plus neue Punkte.
pub fn mirror(
    points: &[CurvePoint],
    selection: &Selection,
    direction: Direction,
    domain_x: Domain,
    domain_y: Domain,
    ids: &mut dyn IdGenerator,
) -> EditResult {
    if selected_indices(points, selection).len() < 2 {
        return EditResult::unchanged(points, selection);
    }
    let Some((first, last)) = selected_span(points, selection) else {
        return EditResult::unchanged(points, selection);
    };

    let (anchor, sources): (CurvePoint, Vec<DVec2>) = match direction {
        Direction::Right => (
            points[last],
            points[first..last].iter().rev().map(|p| p.position).collect(),
        ),
        Direction::Left => (
            points[first],
            points[first + 1..=last].iter().map(|p| p.position).collect(),
        ),
    };
    let anchor_x = anchor.position.x;

    let created = claim_beyond_anchor(
        anchor,
        direction,
        sources.into_iter(),
        |x| 2.0 * anchor_x - x,
        domain_x,
        domain_y,
        ids,
    );
    if created.is_empty() {
        return EditResult::unchanged(points, selection);
    }

    let (lo, hi) = claimed_range(anchor_x, &created);
    let out = splice_into_span(points, lo, hi, Some(anchor.id), &created);

    let mut new_selection = Selection::with_capacity(created.len() + 1);
    new_selection.insert(anchor.id);
    new_selection.extend(created.iter().map(|p| p.id));

    EditResult {
        points: out,
        selection: new_selection,
    }
}

/// Dupliziert die selektierte Spanne um ihre eigene Breite nach links oder
/// rechts.
///
/// Kopien, die mit dem Anker zusammenfallen, entfallen; eine Selektion aus
/// einem einzelnen Punkt ergibt deshalb keine Kopie und bleibt ein No-Op.
/// Neue Selektion: die Kopien.
pub fn duplicate(
    points: &[CurvePoint],
    selection: &Selection,
    direction: Direction,
    domain_x: Domain,
    domain_y: Domain,
    ids: &mut dyn IdGenerator,
) -> EditResult {
    let Some((first, last)) = selected_span(points, selection) else {
        return EditResult::unchanged(points, selection);
    };
    let span = &points[first..=last];
    let width = points[last].position.x - points[first].position.x;

    let (anchor, offset, sources): (CurvePoint, f64, Vec<DVec2>) = match direction {
        Direction::Right => (
            points[last],
            width,
            span.iter().map(|p| p.position).collect(),
        ),
        Direction::Left => (
            points[first],
            -width,
            span.iter().rev().map(|p| p.position).collect(),
        ),
    };

    let created = claim_beyond_anchor(
        anchor,
        direction,
        sources.into_iter(),
        |x| x + offset,
        domain_x,
        domain_y,
        ids,
    );
    if created.is_empty() {
        return EditResult::unchanged(points, selection);
    }

    let (lo, hi) = claimed_range(anchor.position.x, &created);
    let out = splice_into_span(points, lo, hi, Some(anchor.id), &created);

    EditResult {
        points: out,
        selection: created.iter().map(|p| p.id).collect(),
    }
}

/// Fügt `incoming` (z.B. aus der Zwischenablage) ab dem ersten selektierten
/// Punkt ein.
///
/// Die eingehenden Punkte werden so verschoben, dass ihr minimales X auf dem
/// Anker liegt, in die Domänen geklemmt und mit frischen IDs versehen.
/// Bestehende Punkte in `[anchor, anchor + Breite]` werden ersetzt.
pub fn replace_selection_with_points(
    points: &[CurvePoint],
    selection: &Selection,
    incoming: &[PlainPoint],
    domain_x: Domain,
    domain_y: Domain,
    ids: &mut dyn IdGenerator,
) -> EditResult {
    let Some(first) = selected_indices(points, selection).first().copied() else {
        return EditResult::unchanged(points, selection);
    };
    let finite: Vec<PlainPoint> = incoming.iter().copied().filter(|p| p.is_finite()).collect();
    if finite.is_empty() {
        return EditResult::unchanged(points, selection);
    }

    let (min_x, max_x) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
    let anchor_x = points[first].position.x;
    let shift = anchor_x - min_x;
    let span_end = anchor_x + (max_x - min_x);

    let mut shifted: Vec<DVec2> = finite
        .iter()
        .map(|p| DVec2::new(clamp(p.x + shift, domain_x), clamp(p.y, domain_y)))
        .collect();
    shifted.sort_by(|a, b| a.x.total_cmp(&b.x));
    // Nach dem Clamping zusammenfallende X-Werte nur einmal übernehmen
    shifted.dedup_by(|b, a| b.x == a.x);

    let created: Vec<CurvePoint> = shifted
        .into_iter()
        .map(|pos| CurvePoint::new(ids.next_point_id(), pos))
        .collect();

    let out = splice_into_span(points, anchor_x, span_end, None, &created);

    EditResult {
        points: out,
        selection: created.iter().map(|p| p.id).collect(),
    }
}

// ── Verschieben auf Koordinate ──────────────────────────────────────

/// Achse einer Koordinaten-Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Verschiebt die Selektion so, dass ihr Schwerpunkt auf `target` liegt.
///
/// Auf der X-Achse wird jeder Punkt wie beim Drag zwischen seinen festen
/// Nachbarn gehalten. Danach Domain-Clamp und Snap; ein Rasterwert jenseits
/// eines Nachbarn wird zurückgeklemmt. Zuletzt neu sortiert.
pub fn move_selection_to(
    points: &[CurvePoint],
    selection: &Selection,
    axis: Axis,
    target: f64,
    domain: Domain,
    snap: AxisSnap,
) -> Vec<CurvePoint> {
    let indices = selected_indices(points, selection);
    if indices.is_empty() || !target.is_finite() {
        return points.to_vec();
    }

    let coord = |p: &CurvePoint| match axis {
        Axis::X => p.position.x,
        Axis::Y => p.position.y,
    };
    let centroid = indices.iter().map(|&i| coord(&points[i])).sum::<f64>() / indices.len() as f64;
    let delta = target - centroid;

    let mut out = points.to_vec();
    match axis {
        Axis::X => {
            for (i, left, right) in neighbor_limits(points, selection) {
                let candidate = clamp_between(points[i].position.x + delta, left, right);
                let snapped = snap.apply(clamp(candidate, domain));
                out[i].position.x = clamp_between(snapped, left, right);
            }
            sort_by_x(&mut out);
        }
        Axis::Y => {
            for &i in &indices {
                out[i].position.y = snap.apply(clamp(points[i].position.y + delta, domain));
            }
        }
    }
    out
}

// ── Selektion ───────────────────────────────────────────────────────

/// IDs aller Punkte innerhalb des achsenparallelen Rechtecks `a`-`b`.
pub fn points_in_rect(points: &[CurvePoint], a: DVec2, b: DVec2) -> Vec<PointId> {
    let min = a.min(b);
    let max = a.max(b);
    points
        .iter()
        .filter(|p| {
            p.position.x >= min.x
                && p.position.x <= max.x
                && p.position.y >= min.y
                && p.position.y <= max.y
        })
        .map(|p| p.id)
        .collect()
}

#[cfg(test)]
mod tests;
