//! Integrationstests für die monotone Spline:
//! - Endpunkt-Clamp und exakter Durchgang durch die Stützpunkte
//! - kein Überschwingen an Plateaus
//! - Bézier-Pfad passt zur Auswertung

use approx::assert_abs_diff_eq;
use curve_editor::{CurvePoint, MonotoneSpline, PointId, SplinePath};
use glam::DVec2;

fn points(coords: &[(f64, f64)]) -> Vec<CurvePoint> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| CurvePoint::new(PointId(i as u64 + 1), DVec2::new(x, y)))
        .collect()
}

fn cubic(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

#[test]
fn test_ausserhalb_der_daten_wird_geklemmt() {
    let pts = points(&[(-3.0, 2.0), (0.0, -1.0), (4.0, 0.5), (9.0, 7.0)]);
    let spline = MonotoneSpline::build(&pts);

    for x in [-100.0, -3.5, -3.0] {
        assert_eq!(spline.evaluate(x), 2.0);
    }
    for x in [9.0, 9.5, 1e6] {
        assert_eq!(spline.evaluate(x), 7.0);
    }
}

#[test]
fn test_exakter_durchgang_durch_stuetzpunkte() {
    let pts = points(&[
        (-180.0, 0.0),
        (-90.0, 1.3),
        (-12.5, 1.1),
        (0.0, -0.4),
        (33.3, -0.4),
        (120.0, 2.0),
        (180.0, -2.0),
    ]);
    let spline = MonotoneSpline::build(&pts);
    for p in &pts {
        assert_eq!(spline.evaluate(p.x()), p.y(), "Stützpunkt {}", p.id);
    }
}

#[test]
fn test_plateau_ohne_ueberschwingen() {
    let spline = MonotoneSpline::build(&points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]));
    for i in 0..=3000 {
        let x = i as f64 * 0.001;
        let y = spline.evaluate(x);
        assert!(
            (0.0..=1.0).contains(&y),
            "Überschwinger bei x = {}: y = {}",
            x,
            y
        );
    }
}

#[test]
fn test_monotone_daten_ergeben_monotone_kurve() {
    let spline = MonotoneSpline::build(&points(&[
        (0.0, 0.0),
        (1.0, 0.1),
        (1.5, 3.0),
        (5.0, 3.2),
        (6.0, 10.0),
    ]));
    let mut last = spline.evaluate(0.0);
    for i in 1..=6000 {
        let y = spline.evaluate(i as f64 * 0.001);
        assert!(y >= last - 1e-12, "Kurve fällt bei x = {}", i as f64 * 0.001);
        last = y;
    }
}

#[test]
fn test_bezier_pfad_deckt_sich_mit_auswertung() {
    let spline = MonotoneSpline::build(&points(&[(0.0, 0.0), (2.0, 1.5), (3.0, 0.5), (7.0, 4.0)]));
    let SplinePath::Curve { start, segments } = spline.path() else {
        panic!("Kurve erwartet");
    };

    let mut from = start;
    for segment in &segments {
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let p = cubic(from, segment.ctrl1, segment.ctrl2, segment.end, t);
            // Kontrollpunkte liegen bei 1/3 und 2/3: X ist linear in t
            assert_abs_diff_eq!(spline.evaluate(p.x), p.y, epsilon = 1e-9);
        }
        from = segment.end;
    }
}

#[test]
fn test_pfad_fuer_weniger_als_zwei_punkte() {
    assert_eq!(MonotoneSpline::build(&[]).path(), SplinePath::Empty);
    assert_eq!(
        MonotoneSpline::build(&points(&[(1.0, 2.0)])).path(),
        SplinePath::Marker(DVec2::new(1.0, 2.0))
    );
}
