//! Reine Geometrie-Funktionen für monotone kubische Hermite-Splines.
//!
//! Layer-neutral: kann von `core`, `app` und dem Binary importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen.
//!
//! Die Tangentenwahl (gewichtetes harmonisches Mittel, Null an Extrema) sorgt
//! dafür, dass die Kurve zwischen zwei Stützpunkten nie über deren Werte
//! hinausschießt. Der Vorzeichentest vergleicht exakt mit `0.0`; Sekanten mit
//! winzigem Rauschen um Null herum werden also nicht abgeflacht.

use crate::core::CurvePoint;
use glam::DVec2;
use std::fmt::Write;

/// Monotone Interpolante durch nach X sortierte Stützpunkte.
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    tangents: Vec<f64>,
}

/// Ein kubisches Bézier-Segment; der Startpunkt ist das Ende des Vorgängers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: DVec2,
    pub ctrl2: DVec2,
    pub end: DVec2,
}

/// Zeichenbare Darstellung der Spline im Domänen-Raum.
#[derive(Debug, Clone, PartialEq)]
pub enum SplinePath {
    /// Keine Stützpunkte
    Empty,
    /// Genau ein Stützpunkt: nur ein Marker
    Marker(DVec2),
    /// Startpunkt plus aneinandergereihte Bézier-Segmente
    Curve {
        start: DVec2,
        segments: Vec<CubicSegment>,
    },
}

/// Sekantensteigung; zusammenfallende X-Werte ergeben 0.
fn secant(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    if dx == 0.0 {
        0.0
    } else {
        (y1 - y0) / dx
    }
}

/// Tangente an einem inneren Stützpunkt aus den beiden angrenzenden Sekanten.
fn interior_tangent(s_prev: f64, s_next: f64, h_prev: f64, h_next: f64) -> f64 {
    if s_prev == 0.0 || s_next == 0.0 || s_prev.signum() != s_next.signum() {
        return 0.0;
    }
    let w1 = 2.0 * h_next + h_prev;
    let w2 = h_next + 2.0 * h_prev;
    let denom = w1 / s_prev + w2 / s_next;
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    (w1 + w2) / denom
}

impl MonotoneSpline {
    /// Baut die Spline aus nach X sortierten Punkten.
    pub fn build(points: &[CurvePoint]) -> Self {
        let positions: Vec<DVec2> = points.iter().map(|p| p.position).collect();
        Self::from_positions(&positions)
    }

    /// Baut die Spline aus nach X sortierten Positionen.
    pub fn from_positions(positions: &[DVec2]) -> Self {
        let xs: Vec<f64> = positions.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = positions.iter().map(|p| p.y).collect();
        let n = xs.len();

        let secants: Vec<f64> = (0..n.saturating_sub(1))
            .map(|i| secant(xs[i], ys[i], xs[i + 1], ys[i + 1]))
            .collect();

        let tangents = (0..n)
            .map(|i| {
                if n < 2 {
                    0.0
                } else if i == 0 {
                    secants[0]
                } else if i == n - 1 {
                    secants[n - 2]
                } else {
                    interior_tangent(
                        secants[i - 1],
                        secants[i],
                        xs[i] - xs[i - 1],
                        xs[i + 1] - xs[i],
                    )
                }
            })
            .collect();

        Self { xs, ys, tangents }
    }

    /// Anzahl der Stützpunkte.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// `true`, wenn keine Stützpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Tangente am Stützpunkt `i`.
    pub fn tangent(&self, i: usize) -> Option<f64> {
        self.tangents.get(i).copied()
    }

    /// Wertet die Spline bei `x` aus.
    ///
    /// Außerhalb des Datenbereichs wird der erste bzw. letzte Y-Wert
    /// geliefert (keine Extrapolation). Ohne Stützpunkte: NaN.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 || x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        // Segment i mit xs[i] <= x < xs[i + 1]
        let i = (self.xs.partition_point(|&xi| xi <= x) - 1).min(n - 2);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let h = x1 - x0;
        if h == 0.0 {
            return y0;
        }

        let t = (x - x0) / h;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        y0 * h00 + h * self.tangents[i] * h10 + y1 * h01 + h * self.tangents[i + 1] * h11
    }

    /// Wandelt die Hermite-Tangenten in Bézier-Segmente um.
    pub fn path(&self) -> SplinePath {
        match self.xs.len() {
            0 => SplinePath::Empty,
            1 => SplinePath::Marker(DVec2::new(self.xs[0], self.ys[0])),
            n => {
                let segments = (0..n - 1)
                    .map(|i| {
                        let dx = (self.xs[i + 1] - self.xs[i]) / 3.0;
                        CubicSegment {
                            ctrl1: DVec2::new(
                                self.xs[i] + dx,
                                self.ys[i] + dx * self.tangents[i],
                            ),
                            ctrl2: DVec2::new(
                                self.xs[i + 1] - dx,
                                self.ys[i + 1] - dx * self.tangents[i + 1],
                            ),
                            end: DVec2::new(self.xs[i + 1], self.ys[i + 1]),
                        }
                    })
                    .collect();
                SplinePath::Curve {
                    start: DVec2::new(self.xs[0], self.ys[0]),
                    segments,
                }
            }
        }
    }

    /// Tastet die Spline an `count` gleichmäßig verteilten Stellen in
    /// `[from, to]` ab (inklusive beider Enden).
    pub fn sample(&self, from: f64, to: f64, count: usize) -> Vec<DVec2> {
        match count {
            0 => Vec::new(),
            1 => vec![DVec2::new(from, self.evaluate(from))],
            _ => {
                let step = (to - from) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        let x = if i == count - 1 {
                            to
                        } else {
                            from + step * i as f64
                        };
                        DVec2::new(x, self.evaluate(x))
                    })
                    .collect()
            }
        }
    }
}

impl SplinePath {
    /// SVG-Pfaddaten (`M`/`C`-Befehle) im Domänen-Raum.
    ///
    /// Ein Marker wird als geschlossener Null-Pfad ausgegeben, den Renderer
    /// mit runden Linienenden als Punkt zeichnen.
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::new();
        match self {
            SplinePath::Empty => {}
            SplinePath::Marker(p) => {
                let _ = write!(d, "M{},{}Z", p.x, p.y);
            }
            SplinePath::Curve { start, segments } => {
                let _ = write!(d, "M{},{}", start.x, start.y);
                for s in segments {
                    let _ = write!(
                        d,
                        "C{},{},{},{},{},{}",
                        s.ctrl1.x, s.ctrl1.y, s.ctrl2.x, s.ctrl2.y, s.end.x, s.end.y
                    );
                }
            }
        }
        d
    }
}
