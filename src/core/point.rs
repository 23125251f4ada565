//! Kontrollpunkte einer Kurve und ihre Identitäten.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prozessweit eindeutige, nie wiederverwendete Punkt-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Prozessweit eindeutige Plot-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlotId(pub u64);

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plot{}", self.0)
    }
}

/// Einzelner Kontrollpunkt eines Plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Stabile ID, überlebt Umsortierung
    pub id: PointId,
    /// Position im Domänen-Raum
    pub position: DVec2,
}

impl CurvePoint {
    /// Erstellt einen neuen Punkt.
    pub fn new(id: PointId, position: DVec2) -> Self {
        Self { id, position }
    }

    /// X-Koordinate (Sortierschlüssel).
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y-Koordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Entfernt die Identität, z.B. für die Zwischenablage.
    pub fn to_plain(&self) -> PlainPoint {
        PlainPoint::new(self.position.x, self.position.y)
    }
}

/// Punkt ohne Identität (noch keinem Plot zugeordnet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlainPoint {
    pub x: f64,
    pub y: f64,
}

impl PlainPoint {
    /// Erstellt einen Punkt aus Rohkoordinaten.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position als Vektor.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Beide Koordinaten endlich?
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for PlainPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
