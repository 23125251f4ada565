//! Achsen-Domänen und Clamping.

use serde::{Deserialize, Serialize};

/// Klemmt `value` in das Intervall `[min, max]`.
///
/// Total: bei `min > max` liefert die Funktion `min`, die Einhaltung von
/// `min < max` liegt beim Aufrufer.
#[inline]
pub fn clamp(value: f64, domain: Domain) -> f64 {
    domain.min.max(domain.max.min(value))
}

/// Inklusives Werteintervall einer Achse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

/// Untere oder obere Grenze einer Domäne.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainBound {
    Min,
    Max,
}

impl Domain {
    /// Erstellt eine Domäne ohne Prüfung.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Gültig, wenn beide Grenzen endlich sind und `min < max` gilt.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Breite des Intervalls.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Liegt `value` im Intervall (inklusive Grenzen)?
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Klemmt einen Wert in diese Domäne.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, *self)
    }

    /// Liefert eine Kopie mit geänderter Grenze, oder `None` wenn das
    /// Ergebnis ungültig wäre.
    pub fn with_bound(&self, bound: DomainBound, value: f64) -> Option<Self> {
        let next = match bound {
            DomainBound::Min => Self::new(value, self.max),
            DomainBound::Max => Self::new(self.min, value),
        };
        next.is_valid().then_some(next)
    }
}

impl From<[f64; 2]> for Domain {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}
