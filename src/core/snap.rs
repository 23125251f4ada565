//! Raster-Snapping für Koordinaten.

/// Rundet `value` auf das nächste Vielfache von `precision`.
///
/// Deaktiviertes Snapping oder eine nicht-positive bzw. nicht-endliche
/// Schrittweite lassen den Wert unverändert.
pub fn snap(value: f64, enabled: bool, precision: f64) -> f64 {
    if !enabled || !precision.is_finite() || precision <= 0.0 {
        return value;
    }
    (value / precision).round() * precision
}

/// Snap-Konfiguration einer Achse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSnap {
    pub enabled: bool,
    pub precision: f64,
}

impl AxisSnap {
    /// Erstellt eine Snap-Konfiguration.
    pub const fn new(enabled: bool, precision: f64) -> Self {
        Self { enabled, precision }
    }

    /// Snapping aus.
    pub const fn off() -> Self {
        Self::new(false, 0.0)
    }

    /// Wendet die Konfiguration auf einen Wert an.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        snap(value, self.enabled, self.precision)
    }

    /// Liefert die Schrittweite, falls sie als Raster taugt.
    pub fn usable_precision(&self) -> Option<f64> {
        (self.precision.is_finite() && self.precision > 0.0).then_some(self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn snap_rounds_to_step() {
        assert_abs_diff_eq!(snap(2.3, true, 0.5), 2.5);
        assert_eq!(snap(2.3, false, 0.5), 2.3);
        assert_eq!(snap(2.3, true, 0.0), 2.3);
        assert_eq!(snap(2.3, true, -1.0), 2.3);
        assert_eq!(snap(2.3, true, f64::NAN), 2.3);
    }

    #[test]
    fn snap_is_idempotent() {
        for &p in &[0.1, 0.25, 0.5, 1.0, 3.0, 7.5] {
            for i in -50..50 {
                let v = i as f64 * 0.37 + 0.011;
                let once = snap(v, true, p);
                assert_eq!(snap(once, true, p), once, "v={v} p={p}");
            }
        }
    }
}
