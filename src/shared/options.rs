//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Standardwerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Domänen ─────────────────────────────────────────────────────────

/// Standard-X-Domäne neuer Plots (Grad).
pub const DEFAULT_DOMAIN_X: [f64; 2] = [-180.0, 180.0];
/// Standard-Y-Domäne neuer Plots.
pub const DEFAULT_DOMAIN_Y: [f64; 2] = [-2.0, 2.0];

// ── Snapping ────────────────────────────────────────────────────────

/// Standard-Rasterweite auf der X-Achse.
pub const DEFAULT_SNAP_PRECISION_X: f64 = 5.0;
/// Standard-Rasterweite auf der Y-Achse.
pub const DEFAULT_SNAP_PRECISION_Y: f64 = 0.05;

// ── Startkurve ──────────────────────────────────────────────────────

/// Anzahl der Punkte der Sinus-Startkurve.
pub const SEED_POINT_COUNT: usize = 9;

// ── Verlauf ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;
/// Obergrenze der Stützpunkte beim Normalisieren auf die Domäne.
pub const MAX_NORMALIZE_SAMPLES: usize = 2001;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Plots ───────────────────────────────────────────────────
    /// X-Domäne neuer Plots `[min, max]`
    pub default_domain_x: [f64; 2],
    /// Y-Domäne neuer Plots `[min, max]`
    pub default_domain_y: [f64; 2],
    /// Präfix für automatisch vergebene Plot-Namen
    pub plot_name_prefix: String,
    /// Punktanzahl der Sinus-Startkurve
    pub seed_point_count: usize,

    // ── Snapping ────────────────────────────────────────────────
    /// Snapping auf X für neue Plots aktiv
    pub snap_x: bool,
    /// Snapping auf Y für neue Plots aktiv
    pub snap_y: bool,
    /// Rasterweite X
    pub snap_precision_x: f64,
    /// Rasterweite Y
    pub snap_precision_y: f64,

    // ── Verlauf / Grenzen ───────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
    /// Obergrenze der Stützpunkte beim Normalisieren
    pub max_normalize_samples: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_domain_x: DEFAULT_DOMAIN_X,
            default_domain_y: DEFAULT_DOMAIN_Y,
            plot_name_prefix: "Curve".to_string(),
            seed_point_count: SEED_POINT_COUNT,
            snap_x: false,
            snap_y: false,
            snap_precision_x: DEFAULT_SNAP_PRECISION_X,
            snap_precision_y: DEFAULT_SNAP_PRECISION_Y,
            history_depth: HISTORY_DEPTH,
            max_normalize_samples: MAX_NORMALIZE_SAMPLES,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei, bei Fehler Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_editor.toml")
    }

    /// Ersetzt unbrauchbare Werte (ungültige Domänen, zu kleine Zählwerte)
    /// durch die Standardwerte.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !crate::core::Domain::from(self.default_domain_x).is_valid() {
            log::warn!("Ungültige X-Domäne {:?}, verwende Standard", self.default_domain_x);
            self.default_domain_x = defaults.default_domain_x;
        }
        if !crate::core::Domain::from(self.default_domain_y).is_valid() {
            log::warn!("Ungültige Y-Domäne {:?}, verwende Standard", self.default_domain_y);
            self.default_domain_y = defaults.default_domain_y;
        }
        self.seed_point_count = self.seed_point_count.max(2);
        self.max_normalize_samples = self.max_normalize_samples.max(2);
        self.history_depth = self.history_depth.max(1);
        self
    }
}
