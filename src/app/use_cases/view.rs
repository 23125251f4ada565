//! Use-Cases für Achsen, Raster und Hintergrund des aktiven Plots.

use crate::app::AppState;
use crate::core::{Axis, Background, DomainBound};
use glam::DVec2;

/// Setzt eine Domänengrenze. Bestehende Punkte bleiben, wo sie sind.
pub fn set_domain_bound(state: &mut AppState, axis: Axis, bound: DomainBound, value: f64) {
    state.apply_to_active_plot("Domäne geändert", |plot, _| {
        plot.with_domain_bound(axis, bound, value)
    });
}

/// Setzt die Rasterweite einer Achse.
pub fn set_snap_precision(state: &mut AppState, axis: Axis, precision: f64) {
    state.apply_to_active_plot("Rasterweite geändert", |plot, _| {
        plot.with_snap_precision(axis, precision)
    });
}

/// Schaltet Snapping einer Achse um.
pub fn toggle_snap(state: &mut AppState, axis: Axis) {
    state.apply_to_active_plot("Snapping umgeschaltet", |plot, _| {
        plot.with_snap_toggled(axis)
    });
}

/// Schaltet die Rastersichtbarkeit um.
pub fn toggle_grid(state: &mut AppState) {
    state.apply_to_active_plot("Raster umgeschaltet", |plot, _| plot.with_grid_toggled());
}

/// Setzt ein neues Hintergrundbild (Standard-Deckkraft/Versatz/Skalierung).
pub fn set_background(state: &mut AppState, image_ref: &str) {
    state.apply_to_active_plot("Hintergrund gesetzt", |plot, _| {
        plot.with_background(Some(Background::new(image_ref)))
    });
}

/// Entfernt das Hintergrundbild.
pub fn clear_background(state: &mut AppState) {
    state.apply_to_active_plot("Hintergrund entfernt", |plot, _| {
        plot.with_background(None)
    });
}

/// Setzt die Deckkraft (auf [0, 1] begrenzt).
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    update_background(state, "Hintergrund-Deckkraft", |bg| {
        bg.opacity = opacity.clamp(0.0, 1.0)
    });
}

/// Setzt den Versatz im Domänen-Raum.
pub fn set_background_offset(state: &mut AppState, offset: DVec2) {
    update_background(state, "Hintergrund-Versatz", |bg| bg.offset = offset);
}

/// Setzt die Skalierung.
pub fn set_background_scale(state: &mut AppState, scale: f64) {
    update_background(state, "Hintergrund-Skalierung", |bg| bg.scale = scale);
}

fn update_background(state: &mut AppState, label: &str, update: impl FnOnce(&mut Background)) {
    state.apply_to_active_plot(label, |plot, _| {
        let Some(mut background) = plot.background.clone() else {
            log::debug!("{}: kein Hintergrund gesetzt", label);
            return plot.clone();
        };
        update(&mut background);
        plot.with_background(Some(background))
    });
}
