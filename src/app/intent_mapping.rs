//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier endet die Eingabevalidierung: Textfelder werden geparst, unbrauchbare
//! Werte (nicht parsebar, NaN, ungültige Domäne) erzeugen keinen Command.

use super::{AppCommand, AppIntent, AppState};
use crate::clipboard;
use crate::core::Brush;
use anyhow::{bail, Context, Result};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddPlotRequested => vec![AppCommand::AddPlot],
        AppIntent::DuplicatePlotRequested => vec![AppCommand::DuplicateActivePlot],
        AppIntent::RemovePlotRequested { plot_id } => vec![AppCommand::RemovePlot { plot_id }],
        AppIntent::RenamePlotRequested { plot_id, name } => {
            let name = name.trim();
            if name.is_empty() {
                log::warn!("Leerer Plot-Name verworfen");
                return Vec::new();
            }
            vec![AppCommand::RenamePlot {
                plot_id,
                name: name.to_string(),
            }]
        }
        AppIntent::PlotActivated { plot_id } => vec![AppCommand::ActivatePlot { plot_id }],
        AppIntent::ReplacePointsRequested { points } => vec![AppCommand::ReplacePoints { points }],

        AppIntent::DomainFieldCommitted { axis, bound, text } => {
            let Some(value) = accept(parse_number(&text), "Domäne") else {
                return Vec::new();
            };
            let Some(plot) = state.active() else {
                return Vec::new();
            };
            if plot.domain(axis).with_bound(bound, value).is_none() {
                log::warn!(
                    "Domäne {:?}/{:?} = {} verworfen: min muss kleiner als max sein",
                    axis,
                    bound,
                    value
                );
                return Vec::new();
            }
            vec![AppCommand::SetDomainBound { axis, bound, value }]
        }
        AppIntent::SnapPrecisionFieldCommitted { axis, text } => {
            let parsed = parse_number(&text).and_then(|value| {
                if value <= 0.0 {
                    bail!("Rasterweite muss positiv sein, ist {}", value);
                }
                Ok(value)
            });
            match accept(parsed, "Rasterweite") {
                Some(precision) => vec![AppCommand::SetSnapPrecision { axis, precision }],
                None => Vec::new(),
            }
        }
        AppIntent::ToggleSnapRequested { axis } => vec![AppCommand::ToggleSnap { axis }],
        AppIntent::ToggleGridRequested => vec![AppCommand::ToggleGrid],

        AppIntent::CanvasDoubleClicked { position, hit } => match hit {
            Some(id) => vec![AppCommand::RemovePoint { id }],
            None if position.is_finite() => vec![AppCommand::AddPointAt { position }],
            None => Vec::new(),
        },
        AppIntent::PointClicked { id, additive } => vec![AppCommand::SelectPoint { id, additive }],
        AppIntent::CanvasClicked => vec![AppCommand::ClearSelection],
        AppIntent::BrushStarted { position } => vec![AppCommand::SetBrush {
            brush: Some(Brush {
                start: position,
                end: position,
            }),
        }],
        AppIntent::BrushMoved { position } => {
            let Some(brush) = state.active().and_then(|plot| plot.brush) else {
                return Vec::new();
            };
            vec![AppCommand::SetBrush {
                brush: Some(Brush {
                    start: brush.start,
                    end: position,
                }),
            }]
        }
        AppIntent::BrushEnded { additive } => vec![AppCommand::SelectInBrush { additive }],
        AppIntent::DragStarted => vec![AppCommand::BeginDrag],
        AppIntent::DragMoved { delta } => {
            if state.drag.is_none() || !delta.is_finite() {
                return Vec::new();
            }
            vec![AppCommand::UpdateDrag { delta }]
        }
        AppIntent::DragEnded => vec![AppCommand::EndDrag],

        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::FlipYRequested => vec![AppCommand::FlipY],
        AppIntent::FlipXRequested => vec![AppCommand::FlipX],
        AppIntent::TrimRequested => vec![AppCommand::TrimToSelection],
        AppIntent::MirrorRequested { direction } => vec![AppCommand::Mirror { direction }],
        AppIntent::DuplicateRequested { direction } => vec![AppCommand::Duplicate { direction }],
        AppIntent::CoordinateFieldCommitted { axis, text } => {
            match accept(parse_number(&text), "Koordinate") {
                Some(target) => vec![AppCommand::MoveSelectionTo { axis, target }],
                None => Vec::new(),
            }
        }
        AppIntent::NormalizeRequested => vec![AppCommand::NormalizeToDomain],

        AppIntent::CopyRequested => vec![AppCommand::CopySelection],
        AppIntent::PasteRequested { clipboard_text } => {
            let parsed = clipboard_text
                .as_deref()
                .and_then(clipboard::parse_points_from_clipboard);
            match parsed.or_else(|| state.clipboard.last_copied.clone()) {
                Some(points) => vec![AppCommand::PastePoints { points }],
                None => {
                    log::debug!("Einfügen: nichts in der Zwischenablage");
                    Vec::new()
                }
            }
        }

        AppIntent::BackgroundSelected { image_ref } => {
            vec![AppCommand::SetBackground { image_ref }]
        }
        AppIntent::BackgroundCleared => vec![AppCommand::ClearBackground],
        AppIntent::BackgroundOpacityChanged { opacity } if opacity.is_finite() => {
            vec![AppCommand::SetBackgroundOpacity { opacity }]
        }
        AppIntent::BackgroundOffsetChanged { offset } if offset.is_finite() => {
            vec![AppCommand::SetBackgroundOffset { offset }]
        }
        AppIntent::BackgroundScaleChanged { scale } if scale.is_finite() && scale > 0.0 => {
            vec![AppCommand::SetBackgroundScale { scale }]
        }
        AppIntent::BackgroundOpacityChanged { .. }
        | AppIntent::BackgroundOffsetChanged { .. }
        | AppIntent::BackgroundScaleChanged { .. } => {
            log::warn!("Ungültiger Hintergrund-Wert verworfen");
            Vec::new()
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}

/// Parst eine Zahl aus einem Eingabefeld. NaN und Unendlich gelten als
/// ungültig.
pub(crate) fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .with_context(|| format!("'{}' ist keine Zahl", trimmed))?;
    if !value.is_finite() {
        bail!("'{}' ist keine endliche Zahl", trimmed);
    }
    Ok(value)
}

fn accept<T>(result: Result<T>, field: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Eingabe {} verworfen: {:#}", field, e);
            None
        }
    }
}

#[cfg(test)]
mod tests;
