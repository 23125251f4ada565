//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        // Ein offener Drag wird vor jedem fremden Command abgeschlossen, damit
        // kein Zwischenstand des Drags im Verlauf landet.
        if state.drag.is_some() && !continues_drag(&command) {
            log::debug!("Offener Drag wird vor {:?} abgeschlossen", command);
            handlers::selection::end_drag(state);
        }

        match command {
            // === Plots ===
            AppCommand::AddPlot => handlers::plots::add(state),
            AppCommand::DuplicateActivePlot => handlers::plots::duplicate_active(state),
            AppCommand::RemovePlot { plot_id } => handlers::plots::remove(state, plot_id),
            AppCommand::RenamePlot { plot_id, name } => {
                handlers::plots::rename(state, plot_id, &name)
            }
            AppCommand::ActivatePlot { plot_id } => handlers::plots::activate(state, plot_id),
            AppCommand::ReplacePoints { points } => {
                handlers::plots::replace_points(state, &points)
            }

            // === Achsen & Raster ===
            AppCommand::SetDomainBound { axis, bound, value } => {
                handlers::view::set_domain_bound(state, axis, bound, value)
            }
            AppCommand::SetSnapPrecision { axis, precision } => {
                handlers::view::set_snap_precision(state, axis, precision)
            }
            AppCommand::ToggleSnap { axis } => handlers::view::toggle_snap(state, axis),
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),

            // === Editing ===
            AppCommand::AddPointAt { position } => handlers::editing::add_point(state, position),
            AppCommand::RemovePoint { id } => handlers::editing::remove_point(state, id),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::FlipY => handlers::editing::flip_y(state),
            AppCommand::FlipX => handlers::editing::flip_x(state),
            AppCommand::TrimToSelection => handlers::editing::trim(state),
            AppCommand::Mirror { direction } => handlers::editing::mirror(state, direction),
            AppCommand::Duplicate { direction } => handlers::editing::duplicate(state, direction),
            AppCommand::MoveSelectionTo { axis, target } => {
                handlers::editing::move_selection_to(state, axis, target)
            }
            AppCommand::NormalizeToDomain => handlers::editing::normalize(state),

            // === Selektion ===
            AppCommand::SelectPoint { id, additive } => {
                handlers::selection::select_point(state, id, additive)
            }
            AppCommand::SelectAll => handlers::selection::select_all(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SetBrush { brush } => handlers::selection::set_brush(state, brush),
            AppCommand::SelectInBrush { additive } => {
                handlers::selection::select_in_brush(state, additive)
            }
            AppCommand::BeginDrag => handlers::selection::begin_drag(state),
            AppCommand::UpdateDrag { delta } => handlers::selection::update_drag(state, delta),
            AppCommand::EndDrag => handlers::selection::end_drag(state),

            // === Zwischenablage ===
            AppCommand::CopySelection => handlers::clipboard::copy(state),
            AppCommand::PastePoints { points } => handlers::clipboard::paste(state, &points),

            // === Hintergrund ===
            AppCommand::SetBackground { image_ref } => {
                handlers::view::set_background(state, &image_ref)
            }
            AppCommand::ClearBackground => handlers::view::clear_background(state),
            AppCommand::SetBackgroundOpacity { opacity } => {
                handlers::view::set_background_opacity(state, opacity)
            }
            AppCommand::SetBackgroundOffset { offset } => {
                handlers::view::set_background_offset(state, offset)
            }
            AppCommand::SetBackgroundScale { scale } => {
                handlers::view::set_background_scale(state, scale)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}

/// Commands, die einen laufenden Drag nicht abschließen. Undo/Redo brechen
/// ihn selbst ab.
fn continues_drag(command: &AppCommand) -> bool {
    matches!(
        command,
        AppCommand::BeginDrag
            | AppCommand::UpdateDrag { .. }
            | AppCommand::EndDrag
            | AppCommand::Undo
            | AppCommand::Redo
    )
}
