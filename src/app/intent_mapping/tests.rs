use crate::app::{AppCommand, AppIntent, AppState};
use crate::clipboard::serialize_points_for_clipboard;
use crate::core::{Axis, DomainBound, PlainPoint, PointId};
use glam::DVec2;

use super::{map_intent_to_commands, parse_number};

#[test]
fn parse_number_rejects_garbage_and_nan() {
    assert_eq!(parse_number(" 2.5 ").ok(), Some(2.5));
    assert!(parse_number("abc").is_err());
    assert!(parse_number("").is_err());
    assert!(parse_number("NaN").is_err());
    assert!(parse_number("inf").is_err());
}

#[test]
fn coordinate_field_with_garbage_maps_to_nothing() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CoordinateFieldCommitted {
            axis: Axis::X,
            text: "zwölf".into(),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn coordinate_field_maps_to_move_selection() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CoordinateFieldCommitted {
            axis: Axis::Y,
            text: "-0.5".into(),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::MoveSelectionTo {
            axis: Axis::Y,
            target: -0.5
        }]
    );
}

#[test]
fn inverted_domain_is_rejected_at_mapping() {
    let state = AppState::new();
    // Standard-X-Domäne ist [-180, 180]
    let commands = map_intent_to_commands(
        &state,
        AppIntent::DomainFieldCommitted {
            axis: Axis::X,
            bound: DomainBound::Min,
            text: "200".into(),
        },
    );
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DomainFieldCommitted {
            axis: Axis::X,
            bound: DomainBound::Min,
            text: "-90".into(),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::SetDomainBound {
            axis: Axis::X,
            bound: DomainBound::Min,
            value: -90.0
        }]
    );
}

#[test]
fn non_positive_snap_precision_is_rejected() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::SnapPrecisionFieldCommitted {
            axis: Axis::Y,
            text: "0".into(),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn double_click_removes_hit_point_or_adds_new_one() {
    let state = AppState::new();
    let remove = map_intent_to_commands(
        &state,
        AppIntent::CanvasDoubleClicked {
            position: DVec2::ZERO,
            hit: Some(PointId(3)),
        },
    );
    assert_eq!(remove, vec![AppCommand::RemovePoint { id: PointId(3) }]);

    let add = map_intent_to_commands(
        &state,
        AppIntent::CanvasDoubleClicked {
            position: DVec2::new(1.0, 2.0),
            hit: None,
        },
    );
    assert_eq!(
        add,
        vec![AppCommand::AddPointAt {
            position: DVec2::new(1.0, 2.0)
        }]
    );
}

#[test]
fn paste_prefers_system_clipboard_payload() {
    let mut state = AppState::new();
    state.clipboard.last_copied = Some(vec![PlainPoint::new(9.0, 9.0)]);
    let text =
        serialize_points_for_clipboard(&[PlainPoint::new(1.0, 2.0)]).expect("serialisierbar");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PasteRequested {
            clipboard_text: Some(text),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::PastePoints {
            points: vec![PlainPoint::new(1.0, 2.0)]
        }]
    );
}

#[test]
fn paste_falls_back_to_last_copied() {
    let mut state = AppState::new();
    state.clipboard.last_copied = Some(vec![PlainPoint::new(9.0, 9.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PasteRequested {
            clipboard_text: Some("fremder Text".into()),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::PastePoints {
            points: vec![PlainPoint::new(9.0, 9.0)]
        }]
    );
}

#[test]
fn paste_without_any_source_maps_to_nothing() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PasteRequested {
            clipboard_text: None,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn drag_move_without_session_is_dropped() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::DragMoved {
            delta: DVec2::new(1.0, 0.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn brush_move_without_brush_is_dropped() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::BrushMoved {
            position: DVec2::ONE,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn blank_rename_is_rejected() {
    let state = AppState::new();
    let plot_id = state.active_plot.expect("Start-Plot");
    let commands = map_intent_to_commands(
        &state,
        AppIntent::RenamePlotRequested {
            plot_id,
            name: "   ".into(),
        },
    );
    assert!(commands.is_empty());
}
