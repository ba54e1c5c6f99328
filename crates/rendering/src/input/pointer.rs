use bevy::prelude::*;
use bevy::window::WindowEvent;
use bevy_egui::EguiContexts;

use simulation::edge_usage::compute_edge_usage;
use simulation::line_editor::{CommitOutcome, LineEditor};
use simulation::line_handles::build_line_handles;
use simulation::topology::TopologyError;
use simulation::transit::TransitWorld;

use super::cursor::{pointer_event, PointerEvent};
use super::types::{CursorWorldPos, StatusMessage};

/// True while egui owns the pointer (hovering a panel or mid-interaction).
fn ui_captures_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Whether `event` reaches the editor. Only a primary press is held back
/// while egui owns the pointer; cancels, moves and releases always get
/// through, so a drag that wanders over a panel can still finish or be
/// abandoned.
pub fn forwards(event: PointerEvent, ui_has_pointer: bool) -> bool {
    !(ui_has_pointer && event == PointerEvent::PrimaryDown)
}

/// Feed one pointer event to the editor.
///
/// Returns the commit result for a primary release, `None` otherwise. Press
/// hit-tests against handles built from the world as it is right now, so a
/// commit earlier in the same frame is already visible.
pub fn apply_pointer_event(
    event: PointerEvent,
    editor: &mut LineEditor,
    network: &mut TransitWorld,
) -> Option<Result<CommitOutcome, TopologyError>> {
    match event {
        PointerEvent::Moved(pos) => {
            editor.pointer_moved(network, pos);
            None
        }
        PointerEvent::PrimaryDown => {
            let handles = build_line_handles(network, &compute_edge_usage(network));
            let cursor = editor.cursor;
            editor.press(network, &handles, cursor);
            None
        }
        PointerEvent::PrimaryUp => Some(editor.release(network)),
        PointerEvent::SecondaryDown => {
            editor.secondary_press();
            None
        }
        PointerEvent::Cancel => {
            if editor.is_dragging() {
                info!("Gesture cancelled");
            }
            editor.cancel_gesture();
            None
        }
        PointerEvent::Left => None,
    }
}

/// Status-line text for a successful commit; `None` when nothing changed.
pub fn describe_commit(outcome: &CommitOutcome) -> Option<String> {
    match outcome {
        CommitOutcome::Nothing => None,
        CommitOutcome::Created { line, stations } => {
            Some(format!("Created line {line} through {stations} stations"))
        }
        CommitOutcome::Extended { line, added: 1 } => Some(format!("Extended line {line} by 1 station")),
        CommitOutcome::Extended { line, added } => {
            Some(format!("Extended line {line} by {added} stations"))
        }
        CommitOutcome::Inserted { line, station } => {
            Some(format!("Inserted station {station} into line {line}"))
        }
    }
}

fn report_commit(result: Result<CommitOutcome, TopologyError>, status: &mut StatusMessage) {
    match result {
        Ok(outcome) => {
            if let Some(text) = describe_commit(&outcome) {
                info!("{}", text);
                status.set(text, false);
            }
        }
        Err(err) => {
            warn!("Line edit rejected: {}", err);
            status.set(err.to_string(), true);
        }
    }
}

/// Drain this frame's window events (pointer and Escape) into the line
/// editor, in host order.
pub fn handle_pointer_input(
    mut window_events: EventReader<WindowEvent>,
    mut contexts: EguiContexts,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut cursor: ResMut<CursorWorldPos>,
    mut editor: ResMut<LineEditor>,
    mut network: ResMut<TransitWorld>,
    mut status: ResMut<StatusMessage>,
) {
    let Ok((camera, camera_transform)) = camera_q.get_single() else {
        return;
    };
    let ui_has_pointer = ui_captures_pointer(&mut contexts);

    for event in window_events.read() {
        let Some(event) = pointer_event(event, camera, camera_transform) else {
            continue;
        };
        match event {
            PointerEvent::Moved(pos) => {
                cursor.world_pos = pos;
                cursor.valid = true;
            }
            PointerEvent::Left => cursor.valid = false,
            _ => {}
        }
        if !forwards(event, ui_has_pointer) {
            continue;
        }
        if let Some(result) = apply_pointer_event(event, &mut editor, &mut network) {
            report_commit(result, &mut status);
        }
    }
}
