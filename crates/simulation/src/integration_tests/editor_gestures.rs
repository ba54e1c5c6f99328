//! Full gestures replayed through the `LineEditor` resource of a running app.

use crate::line_editor::{CommitOutcome, DragMode};
use crate::line_handles::Handle;
use crate::test_harness::TestNetwork;
use crate::topology::TopologyError;
use crate::transit::{LineId, StationId};

/// Five stations: a row A-B-C along y=100 and D, E below.
fn five_stations() -> TestNetwork {
    TestNetwork::new()
        .with_station("A", 100.0, 100.0)
        .with_station("B", 200.0, 100.0)
        .with_station("C", 300.0, 100.0)
        .with_station("D", 100.0, 300.0)
        .with_station("E", 300.0, 300.0)
}

#[test]
fn test_drag_across_stations_creates_line() {
    let mut net = five_stations();
    let outcome = net
        .drag(&[(100.0, 100.0), (150.0, 100.0), (200.0, 100.0), (300.0, 300.0)])
        .unwrap();

    assert_eq!(
        outcome,
        CommitOutcome::Created {
            line: LineId::from("L1"),
            stations: 3,
        }
    );
    assert_eq!(net.line_stations("L1"), vec!["A", "B", "E"]);
    for id in ["A", "B", "E"] {
        assert!(net.network().stations[&StationId::from(id)].connected);
    }
    assert!(!net.network().stations[&StationId::from("C")].connected);
    net.assert_idle();
}

#[test]
fn test_build_network_with_three_gestures() {
    let mut net = five_stations();

    // A -> B
    net.drag(&[(100.0, 100.0), (200.0, 100.0)]).unwrap();
    // Pull the B end out to C.
    net.drag(&[(230.0, 100.0), (300.0, 100.0)]).unwrap();
    assert_eq!(net.line_stations("L1"), vec!["A", "B", "C"]);

    // Drag the A-B midpoint onto D.
    let outcome = net.drag(&[(150.0, 100.0), (100.0, 300.0)]).unwrap();
    assert_eq!(
        outcome,
        CommitOutcome::Inserted {
            line: LineId::from("L1"),
            station: StationId::from("D"),
        }
    );
    assert_eq!(net.line_stations("L1"), vec!["A", "D", "B", "C"]);

    // A's neighbour is now D (straight below), so its start flag points up.
    net.drag(&[(100.0, 70.0), (300.0, 300.0)]).unwrap();
    assert_eq!(net.line_stations("L1"), vec!["E", "A", "D", "B", "C"]);
    assert_eq!(net.network().lines.len(), 1);
}

#[test]
fn test_start_extension_commits_preview_order() {
    let mut net = five_stations().with_line(&["B", "C"]);

    // Start flag of B points away from C, at (170, 100).
    net.press(170.0, 100.0);
    net.move_to(100.0, 100.0);
    net.move_to(100.0, 300.0);
    let preview = net.editor().preview(net.network()).unwrap();
    let points: Vec<(f32, f32)> = preview.points.iter().map(|p| (p.x, p.y)).collect();
    // Pointer, then D, A and the anchor B.
    assert_eq!(
        points,
        vec![(100.0, 300.0), (100.0, 300.0), (100.0, 100.0), (200.0, 100.0)]
    );

    net.release().unwrap();
    assert_eq!(net.line_stations("L1"), vec!["D", "A", "B", "C"]);
}

#[test]
fn test_handle_wins_over_station_at_same_point() {
    let mut net = five_stations().with_line(&["A", "C"]);
    let handles = net.handles();
    assert!(matches!(
        crate::hit_test::handle_at(&handles, bevy::math::Vec2::new(200.0, 100.0)),
        Some(Handle::Segment(_))
    ));

    net.press(200.0, 100.0);
    assert!(matches!(
        net.editor().mode,
        DragMode::InsertingStation { segment: 0, .. }
    ));
}

#[test]
fn test_second_press_replaces_previous_gesture() {
    let mut net = five_stations().with_line(&["A", "C"]);

    net.press(100.0, 300.0);
    net.move_to(300.0, 300.0);
    net.press(330.0, 100.0);
    match &net.editor().mode {
        DragMode::ExtendingLine { anchor, added, .. } => {
            assert_eq!(anchor, &StationId::from("C"));
            assert!(added.is_empty());
        }
        other => panic!("expected extension, got {other:?}"),
    }

    net.press(200.0, 100.0);
    match &net.editor().mode {
        DragMode::InsertingStation { target, .. } => assert!(target.is_none()),
        other => panic!("expected insertion, got {other:?}"),
    }

    // Releasing commits nothing: no target was hovered.
    assert_eq!(net.release(), Ok(CommitOutcome::Nothing));
    assert_eq!(net.line_stations("L1"), vec!["A", "C"]);
}

#[test]
fn test_rejected_release_surfaces_error_and_resets() {
    let mut net = five_stations().with_line(&["A", "B"]);
    net.press(230.0, 100.0);
    net.move_to(300.0, 100.0);

    // C joins the line behind the editor's back before the release.
    net.network_mut().lines[0].stations.push(StationId::from("C"));
    let before = net.network().clone();

    let err = net.release().unwrap_err();
    assert_eq!(
        err,
        TopologyError::StationAlreadyOnLine {
            line: LineId::from("L1"),
            station: StationId::from("C"),
        }
    );
    assert_eq!(net.network(), &before);
    net.assert_idle();
}

#[test]
fn test_cancel_discards_gesture() {
    let mut net = five_stations();
    net.press(100.0, 100.0);
    net.move_to(200.0, 100.0);
    net.cancel();
    net.assert_idle();
    assert_eq!(net.release(), Ok(CommitOutcome::Nothing));
    assert!(net.network().lines.is_empty());
    assert_eq!(net.editor().selected_station, Some(StationId::from("A")));

    net.secondary_press();
    assert_eq!(net.editor().selected_station, None);
}

#[test]
fn test_palette_advances_per_created_line() {
    let mut net = five_stations();
    net.drag(&[(100.0, 100.0), (200.0, 100.0)]).unwrap();
    net.drag(&[(100.0, 300.0)]).unwrap();
    net.drag(&[(300.0, 100.0), (300.0, 300.0)]).unwrap();

    let colors: Vec<_> = net.network().lines.values().map(|l| l.color).collect();
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0], crate::config::LINE_COLORS[0]);
    assert_eq!(colors[1], crate::config::LINE_COLORS[1]);
    assert_eq!(net.editor().palette_index, 2);
}
