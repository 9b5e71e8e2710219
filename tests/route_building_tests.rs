use glam::Vec2;
use rally2d_track_editor::{
    EditorOptions, ProgressEvent, RouteClick, RouteProgress, TrackData,
};

#[test]
fn test_editor_click_flow_builds_and_closes_route() {
    let options = EditorOptions::default();
    let mut track = TrackData::new("Clicktest", 8, 8);

    let clicks = [
        Vec2::new(200.0, 200.0),
        Vec2::new(1600.0, 200.0),
        Vec2::new(1600.0, 1600.0),
        Vec2::new(200.0, 1600.0),
    ];
    for click in clicks {
        let result = track.add_route_point(click, options.close_click_radius);
        assert!(matches!(result, RouteClick::Appended(_)));
    }

    // Klick knapp neben dem Startpunkt schließt die Route
    let result = track.add_route_point(Vec2::new(210.0, 195.0), options.close_click_radius);
    assert_eq!(result, RouteClick::Closed);
    assert!(track.route.is_closed());
    assert_eq!(track.route.distinct_count(), 4);

    // Danach nimmt das Werkzeug keine Klicks mehr an
    let result = track.add_route_point(Vec2::new(900.0, 900.0), options.close_click_radius);
    assert_eq!(result, RouteClick::Rejected);
    assert_eq!(track.target_node_count(), 4);

    // Quadrat mit Kantenlänge 1400
    assert_eq!(track.route_length(), 5600);
}

#[test]
fn test_progress_tracks_laps_on_editor_built_track() {
    let options = EditorOptions::default();
    let mut track = TrackData::new("Rundkurs", 8, 8);
    track.add_route_point(Vec2::new(200.0, 200.0), options.close_click_radius);
    track.add_route_point(Vec2::new(1600.0, 200.0), options.close_click_radius);
    track.add_route_point(Vec2::new(1600.0, 1600.0), options.close_click_radius);
    track.add_route_point(Vec2::new(200.0, 200.0), options.close_click_radius);
    assert!(track.route.is_closed());

    let mut progress = RouteProgress::new();
    let mut events = Vec::new();
    let waypoints = [
        Vec2::new(210.0, 210.0),
        Vec2::new(1590.0, 210.0),
        Vec2::new(1600.0, 1590.0),
        Vec2::new(200.0, 210.0),
        Vec2::new(1600.0, 190.0),
        Vec2::new(1610.0, 1600.0),
    ];
    for waypoint in waypoints {
        events.push(progress.update(waypoint, &track.route, &track.nodes));
    }

    assert_eq!(
        events,
        vec![
            ProgressEvent::TargetReached,
            ProgressEvent::TargetReached,
            ProgressEvent::LapCompleted,
            ProgressEvent::TargetReached,
            ProgressEvent::TargetReached,
            ProgressEvent::LapCompleted,
        ]
    );
    assert_eq!(progress.laps(), 2);
}

#[test]
fn test_open_route_progress_finishes() {
    let mut track = TrackData::new("Sprint", 8, 8);
    track.add_route_point(Vec2::new(200.0, 200.0), 32.0);
    track.add_route_point(Vec2::new(1600.0, 200.0), 32.0);
    assert!(!track.route.is_closed());

    let mut progress = RouteProgress::new();
    assert_eq!(
        progress.update(Vec2::new(200.0, 200.0), &track.route, &track.nodes),
        ProgressEvent::TargetReached
    );
    assert_eq!(
        progress.update(Vec2::new(1600.0, 200.0), &track.route, &track.nodes),
        ProgressEvent::Finished
    );
    assert!(progress.is_finished());
}
