//! Plausibilitätsprüfung einer Strecke vor dem Speichern oder Rennen.

use super::{TrackData, TILE_SIZE};
use crate::shared::EditorOptions;
use std::fmt;

/// Ein einzelner Befund der Streckenprüfung.
///
/// Befunde sind Hinweise an den Autor, keine Fehler — eine Strecke mit
/// Befunden bleibt lad- und speicherbar.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackWarning {
    /// Die Route ist nicht geschlossen
    RouteNotClosed,
    /// Weniger als drei unterschiedliche Checkpoints
    TooFewCheckpoints {
        /// Anzahl der vorhandenen Checkpoints
        count: usize,
    },
    /// Rundenzahl ist 0
    NoLaps,
    /// Zwei aufeinanderfolgende Checkpoints überlappen sich
    OverlappingCheckpoints {
        /// ID des ersten Checkpoints des Paares
        first_id: u64,
        /// ID des zweiten Checkpoints des Paares
        second_id: u64,
    },
    /// Checkpoint liegt außerhalb der Streckenfläche
    CheckpointOutsideMap {
        /// ID des betroffenen Checkpoints
        id: u64,
    },
}

impl fmt::Display for TrackWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackWarning::RouteNotClosed => write!(f, "Route ist nicht geschlossen"),
            TrackWarning::TooFewCheckpoints { count } => {
                write!(f, "Nur {} Checkpoints, mindestens 3 erwartet", count)
            }
            TrackWarning::NoLaps => write!(f, "Rundenzahl ist 0"),
            TrackWarning::OverlappingCheckpoints { first_id, second_id } => {
                write!(f, "Checkpoints {} und {} überlappen sich", first_id, second_id)
            }
            TrackWarning::CheckpointOutsideMap { id } => {
                write!(f, "Checkpoint {} liegt außerhalb der Streckenfläche", id)
            }
        }
    }
}

/// Prüft eine Strecke auf typische Autorenfehler.
///
/// Geprüft werden: Schließung der Route, Mindestanzahl an Checkpoints,
/// Rundenzahl, Überlappung aufeinanderfolgender Checkpoints (Abstand unter
/// dem Toleranzradius aus den Optionen) und Checkpoints außerhalb der
/// Kachelfläche.
pub fn validate_track(track: &TrackData, options: &EditorOptions) -> Vec<TrackWarning> {
    let mut warnings = Vec::new();

    if !track.route.is_closed() {
        warnings.push(TrackWarning::RouteNotClosed);
    }

    let distinct = track.route.distinct_count();
    if distinct < 3 {
        warnings.push(TrackWarning::TooFewCheckpoints { count: distinct });
    }

    if track.lap_count == 0 {
        warnings.push(TrackWarning::NoLaps);
    }

    for pair in track.route.node_ids().windows(2) {
        // Die Wrap-Kante einer geschlossenen Route verbindet denselben Checkpoint
        if pair[0] == pair[1] {
            continue;
        }
        let first = &track.nodes[&pair[0]];
        let second = &track.nodes[&pair[1]];
        if first.location.distance(second.location) < options.target_node_radius {
            warnings.push(TrackWarning::OverlappingCheckpoints {
                first_id: pair[0],
                second_id: pair[1],
            });
        }
    }

    let width = track.map.cols() as f32 * TILE_SIZE;
    let height = track.map.rows() as f32 * TILE_SIZE;
    for position in 0..distinct {
        let id = track.route.node_id_at(position);
        let node = &track.nodes[&id];
        let outside = node.location.x < 0.0
            || node.location.y < 0.0
            || node.location.x > width
            || node.location.y > height;
        if outside {
            warnings.push(TrackWarning::CheckpointOutsideMap { id });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn closed_track() -> TrackData {
        let mut track = TrackData::new("Test", 4, 4);
        track.lap_count = 5;
        track.add_route_point(Vec2::new(100.0, 100.0), 32.0);
        track.add_route_point(Vec2::new(900.0, 100.0), 32.0);
        track.add_route_point(Vec2::new(900.0, 900.0), 32.0);
        track.add_route_point(Vec2::new(100.0, 100.0), 32.0);
        track
    }

    #[test]
    fn test_wellformed_track_has_no_warnings() {
        let track = closed_track();
        let warnings = validate_track(&track, &EditorOptions::default());
        assert!(warnings.is_empty(), "Keine Befunde erwartet: {warnings:?}");
    }

    #[test]
    fn test_open_route_and_missing_laps_are_flagged() {
        let mut track = TrackData::new("Test", 4, 4);
        track.add_route_point(Vec2::new(100.0, 100.0), 32.0);
        track.add_route_point(Vec2::new(900.0, 100.0), 32.0);

        let warnings = validate_track(&track, &EditorOptions::default());
        assert!(warnings.contains(&TrackWarning::RouteNotClosed));
        assert!(warnings.contains(&TrackWarning::TooFewCheckpoints { count: 2 }));
        assert!(warnings.contains(&TrackWarning::NoLaps));
    }

    #[test]
    fn test_overlapping_checkpoints_are_flagged_per_pair() {
        let mut track = TrackData::new("Test", 4, 4);
        track.lap_count = 3;
        // Die ersten beiden Checkpoints liegen fast aufeinander
        track.add_route_point(Vec2::new(100.0, 100.0), 16.0);
        track.add_route_point(Vec2::new(110.0, 100.0), 16.0);
        track.add_route_point(Vec2::new(900.0, 900.0), 16.0);

        let warnings = validate_track(&track, &EditorOptions::default());
        let overlaps: Vec<_> = warnings
            .iter()
            .filter(|w| matches!(w, TrackWarning::OverlappingCheckpoints { .. }))
            .collect();
        assert_eq!(overlaps.len(), 1);
    }

    #[test]
    fn test_wrap_edge_is_not_reported_as_overlap() {
        let track = closed_track();
        let warnings = validate_track(&track, &EditorOptions::default());
        assert!(!warnings
            .iter()
            .any(|w| matches!(w, TrackWarning::OverlappingCheckpoints { .. })));
    }

    #[test]
    fn test_checkpoint_outside_map_is_flagged() {
        let mut track = closed_track();
        // 4×4 Kacheln à 256 Einheiten → Fläche bis 1024
        let id = track.route.node_id_at(0);
        track.nodes.get_mut(&id).unwrap().location = Vec2::new(2000.0, 100.0);

        let warnings = validate_track(&track, &EditorOptions::default());
        assert!(warnings.contains(&TrackWarning::CheckpointOutsideMap { id }));
    }
}
