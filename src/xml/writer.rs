//! Writer für Strecken-XML-Dateien.

use crate::core::{ComputerHint, TrackData};
use anyhow::Result;

use super::TRACK_FORMAT_VERSION;

/// Schreibt eine Strecke als XML-String.
///
/// Checkpoints werden in Fahrtrichtung mit ihrem eigenen `index`-Wert
/// geschrieben, damit die Indizes verlustfrei durch Speichern und Laden
/// wandern. Bei geschlossener Route wird der Wrap-Eintrag am Ende nicht
/// geschrieben — er ist derselbe Checkpoint wie der erste, ein zweiter
/// Datensatz würde beim Laden als doppelter Index abgelehnt.
pub fn write_track(track: &TrackData) -> Result<String> {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str(&format!(
        "<track version=\"{}\" name=\"{}\" cols=\"{}\" rows=\"{}\" lapCount=\"{}\">\n",
        TRACK_FORMAT_VERSION,
        escape_xml(&track.name),
        track.map.cols(),
        track.map.rows(),
        track.lap_count
    ));

    write_tiles(track, &mut output);
    write_objects(track, &mut output);
    write_target_nodes(track, &mut output)?;

    output.push_str("</track>\n");

    Ok(output)
}

fn write_tiles(track: &TrackData, output: &mut String) {
    for i in 0..track.map.cols() {
        for j in 0..track.map.rows() {
            if let Some(tile) = track.map.tile(i, j) {
                output.push_str(&format!(
                    "    <tile type=\"{}\" i=\"{}\" j=\"{}\" o=\"{}\"",
                    escape_xml(&tile.tile_type),
                    i,
                    j,
                    tile.rotation
                ));
                if tile.computer_hint != ComputerHint::None {
                    output.push_str(&format!(
                        " computerHint=\"{}\"",
                        tile.computer_hint.to_u8()
                    ));
                }
                output.push_str("/>\n");
            }
        }
    }
}

fn write_objects(track: &TrackData, output: &mut String) {
    for object in &track.objects {
        output.push_str(&format!(
            "    <object category=\"{}\" role=\"{}\" x=\"{}\" y=\"{}\" o=\"{}\"/>\n",
            escape_xml(&object.category),
            escape_xml(&object.role),
            object.location.x as i32,
            object.location.y as i32,
            object.rotation
        ));
    }
}

fn write_target_nodes(track: &TrackData, output: &mut String) -> Result<()> {
    for position in 0..track.route.distinct_count() {
        let id = track.route.node_id_at(position);
        let node = track.nodes.get(&id).ok_or_else(|| {
            anyhow::anyhow!("Inkonsistente Strecke: Checkpoint {} fehlt beim XML-Export", id)
        })?;

        output.push_str(&format!(
            "    <tnode i=\"{}\" x=\"{}\" y=\"{}\"/>\n",
            node.index,
            node.location.x as i32,
            node.location.y as i32
        ));
    }

    Ok(())
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_escape_xml_special_characters() {
        assert_eq!(escape_xml("Kies & Sand"), "Kies &amp; Sand");
        assert_eq!(escape_xml("<track>"), "&lt;track&gt;");
        assert_eq!(escape_xml("\"o'\""), "&quot;o&apos;&quot;");
    }

    #[test]
    fn test_computer_hint_zero_is_omitted() {
        let track = TrackData::new("Test", 1, 1);
        let xml = write_track(&track).expect("Export fehlgeschlagen");
        assert!(xml.contains("<tile type=\"clear\" i=\"0\" j=\"0\" o=\"0\"/>"));
        assert!(!xml.contains("computerHint"));
    }

    #[test]
    fn test_closed_route_writes_each_checkpoint_once() {
        let mut track = TrackData::new("Test", 4, 4);
        track.add_route_point(Vec2::new(100.0, 100.0), 32.0);
        track.add_route_point(Vec2::new(500.0, 100.0), 32.0);
        track.add_route_point(Vec2::new(500.0, 500.0), 32.0);
        track.add_route_point(Vec2::new(100.0, 100.0), 32.0);
        assert!(track.route.is_closed());

        let xml = write_track(&track).expect("Export fehlgeschlagen");
        assert_eq!(xml.matches("<tnode ").count(), 3);
        assert_eq!(xml.matches("x=\"100\" y=\"100\"").count(), 1);
    }

    #[test]
    fn test_export_fails_for_dangling_route_id() {
        let mut track = TrackData::new("Test", 1, 1);
        track.route.push(99);

        let err = write_track(&track).expect_err("Export sollte fehlschlagen");
        assert!(format!("{err:#}").contains("Checkpoint 99 fehlt"));
    }
}
