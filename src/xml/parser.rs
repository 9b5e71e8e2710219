//! Parser für Strecken-XML-Dateien.

use crate::core::{ComputerHint, TargetNode, TrackData, TrackObject};
use anyhow::{bail, Context, Result};
use glam::Vec2;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parsed eine Strecke aus einem XML-String.
///
/// `<tnode>`-Datensätze werden in Dokumentreihenfolge eingesammelt und erst
/// nach dem Lesen über ihre Indizes zur Route sortiert; die Reihenfolge der
/// Elemente in der Datei ist damit bedeutungslos. Unbekannte Elemente werden
/// übersprungen.
pub fn parse_track(xml_content: &str) -> Result<TrackData> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();

    let mut track: Option<TrackData> = None;
    let mut tnode_records: Vec<TargetNode> = Vec::new();
    let mut next_node_id = 1u64;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?.into_owned();
                match tag.as_str() {
                    "track" => track = Some(read_track_element(&reader, e)?),
                    "tile" => {
                        let track = track
                            .as_mut()
                            .context("<tile> außerhalb von <track> gefunden")?;
                        read_tile(track, &reader, e)?;
                    }
                    "object" => {
                        let track = track
                            .as_mut()
                            .context("<object> außerhalb von <track> gefunden")?;
                        track.objects.push(read_object(&reader, e)?);
                    }
                    "tnode" => {
                        tnode_records.push(read_target_node(next_node_id, &reader, e)?);
                        next_node_id += 1;
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen der Strecken-XML"),
            _ => {}
        }

        buffer.clear();
    }

    let mut track = track.context("Kein <track>-Wurzelelement gefunden")?;

    track
        .route
        .build_from_nodes(tnode_records.iter())
        .context("Ungültige Checkpoint-Daten in der Strecke")?;
    for node in tnode_records {
        track.nodes.insert(node.id, node);
    }

    Ok(track)
}

fn read_track_element<B>(reader: &Reader<B>, element: &BytesStart) -> Result<TrackData> {
    let name = attr_value(reader, element, "name")?.unwrap_or_else(|| "undefined".to_string());
    let cols: u32 = parse_attr(reader, element, "cols", 0)?;
    let rows: u32 = parse_attr(reader, element, "rows", 0)?;
    let lap_count: u32 = parse_attr(reader, element, "lapCount", 0)?;

    if cols == 0 || rows == 0 {
        bail!("Strecke '{}' hat ein leeres Kachelraster ({}x{})", name, cols, rows);
    }

    let mut track = TrackData::new(name, cols, rows);
    track.lap_count = lap_count;
    Ok(track)
}

fn read_tile<B>(track: &mut TrackData, reader: &Reader<B>, element: &BytesStart) -> Result<()> {
    let tile_type = attr_value(reader, element, "type")?.unwrap_or_else(|| "clear".to_string());
    let i: u32 = parse_attr(reader, element, "i", 0)?;
    let j: u32 = parse_attr(reader, element, "j", 0)?;
    let rotation: i32 = parse_attr(reader, element, "o", 0)?;
    let hint: u8 = parse_attr(reader, element, "computerHint", 0)?;

    let Some(tile) = track.map.tile_mut(i, j) else {
        log::warn!("Kachel ({}, {}) liegt außerhalb des Rasters, übersprungen", i, j);
        return Ok(());
    };

    tile.tile_type = tile_type;
    tile.rotation = rotation;
    tile.computer_hint = ComputerHint::from_u8(hint);
    Ok(())
}

fn read_object<B>(reader: &Reader<B>, element: &BytesStart) -> Result<TrackObject> {
    let category = attr_value(reader, element, "category")?.unwrap_or_else(|| "clear".to_string());
    let role = attr_value(reader, element, "role")?.unwrap_or_else(|| "clear".to_string());
    let x: i32 = parse_attr(reader, element, "x", 0)?;
    let y: i32 = parse_attr(reader, element, "y", 0)?;
    let rotation: i32 = parse_attr(reader, element, "o", 0)?;

    Ok(TrackObject::new(
        category,
        role,
        Vec2::new(x as f32, y as f32),
        rotation,
    ))
}

fn read_target_node<B>(id: u64, reader: &Reader<B>, element: &BytesStart) -> Result<TargetNode> {
    let index: i32 = parse_attr(reader, element, "i", 0)?;
    let x: i32 = parse_attr(reader, element, "x", 0)?;
    let y: i32 = parse_attr(reader, element, "y", 0)?;

    Ok(TargetNode::new(id, index, Vec2::new(x as f32, y as f32)))
}

/// Liest den Wert eines Attributs, `None` wenn es fehlt.
fn attr_value<B>(reader: &Reader<B>, element: &BytesStart, key: &str) -> Result<Option<String>> {
    for attr in element.attributes().with_checks(false) {
        let attr = attr?;
        let name = reader.decoder().decode(attr.key.as_ref())?;
        if name == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Liest ein Attribut als Zahl; fehlende Attribute liefern den Default.
fn parse_attr<B, T>(reader: &Reader<B>, element: &BytesStart, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match attr_value(reader, element, key)? {
        Some(text) => text.trim().parse::<T>().with_context(|| {
            format!("Attribut '{}': Wert '{}' konnte nicht geparst werden", key, text)
        }),
        None => Ok(default),
    }
}
