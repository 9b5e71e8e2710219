//! XML Import/Export für Strecken-Dateien.
//!
//! Das Format speichert eine Strecke als `<track>`-Wurzelelement mit
//! `<tile>`-, `<object>`- und `<tnode>`-Kindelementen. Checkpoints tragen
//! ihre Sequenzposition als Attribut `i`; die Elementreihenfolge in der
//! Datei ist beliebig, die Route wird beim Laden über die Indizes neu
//! aufgebaut.

pub mod parser;
pub mod writer;

pub use parser::parse_track;
pub use writer::write_track;

use crate::core::TrackData;
use anyhow::{Context, Result};
use std::path::Path;

/// In das `version`-Attribut geschriebene Formatversion.
pub const TRACK_FORMAT_VERSION: &str = "0.4";

/// Lädt eine Strecke aus einer XML-Datei.
pub fn load_track_file(path: &Path) -> Result<TrackData> {
    let xml_content = std::fs::read_to_string(path).with_context(|| {
        format!("Streckendatei '{}' konnte nicht gelesen werden", path.display())
    })?;
    let mut track = parse_track(&xml_content)
        .with_context(|| format!("Streckendatei '{}' ist fehlerhaft", path.display()))?;
    track.file_name = Some(path.to_path_buf());

    log::info!(
        "Strecke '{}' geladen: {} Checkpoints, {} Objekte",
        track.name,
        track.target_node_count(),
        track.object_count()
    );
    Ok(track)
}

/// Speichert eine Strecke als XML-Datei.
pub fn save_track_file(track: &TrackData, path: &Path) -> Result<()> {
    let xml_content = write_track(track)?;
    std::fs::write(path, xml_content).with_context(|| {
        format!("Streckendatei '{}' konnte nicht geschrieben werden", path.display())
    })?;
    log::info!("Strecke '{}' gespeichert nach: {}", track.name, path.display());
    Ok(())
}
