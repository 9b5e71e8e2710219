//! Rally2D Track Inspector.
//!
//! Kommandozeilen-Werkzeug: lädt eine Streckendatei, protokolliert
//! Statistiken und Prüfbefunde und kann die Strecke für Roundtrip-Kontrollen
//! neu speichern.

use anyhow::{bail, Result};
use rally2d_track_editor::{load_track_file, save_track_file, validate_track, EditorOptions};
use std::path::Path;

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Rally2D Track Inspector v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("Aufruf: Rally2D-Track-Inspector <strecke.trk> [ausgabe.trk]");
    };
    let output = args.next();

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());

    let track = load_track_file(Path::new(&input))?;
    log::info!(
        "Strecke '{}': {}x{} Kacheln, {} Runden",
        track.name,
        track.map.cols(),
        track.map.rows(),
        track.lap_count
    );
    log::info!(
        "{} Objekte, {} Checkpoints, Route {} ({} Welteinheiten)",
        track.object_count(),
        track.target_node_count(),
        if track.route.is_closed() { "geschlossen" } else { "offen" },
        track.route_length()
    );

    let warnings = validate_track(&track, &options);
    if warnings.is_empty() {
        log::info!("Keine Prüfbefunde");
    }
    for warning in &warnings {
        log::warn!("Prüfbefund: {}", warning);
    }

    if let Some(output) = output {
        save_track_file(&track, Path::new(&output))?;
    }

    Ok(())
}
