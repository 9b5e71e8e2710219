//! Zentrale Konfiguration für den Rally2D-Strecken-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::DEFAULT_TARGET_RADIUS;
use serde::{Deserialize, Serialize};

// ── Routen-Werkzeug ─────────────────────────────────────────────────

/// Klick-Radius (Welteinheiten): Klick innerhalb dieses Radius um den ersten
/// Checkpoint schließt die Route.
pub const CLOSE_CLICK_RADIUS: f32 = 32.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `rally2d_track_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Toleranzradius neuer Checkpoints in Welteinheiten
    pub target_node_radius: f32,
    /// Klick-Radius zum Schließen der Route in Welteinheiten
    pub close_click_radius: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            target_node_radius: DEFAULT_TARGET_RADIUS,
            close_click_radius: CLOSE_CLICK_RADIUS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("rally2d_track_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("rally2d_track_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = EditorOptions::default();
        assert_eq!(options.target_node_radius, DEFAULT_TARGET_RADIUS);
        assert_eq!(options.close_click_radius, CLOSE_CLICK_RADIUS);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut options = EditorOptions::default();
        options.target_node_radius = 48.5;
        options.close_click_radius = 24.25;

        let content = toml::to_string_pretty(&options).expect("Serialisierung fehlgeschlagen");
        let reloaded: EditorOptions =
            toml::from_str(&content).expect("Deserialisierung fehlgeschlagen");
        approx::assert_relative_eq!(reloaded.target_node_radius, 48.5);
        approx::assert_relative_eq!(reloaded.close_click_radius, 24.25);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("rally2d_options_malformed_test.toml");
        std::fs::write(&path, "target_node_radius = \"keine Zahl\"")
            .expect("Schreiben fehlgeschlagen");

        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options.target_node_radius, DEFAULT_TARGET_RADIUS);

        let _ = std::fs::remove_file(&path);
    }
}
