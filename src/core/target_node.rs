//! Repräsentiert einen Checkpoint ("Target Node") der Ideallinie.

use glam::Vec2;

/// Standard-Toleranzradius eines Checkpoints in Welteinheiten (Viertel-Kachel).
pub const DEFAULT_TARGET_RADIUS: f32 = 64.0;

/// Ein Checkpoint der Rennstrecke.
///
/// Die `id` ist die stabile Identität innerhalb einer Strecke; die Route
/// speichert ausschließlich IDs. `index` ist die vom Autor vergebene
/// Sequenzposition und wird als Attribut `i` persistiert.
#[derive(Debug, Clone)]
pub struct TargetNode {
    /// Stabile Node-ID innerhalb der Strecke
    pub id: u64,
    /// Vom Autor vergebene Sequenzposition (Attribut `i`)
    pub index: i32,
    /// Position in Weltkoordinaten
    pub location: Vec2,
    /// Toleranzradius für Runden- und Wegpunkt-Erkennung
    pub radius: f32,
}

impl TargetNode {
    /// Erstellt einen neuen Checkpoint mit Standardradius
    pub fn new(id: u64, index: i32, location: Vec2) -> Self {
        Self {
            id,
            index,
            location,
            radius: DEFAULT_TARGET_RADIUS,
        }
    }

    /// Erstellt einen Checkpoint mit explizitem Toleranzradius
    pub fn with_radius(id: u64, index: i32, location: Vec2, radius: f32) -> Self {
        Self {
            id,
            index,
            location,
            radius,
        }
    }
}
