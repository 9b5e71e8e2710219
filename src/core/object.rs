//! Frei platzierbare Streckenobjekte.

use glam::Vec2;

/// Ein frei auf der Strecke platziertes Objekt (Baum, Reifenstapel, …).
///
/// `category` gruppiert Objekte für den Editor, `role` identifiziert das
/// konkrete Modell beim Laden der Assets.
#[derive(Debug, Clone)]
pub struct TrackObject {
    /// Objekt-Kategorie (z.B. "free", "barrier")
    pub category: String,
    /// Modell-Rolle (z.B. "tree", "tire")
    pub role: String,
    /// Position in Weltkoordinaten
    pub location: Vec2,
    /// Rotation in Grad
    pub rotation: i32,
}

impl TrackObject {
    /// Erstellt ein neues Streckenobjekt
    pub fn new(
        category: impl Into<String>,
        role: impl Into<String>,
        location: Vec2,
        rotation: i32,
    ) -> Self {
        Self {
            category: category.into(),
            role: role.into(),
            location,
            rotation,
        }
    }
}
