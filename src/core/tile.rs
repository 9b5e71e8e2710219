//! Kachelraster der Strecke.

/// Kantenlänge einer Kachel in Welteinheiten
pub const TILE_SIZE: f32 = 256.0;

/// Fahrhinweis für die Computer-Gegner auf einer Kachel.
///
/// Wird als Attribut `computerHint` (0/1/2) persistiert; 0 wird beim
/// Schreiben weggelassen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputerHint {
    /// Kein Hinweis
    #[default]
    None,
    /// Erste Bremszone vor einer Kurve
    FirstBeforeCorner,
    /// Zweite Bremszone vor einer Kurve
    SecondBeforeCorner,
}

impl ComputerHint {
    /// Wandelt den persistierten Zahlenwert in einen Hinweis um.
    /// Unbekannte Werte werden als `None` gelesen.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => ComputerHint::FirstBeforeCorner,
            2 => ComputerHint::SecondBeforeCorner,
            _ => ComputerHint::None,
        }
    }

    /// Persistierter Zahlenwert des Hinweises
    pub fn to_u8(self) -> u8 {
        match self {
            ComputerHint::None => 0,
            ComputerHint::FirstBeforeCorner => 1,
            ComputerHint::SecondBeforeCorner => 2,
        }
    }
}

/// Eine einzelne Kachel des Streckenrasters.
#[derive(Debug, Clone)]
pub struct TrackTile {
    /// Typ-ID der Kachel (z.B. "grass", "straight", "corner")
    pub tile_type: String,
    /// Rotation in Grad (0/90/180/270)
    pub rotation: i32,
    /// Fahrhinweis für die KI
    pub computer_hint: ComputerHint,
}

impl Default for TrackTile {
    fn default() -> Self {
        Self {
            tile_type: "clear".to_string(),
            rotation: 0,
            computer_hint: ComputerHint::None,
        }
    }
}

/// Zeilenweise gespeichertes cols×rows-Raster aus Kacheln.
#[derive(Debug, Clone)]
pub struct TileMap {
    cols: u32,
    rows: u32,
    tiles: Vec<TrackTile>,
}

impl TileMap {
    /// Erstellt ein Raster der angegebenen Größe, gefüllt mit leeren Kacheln
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            tiles: vec![TrackTile::default(); (cols * rows) as usize],
        }
    }

    /// Anzahl der Spalten
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Anzahl der Zeilen
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Kachel an Spalte `i`, Zeile `j`; `None` außerhalb des Rasters
    pub fn tile(&self, i: u32, j: u32) -> Option<&TrackTile> {
        let offset = self.offset(i, j)?;
        Some(&self.tiles[offset])
    }

    /// Veränderbare Kachel an Spalte `i`, Zeile `j`; `None` außerhalb des Rasters
    pub fn tile_mut(&mut self, i: u32, j: u32) -> Option<&mut TrackTile> {
        let offset = self.offset(i, j)?;
        Some(&mut self.tiles[offset])
    }

    fn offset(&self, i: u32, j: u32) -> Option<usize> {
        if i < self.cols && j < self.rows {
            Some((j * self.cols + i) as usize)
        } else {
            None
        }
    }
}
