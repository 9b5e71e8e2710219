//! Die zentrale Streckendatenstruktur mit Kachelraster, Objekten,
//! Checkpoints und Route.

use super::{Route, TargetNode, TileMap, TrackObject};
use glam::Vec2;
use std::collections::HashMap;
use std::path::PathBuf;

/// Ergebnis eines Klicks im Routen-Werkzeug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClick {
    /// Neuer Checkpoint wurde angehängt
    Appended(u64),
    /// Klick traf den ersten Checkpoint — die Route ist jetzt geschlossen
    Closed,
    /// Route ist bereits geschlossen, Klick verworfen
    Rejected,
}

/// Vollständige Daten einer Strecke.
///
/// Die Checkpoints werden hier besessen und nach ihrer ID indexiert; die
/// Route referenziert sie ausschließlich über IDs und darf die Strecke
/// nicht überleben.
#[derive(Debug, Clone)]
pub struct TrackData {
    /// Anzeigename der Strecke
    pub name: String,
    /// Pfad der zuletzt geladenen Datei
    pub file_name: Option<PathBuf>,
    /// Anzahl der zu fahrenden Runden
    pub lap_count: u32,
    /// Kachelraster
    pub map: TileMap,
    /// Frei platzierte Objekte
    pub objects: Vec<TrackObject>,
    /// Alle Checkpoints, indexiert nach ihrer ID
    pub nodes: HashMap<u64, TargetNode>,
    /// Ideallinie über die Checkpoints
    pub route: Route,
}

impl TrackData {
    /// Erstellt eine neue leere Strecke
    pub fn new(name: impl Into<String>, cols: u32, rows: u32) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            lap_count: 0,
            map: TileMap::new(cols, rows),
            objects: Vec::new(),
            nodes: HashMap::new(),
            route: Route::new(),
        }
    }

    /// Berechnet die nächste freie Checkpoint-ID
    pub fn next_node_id(&self) -> u64 {
        self.nodes.keys().max().copied().unwrap_or(0) + 1
    }

    /// Anzahl der Checkpoints
    pub fn target_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der frei platzierten Objekte
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Klick-Logik des Routen-Werkzeugs.
    ///
    /// Trifft der Klick den ersten Checkpoint der Route (Abstand höchstens
    /// `close_radius`), wird dessen ID erneut gepusht und die Route damit
    /// geschlossen. Andernfalls entsteht ein neuer Checkpoint mit dem
    /// nächsten freien Index. Klicks auf eine bereits geschlossene Route
    /// werden verworfen.
    pub fn add_route_point(&mut self, location: Vec2, close_radius: f32) -> RouteClick {
        if self.route.is_closed() {
            log::warn!("Route ist bereits geschlossen, Klick verworfen");
            return RouteClick::Rejected;
        }

        let first_id = self.route.node_ids().first().copied();
        if let Some(first_id) = first_id {
            let first_location = self.nodes[&first_id].location;
            if first_location.distance(location) <= close_radius {
                self.route.push(first_id);
                log::info!(
                    "Route geschlossen ({} Checkpoints, Länge {})",
                    self.route.distinct_count(),
                    self.route_length()
                );
                return RouteClick::Closed;
            }
        }

        let id = self.next_node_id();
        let index = self.route.node_count() as i32;
        self.nodes.insert(id, TargetNode::new(id, index, location));
        self.route.push(id);
        log::info!(
            "Checkpoint {} an Position ({:.1}, {:.1}) angehängt",
            id,
            location.x,
            location.y
        );
        RouteClick::Appended(id)
    }

    /// Leert die Route und entfernt die von ihr referenzierten Checkpoints
    pub fn clear_route(&mut self) {
        for id in self.route.node_ids() {
            self.nodes.remove(id);
        }
        self.route.clear();
        log::info!("Route geleert");
    }

    /// Geometrische Länge der Route in Welteinheiten
    pub fn route_length(&self) -> u32 {
        self.route.geometric_length(&self.nodes)
    }
}
