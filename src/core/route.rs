//! Die Route: geordnete, ggf. geschlossene Folge von Checkpoints der Ideallinie.

use super::TargetNode;
use anyhow::{bail, Result};
use std::collections::HashMap;

/// Geordnete Folge von Checkpoint-IDs in Fahrtrichtung.
///
/// Die Route besitzt die Checkpoints nicht; sie referenziert Einträge im
/// Node-Speicher der Strecke über deren IDs. Eine geschlossene Route enthält
/// die ID des ersten Checkpoints am Ende ein zweites Mal, die Rückkante zum
/// Start ist damit Teil der gespeicherten Folge.
#[derive(Debug, Clone, Default)]
pub struct Route {
    node_ids: Vec<u64>,
}

impl Route {
    /// Erstellt eine leere Route
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert die Route
    pub fn clear(&mut self) {
        self.node_ids.clear();
    }

    /// Hängt einen Checkpoint ans Ende der Route an.
    ///
    /// Gibt `true` zurück wenn die Route durch diesen Push geschlossen wurde,
    /// d.h. wenn `node_id` die ID des allerersten Checkpoints ist und die
    /// Route vorher mindestens einen Eintrag hatte. Nach einem `true`-Ergebnis
    /// darf der Aufrufer nicht weiter pushen; die Route prüft das nicht erneut.
    pub fn push(&mut self, node_id: u64) -> bool {
        self.node_ids.push(node_id);
        self.is_closed()
    }

    /// Baut die Route aus einem ungeordneten Satz von Checkpoints neu auf.
    ///
    /// Die Eingabereihenfolge ist irrelevant; maßgeblich ist ausschließlich
    /// der `index` jedes Checkpoints (aufsteigend sortiert). Doppelte Indizes
    /// sind fehlerhafte Eingabedaten und werden abgelehnt, die Route bleibt
    /// dann unverändert.
    pub fn build_from_nodes<'a, I>(&mut self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a TargetNode>,
    {
        let mut ordered: Vec<(i32, u64)> =
            nodes.into_iter().map(|node| (node.index, node.id)).collect();
        ordered.sort_unstable_by_key(|&(index, _)| index);

        for pair in ordered.windows(2) {
            if pair[0].0 == pair[1].0 {
                bail!("Doppelter Checkpoint-Index {} in den Eingabedaten", pair[0].0);
            }
        }

        self.node_ids = ordered.into_iter().map(|(_, id)| id).collect();
        Ok(())
    }

    /// Anzahl der Einträge in der Route.
    ///
    /// Bei geschlossener Route zählt der Wrap-Eintrag am Ende mit.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Anzahl der unterschiedlichen Checkpoints (ohne Wrap-Eintrag)
    pub fn distinct_count(&self) -> usize {
        if self.is_closed() {
            self.node_ids.len() - 1
        } else {
            self.node_ids.len()
        }
    }

    /// Checkpoint-ID an Position `position` in Fahrtrichtung.
    ///
    /// # Panics
    ///
    /// Bei `position >= node_count()` — Zugriff außerhalb der Route ist ein
    /// Programmierfehler des Aufrufers.
    pub fn node_id_at(&self, position: usize) -> u64 {
        self.node_ids[position]
    }

    /// Alle Checkpoint-IDs in Fahrtrichtung
    pub fn node_ids(&self) -> &[u64] {
        &self.node_ids
    }

    /// Iterator über die Checkpoint-IDs in Fahrtrichtung
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.node_ids.iter().copied()
    }

    /// `true` wenn die Route geschlossen ist (letzter Eintrag == erster Eintrag).
    ///
    /// Eine leere oder einelementige Route ist nie geschlossen.
    pub fn is_closed(&self) -> bool {
        self.node_ids.len() >= 2 && self.node_ids.first() == self.node_ids.last()
    }

    /// Geometrische Länge der Route in Welteinheiten.
    ///
    /// Summe der Luftlinien-Abstände aufeinanderfolgender Checkpoints,
    /// abgeschnitten auf einen ganzzahligen Wert. Bei geschlossener Route
    /// steht der erste Checkpoint ein zweites Mal am Ende, die Rückkante ist
    /// damit automatisch enthalten; eine offene Route hat keine Rückkante.
    ///
    /// # Panics
    ///
    /// Wenn eine Route-ID nicht in `nodes` enthalten ist — die Route darf
    /// die Checkpoints ihrer Strecke nicht überleben.
    pub fn geometric_length(&self, nodes: &HashMap<u64, TargetNode>) -> u32 {
        let mut length = 0.0f32;
        for pair in self.node_ids.windows(2) {
            let from = &nodes[&pair[0]];
            let to = &nodes[&pair[1]];
            length += from.location.distance(to.location);
        }
        length as u32
    }
}
