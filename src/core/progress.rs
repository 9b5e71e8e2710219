//! Laufzeit-Verfolgung der Route: Wegpunkt-Fortschritt und Rundenzählung.

use super::{Route, TargetNode};
use glam::Vec2;
use std::collections::HashMap;

/// Ereignis eines Fortschritts-Updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Kein Checkpoint erreicht
    Idle,
    /// Anvisierter Checkpoint erreicht, nächster wird anvisiert
    TargetReached,
    /// Letzter Checkpoint einer geschlossenen Route passiert — Runde komplett
    LapCompleted,
    /// Letzter Checkpoint einer offenen Route erreicht — Ziel
    Finished,
}

/// Fortschritt eines Fahrzeugs entlang der Route.
///
/// Hält die Position des aktuell anvisierten Checkpoints in Fahrtrichtung
/// und die Anzahl vollendeter Runden. Bei geschlossener Route wird zyklisch
/// über die unterschiedlichen Checkpoints weitergeschaltet, bei offener
/// Route endet die Verfolgung am letzten Checkpoint. Die KI nutzt
/// `current_target` als Wegpunkt-Ziel.
#[derive(Debug, Clone, Default)]
pub struct RouteProgress {
    current_target: usize,
    laps: u32,
    finished: bool,
}

impl RouteProgress {
    /// Erstellt einen Fortschritt am Routenanfang
    pub fn new() -> Self {
        Self::default()
    }

    /// Position des aktuell anvisierten Checkpoints in Fahrtrichtung
    pub fn current_target(&self) -> usize {
        self.current_target
    }

    /// Anzahl vollendeter Runden
    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// `true` wenn das Ende einer offenen Route erreicht wurde
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Setzt den Fortschritt für ein neues Rennen zurück
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Aktualisiert den Fortschritt anhand der Fahrzeugposition.
    ///
    /// Erreicht das Fahrzeug den Toleranzradius des anvisierten Checkpoints,
    /// wird der nächste anvisiert. Das Passieren des letzten Checkpoints
    /// zählt bei geschlossener Route eine Runde; bei offener Route endet die
    /// Verfolgung und weitere Updates bleiben `Idle`.
    ///
    /// # Panics
    ///
    /// Wenn eine Route-ID nicht in `nodes` enthalten ist.
    pub fn update(
        &mut self,
        position: Vec2,
        route: &Route,
        nodes: &HashMap<u64, TargetNode>,
    ) -> ProgressEvent {
        let targets = route.distinct_count();
        if targets == 0 || self.finished {
            return ProgressEvent::Idle;
        }

        let target_id = route.node_id_at(self.current_target);
        let target = &nodes[&target_id];
        if position.distance(target.location) > target.radius {
            return ProgressEvent::Idle;
        }

        if self.current_target + 1 >= targets {
            if route.is_closed() {
                self.current_target = 0;
                self.laps += 1;
                ProgressEvent::LapCompleted
            } else {
                self.finished = true;
                ProgressEvent::Finished
            }
        } else {
            self.current_target += 1;
            ProgressEvent::TargetReached
        }
    }
}
