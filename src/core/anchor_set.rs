//! Anker-Menge: bis zu zwei gewählte Weltpunkte in Auswahlreihenfolge.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Maximale Anzahl gleichzeitig gewählter Anker.
pub const MAX_ANCHORS: usize = 2;

/// Verhalten, wenn bei voller Anker-Menge ein weiterer Punkt eintrifft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Neuen Punkt verwerfen, bestehender Pfad bleibt stehen
    #[default]
    Reject,
    /// Anker leeren und mit dem neuen Punkt als einzigem Anker neu beginnen
    Restart,
}

/// Phase der Anker-Auswahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorPhase {
    /// Kein Anker gesetzt
    Empty,
    /// Ein Anker gesetzt
    Partial,
    /// Zwei Anker gesetzt
    Complete,
}

/// Geordnete Menge von 0, 1 oder 2 Ankern. Länge überschreitet nie `MAX_ANCHORS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSet {
    anchors: Vec<DVec3>,
}

impl AnchorSet {
    /// Erstellt eine leere Anker-Menge.
    pub fn new() -> Self {
        Self {
            anchors: Vec::with_capacity(MAX_ANCHORS),
        }
    }

    /// Anzahl gesetzter Anker.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Gibt `true` zurück, wenn kein Anker gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Gibt `true` zurück, wenn beide Anker gesetzt sind.
    pub fn is_full(&self) -> bool {
        self.anchors.len() >= MAX_ANCHORS
    }

    /// Aktuelle Phase der Auswahl.
    pub fn phase(&self) -> AnchorPhase {
        match self.anchors.len() {
            0 => AnchorPhase::Empty,
            1 => AnchorPhase::Partial,
            _ => AnchorPhase::Complete,
        }
    }

    /// Alle Anker in Auswahlreihenfolge.
    pub fn as_slice(&self) -> &[DVec3] {
        &self.anchors
    }

    /// Erster Anker, falls gesetzt.
    pub fn first(&self) -> Option<DVec3> {
        self.anchors.first().copied()
    }

    /// Beide Anker, falls vollständig.
    pub fn pair(&self) -> Option<(DVec3, DVec3)> {
        match self.anchors.as_slice() {
            [a0, a1] => Some((*a0, *a1)),
            _ => None,
        }
    }

    /// Hängt einen Anker an. Gibt `false` zurück, wenn die Menge bereits voll ist.
    pub fn push(&mut self, point: DVec3) -> bool {
        if self.is_full() {
            return false;
        }
        self.anchors.push(point);
        true
    }

    /// Entfernt alle Anker.
    pub fn clear(&mut self) {
        self.anchors.clear();
    }
}
