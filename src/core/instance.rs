//! Instanz-Kurve: das in den Weltraum gelegte Template.

use glam::DVec3;
use serde::Serialize;

/// Weltraum-Punktfolge, gleiche Länge wie das aktive Template.
///
/// Wird nur von Aligner und Achsrotation erzeugt bzw. verändert;
/// der Renderer liest sie über `points()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InstanceCurve {
    points: Vec<DVec3>,
}

impl InstanceCurve {
    pub(crate) fn from_points(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// Alle Weltpunkte in Reihenfolge.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [DVec3] {
        &mut self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Kurve keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Die beiden ankerfixierten Punkte (Index 0 und 1), falls vorhanden.
    pub fn anchor_points(&self) -> Option<(DVec3, DVec3)> {
        match self.points.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Prüft, ob die ersten beiden Punkte innerhalb `tolerance` auf den Ankern liegen.
    pub fn fits_anchors(&self, a0: DVec3, a1: DVec3, tolerance: f64) -> bool {
        self.anchor_points().is_some_and(|(p0, p1)| {
            p0.abs_diff_eq(a0, tolerance) && p1.abs_diff_eq(a1, tolerance)
        })
    }
}
