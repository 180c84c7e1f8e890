//! Fehlertypen der Ausrichtungs-Engine.

use thiserror::Error;

/// Welche Referenzstrecke war degeneriert?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Erste Strecke der Template-Kurve (Punkt 0 → Punkt 1)
    Template,
    /// Strecke zwischen den beiden gewählten Ankern
    Anchors,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Template => write!(f, "Template-Referenzstrecke"),
            ReferenceKind::Anchors => write!(f, "Anker-Strecke"),
        }
    }
}

/// Lokale, behebbare Fehler der Ausrichtung und Achsrotation.
///
/// Keiner dieser Fehler ist fatal: der Aufrufer entscheidet, ob der Operator
/// informiert wird. Der Zustand bleibt bei jedem Fehler unverändert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// Referenzstrecke hat Länge 0, Skalierung/Rotation nicht bestimmbar.
    #[error("{reference} ist degeneriert (Länge 0)")]
    DegenerateReference {
        /// Betroffene Strecke
        reference: ReferenceKind,
    },
    /// Zielwinkel liegt außerhalb von [0, 360].
    #[error("Rotationswinkel {angle} liegt außerhalb von [0, 360]")]
    InvalidRotationAngle {
        /// Angefragter Winkel in Grad
        angle: f64,
    },
    /// Template-Kurve mit weniger als zwei Punkten.
    #[error("Template '{name}' hat nur {count} Punkt(e), mindestens 2 erforderlich")]
    InsufficientPoints {
        /// Name des Templates
        name: String,
        /// Tatsächliche Punktanzahl
        count: usize,
    },
    /// Katalog ohne Templates.
    #[error("Template-Katalog ist leer")]
    EmptyCatalog,
    /// Template-Index existiert nicht im Katalog.
    #[error("Template-Index {index} außerhalb des Katalogs ({count} Einträge)")]
    TemplateIndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Anzahl Templates im Katalog
        count: usize,
    },
}
