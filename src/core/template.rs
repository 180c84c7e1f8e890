//! Template-Kurve: benannte, unveränderliche Punktfolge im lokalen Autoren-Frame.

use super::{AlignError, ReferenceKind};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Vorgefertigte Pfad-Form, die per Ähnlichkeitstransformation in den
/// Weltraum gelegt wird.
///
/// Nur die ersten beiden Punkte sind für die Ausrichtung relevant: sie
/// definieren die Referenzachse des Templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTemplate", into = "RawTemplate")]
pub struct TemplateCurve {
    name: String,
    points: Vec<DVec3>,
}

/// Serialisierte Form `{ name, points: [[x, y, z], …] }`.
#[derive(Serialize, Deserialize)]
struct RawTemplate {
    name: String,
    points: Vec<DVec3>,
}

impl TryFrom<RawTemplate> for TemplateCurve {
    type Error = AlignError;

    fn try_from(raw: RawTemplate) -> Result<Self, Self::Error> {
        TemplateCurve::new(raw.name, raw.points)
    }
}

impl From<TemplateCurve> for RawTemplate {
    fn from(template: TemplateCurve) -> Self {
        Self {
            name: template.name,
            points: template.points,
        }
    }
}

impl TemplateCurve {
    /// Erstellt eine Template-Kurve. Erfordert mindestens zwei Punkte.
    ///
    /// Eine degenerierte erste Strecke prüfen erst `align()` und der Katalog.
    pub fn new(name: impl Into<String>, points: Vec<DVec3>) -> Result<Self, AlignError> {
        let name = name.into();
        if points.len() < 2 {
            return Err(AlignError::InsufficientPoints {
                name,
                count: points.len(),
            });
        }
        Ok(Self { name, points })
    }

    /// Anzeigename (Pfad-Titel).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alle Punkte im Template-Frame.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Anzahl der Punkte (immer ≥ 2).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`, vorhanden für Clippy-Konsistenz mit `len()`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Referenzrichtung `points[1] - points[0]`.
    pub fn reference_direction(&self) -> DVec3 {
        self.points[1] - self.points[0]
    }

    /// Prüft, ob die Referenzstrecke länger als `epsilon` ist.
    pub fn validate_reference(&self, epsilon: f64) -> Result<(), AlignError> {
        if self.reference_direction().length() <= epsilon {
            return Err(AlignError::DegenerateReference {
                reference: ReferenceKind::Template,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_single_point() {
        let err = TemplateCurve::new("Stummel", vec![DVec3::ZERO]).unwrap_err();
        assert_eq!(
            err,
            AlignError::InsufficientPoints {
                name: "Stummel".into(),
                count: 1
            }
        );
    }

    #[test]
    fn test_degenerate_reference_detected() {
        let template =
            TemplateCurve::new("Doppelt", vec![DVec3::ONE, DVec3::ONE, DVec3::X]).unwrap();
        assert!(template.validate_reference(1e-9).is_err());
    }

    #[test]
    fn test_deserialize_from_json_arrays() {
        let json = r#"{"name":"Gerade","points":[[0,0,0],[1,0,0],[2.5,0,0]]}"#;
        let template: TemplateCurve = serde_json::from_str(json).unwrap();
        assert_eq!(template.name(), "Gerade");
        assert_eq!(template.len(), 3);
        assert_eq!(template.points()[2], DVec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_deserialize_rejects_too_few_points() {
        let json = r#"{"name":"Leer","points":[[0,0,0]]}"#;
        assert!(serde_json::from_str::<TemplateCurve>(json).is_err());
    }
}
