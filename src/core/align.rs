//! Aligner: Ähnlichkeitstransformation Template → Weltraum.
//!
//! Bildet die ersten beiden Template-Punkte exakt (bis auf Rundung) auf die
//! beiden gewählten Anker ab. Alle übrigen Punkte folgen derselben
//! Transformation aus uniformer Skalierung, Rotation und Translation.

use super::{AlignError, InstanceCurve, ReferenceKind, TemplateCurve};
use glam::{DQuat, DVec3};
use std::f64::consts::PI;

/// Streckenlänge, ab der eine Referenz als degeneriert gilt.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Schwelle für exakt entgegengesetzte Richtungen (wie in `DQuat::from_rotation_arc`).
const ANTIPARALLEL_THRESHOLD: f64 = -1.0 + 2.0 * f64::EPSILON;

/// Uniforme Skalierung + Rotation + Translation.
///
/// `world = world_origin + rotation · (scale · (p − template_origin))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityTransform {
    /// Template-Punkt 0 (Pivot im Template-Frame)
    pub template_origin: DVec3,
    /// Anker 0 (Pivot im Weltraum)
    pub world_origin: DVec3,
    /// Rotation der Template-Referenzrichtung auf die Anker-Richtung
    pub rotation: DQuat,
    /// `|a1 − a0| / |t1 − t0|`, immer > 0
    pub scale: f64,
}

impl SimilarityTransform {
    /// Berechnet die Transformation, die `template[0..2]` auf `(a0, a1)` legt.
    ///
    /// Schlägt mit `DegenerateReference` fehl, wenn eine der beiden
    /// Referenzstrecken nicht länger als `epsilon` ist oder Skalierung bzw.
    /// Rotation nicht endlich sind (z.B. bei ungültigem `epsilon`).
    pub fn between(
        template: &TemplateCurve,
        a0: DVec3,
        a1: DVec3,
        epsilon: f64,
    ) -> Result<Self, AlignError> {
        let d_template = template.reference_direction();
        let d_target = a1 - a0;

        let template_len = d_template.length();
        if template_len <= epsilon {
            return Err(AlignError::DegenerateReference {
                reference: ReferenceKind::Template,
            });
        }
        let target_len = d_target.length();
        if target_len <= epsilon {
            return Err(AlignError::DegenerateReference {
                reference: ReferenceKind::Anchors,
            });
        }

        let scale = target_len / template_len;
        let rotation = rotation_between(d_template, d_target);
        if !(scale.is_finite() && scale > 0.0 && rotation.is_finite()) {
            let reference = if template_len.is_finite() && template_len > 0.0 {
                ReferenceKind::Anchors
            } else {
                ReferenceKind::Template
            };
            return Err(AlignError::DegenerateReference { reference });
        }

        Ok(Self {
            template_origin: template.points()[0],
            world_origin: a0,
            rotation,
            scale,
        })
    }

    /// Transformiert einen Template-Punkt in den Weltraum.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        let relative = point - self.template_origin;
        self.world_origin + self.rotation * (relative * self.scale)
    }
}

/// Minimale Rotation, die die Richtung `from` auf die Richtung `to` dreht.
///
/// Beide Vektoren müssen ungleich Null sein. Gleiche Richtungen ergeben die
/// Identität. Bei exakt entgegengesetzten Richtungen ist die Achse
/// mathematisch frei; gewählt wird `from × e_k` (normiert), wobei `e_k` der
/// Basisvektor der betragsmäßig kleinsten Komponente von `from` ist
/// (bei Gleichstand x vor y vor z), Winkel 180°.
pub fn rotation_between(from: DVec3, to: DVec3) -> DQuat {
    let from = from.normalize();
    let to = to.normalize();

    if from.dot(to) < ANTIPARALLEL_THRESHOLD {
        return DQuat::from_axis_angle(antiparallel_axis(from), PI);
    }
    DQuat::from_rotation_arc(from, to)
}

/// Deterministische Senkrechte zu `dir` für den 180°-Fall.
fn antiparallel_axis(dir: DVec3) -> DVec3 {
    let abs = dir.abs();
    let basis = if abs.x <= abs.y && abs.x <= abs.z {
        DVec3::X
    } else if abs.y <= abs.z {
        DVec3::Y
    } else {
        DVec3::Z
    };
    dir.cross(basis).normalize()
}

/// Legt `template` so in den Weltraum, dass Punkt 0 auf `a0` und Punkt 1 auf `a1` liegt.
///
/// Erzeugt eine neue Instanz-Kurve gleicher Länge; Template und Anker
/// bleiben unverändert.
pub fn align(template: &TemplateCurve, a0: DVec3, a1: DVec3) -> Result<InstanceCurve, AlignError> {
    align_with_epsilon(template, a0, a1, DEGENERATE_EPSILON)
}

/// Wie `align()`, mit konfigurierbarer Degenerations-Schwelle.
pub fn align_with_epsilon(
    template: &TemplateCurve,
    a0: DVec3,
    a1: DVec3,
    epsilon: f64,
) -> Result<InstanceCurve, AlignError> {
    let transform = SimilarityTransform::between(template, a0, a1, epsilon)?;
    log::debug!(
        "Ausrichtung '{}': Skalierung {:.4}, Rotation {:?}",
        template.name(),
        transform.scale,
        transform.rotation
    );

    let points: Vec<DVec3> = template
        .points()
        .iter()
        .map(|&p| transform.apply(p))
        .collect();

    Ok(InstanceCurve::from_points(points))
}
