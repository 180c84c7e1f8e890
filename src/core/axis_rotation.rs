//! Achsrotation: dreht die nicht-fixierten Kurvenpunkte um die Ankerachse.

use super::{AlignError, InstanceCurve, ReferenceKind};
use glam::{DQuat, DVec3};

/// Kleinster gültiger Zielwinkel in Grad.
pub const MIN_ROTATION_DEG: f64 = 0.0;
/// Größter gültiger Zielwinkel in Grad.
pub const MAX_ROTATION_DEG: f64 = 360.0;

/// Prüft, ob ein Zielwinkel in `[0, 360]` liegt (NaN ist ungültig).
pub fn validate_angle(angle_deg: f64) -> Result<(), AlignError> {
    if (MIN_ROTATION_DEG..=MAX_ROTATION_DEG).contains(&angle_deg) {
        Ok(())
    } else {
        Err(AlignError::InvalidRotationAngle { angle: angle_deg })
    }
}

/// Dreht alle Punkte ab Index 2 um `delta_deg` Grad um die Achse durch
/// `instance[0]` und `instance[1]`.
///
/// Die Achse wird aus der aktuellen Instanz genommen, nicht aus den
/// ursprünglichen Ankern. Punkte 0 und 1 bleiben unberührt.
pub fn rotate_trailing_points(
    instance: &mut InstanceCurve,
    delta_deg: f64,
    epsilon: f64,
) -> Result<(), AlignError> {
    let Some((pivot, second)) = instance.anchor_points() else {
        return Ok(());
    };
    let axis = second - pivot;
    if axis.length() <= epsilon {
        return Err(AlignError::DegenerateReference {
            reference: ReferenceKind::Anchors,
        });
    }
    if delta_deg == 0.0 {
        return Ok(());
    }

    let rotation = DQuat::from_axis_angle(axis.normalize(), delta_deg.to_radians());
    for point in instance.points_mut().iter_mut().skip(2) {
        *point = rotate_about(*point, pivot, rotation);
    }
    Ok(())
}

fn rotate_about(point: DVec3, pivot: DVec3, rotation: DQuat) -> DVec3 {
    pivot + rotation * (point - pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{align, TemplateCurve};
    use approx::assert_abs_diff_eq;

    fn l_shaped_instance() -> InstanceCurve {
        let template = TemplateCurve::new(
            "Winkel",
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 0.0, 1.0),
                DVec3::new(1.0, 0.0, 1.0),
                DVec3::new(1.0, 0.0, 2.0),
            ],
        )
        .unwrap();
        align(&template, DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0)).unwrap()
    }

    #[test]
    fn test_validate_angle_bounds() {
        assert!(validate_angle(0.0).is_ok());
        assert!(validate_angle(360.0).is_ok());
        assert!(validate_angle(-0.5).is_err());
        assert!(validate_angle(360.01).is_err());
        assert!(validate_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_quarter_turn_about_z_axis() {
        let mut instance = l_shaped_instance();
        rotate_trailing_points(&mut instance, 90.0, 1e-9).unwrap();

        let p = instance.points();
        assert_abs_diff_eq!(p[2].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p[2].y, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p[2].z, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p[3].y, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p[3].z, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_first_two_points_never_move() {
        let mut instance = l_shaped_instance();
        let (p0, p1) = instance.anchor_points().unwrap();
        for delta in [17.0, 90.0, 180.0, 359.0, -45.0] {
            rotate_trailing_points(&mut instance, delta, 1e-9).unwrap();
            assert_eq!(instance.anchor_points(), Some((p0, p1)));
        }
    }

    #[test]
    fn test_zero_delta_leaves_points_bitwise_equal() {
        let mut instance = l_shaped_instance();
        let before = instance.clone();
        rotate_trailing_points(&mut instance, 0.0, 1e-9).unwrap();
        assert_eq!(instance, before);
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let mut instance = l_shaped_instance();
        let before = instance.clone();
        rotate_trailing_points(&mut instance, 360.0, 1e-9).unwrap();
        for (a, b) in instance.points().iter().zip(before.points()) {
            assert!(a.abs_diff_eq(*b, 1e-9));
        }
    }
}
