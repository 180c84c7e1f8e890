//! Use-Case: Nicht-fixierte Kurvenpunkte um die Ankerachse drehen.

use crate::app::AlignmentState;
use crate::core::{rotate_trailing_points, validate_angle, AlignError};
use crate::shared::AlignerOptions;

/// Wirkung eines `set_rotation`-Aufrufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationOutcome {
    /// Punkte ab Index 2 wurden um `delta_deg` gedreht
    Applied {
        /// Angewendete Winkeldifferenz in Grad
        delta_deg: f64,
    },
    /// Zielwinkel entspricht dem aktuellen Winkel, nichts zu tun
    Unchanged,
    /// Noch keine ausgerichtete Instanz, stiller No-op
    NotInitialized,
}

/// Stellt den Rotationswinkel auf `target_deg` ein.
///
/// Inkrementell: gedreht wird nur um die Differenz zum zuletzt angewendeten
/// Winkel. Die Achse läuft durch die aktuellen Instanz-Punkte 0 und 1.
/// Ungültige Winkel (außerhalb `[0, 360]`) verändern nichts.
pub fn set_rotation(
    state: &mut AlignmentState,
    target_deg: f64,
    options: &AlignerOptions,
) -> Result<RotationOutcome, AlignError> {
    validate_angle(target_deg)?;

    let instance = match state.instance.as_mut() {
        Some(instance) if state.initialized => instance,
        _ => {
            log::debug!("Rotation auf {}° ignoriert: Pfad nicht ausgerichtet", target_deg);
            return Ok(RotationOutcome::NotInitialized);
        }
    };

    let delta_deg = target_deg - state.current_rotation_deg;
    if delta_deg == 0.0 {
        return Ok(RotationOutcome::Unchanged);
    }

    rotate_trailing_points(instance, delta_deg, options.degenerate_epsilon)?;
    state.current_rotation_deg = target_deg;
    log::info!("Rotation auf {}° gesetzt (Δ {}°)", target_deg, delta_deg);
    Ok(RotationOutcome::Applied { delta_deg })
}
