//! Handler für die Achsrotation.

use crate::app::use_cases::{self, RotationOutcome};
use crate::app::AppState;
use crate::core::AlignError;

/// Stellt den Rotationswinkel ein (inkrementell, Punkte ab Index 2).
pub fn set(state: &mut AppState, angle: f64) -> Result<(), AlignError> {
    if let RotationOutcome::NotInitialized =
        use_cases::set_rotation(&mut state.alignment, angle, &state.options)?
    {
        log::debug!("Rotation ohne ausgerichteten Pfad ignoriert");
    }
    Ok(())
}
