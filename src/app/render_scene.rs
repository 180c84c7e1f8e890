//! Builder für Kurven-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::CurveScene;

/// Baut eine CurveScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> CurveScene {
    let alignment = &state.alignment;
    let points = alignment
        .instance()
        .map(|instance| instance.points().to_vec())
        .unwrap_or_default();

    CurveScene {
        title: state.path_title().to_string(),
        points,
        active: alignment.is_initialized(),
        anchors: alignment.anchors().as_slice().to_vec(),
        rotation_deg: alignment.current_rotation_deg(),
        phase: alignment.phase(),
    }
}
