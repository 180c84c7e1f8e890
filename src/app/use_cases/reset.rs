//! Use-Case: Anker und Instanz verwerfen.

use crate::app::AlignmentState;

/// Leert Anker und Instanz, setzt die Rotation zurück und erhöht die Generation.
///
/// Das aktive Template bleibt erhalten. Noch laufende Anker-Anfragen gelten
/// danach als veraltet.
pub fn reset(state: &mut AlignmentState) {
    let had_anchors = !state.anchors.is_empty();
    state.anchors.clear();
    state.clear_instance();
    state.bump_generation();
    if had_anchors {
        log::info!("Anker-Auswahl zurückgesetzt (Generation {})", state.generation);
    } else {
        log::debug!("Reset ohne gesetzte Anker (Generation {})", state.generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::select_anchor;
    use crate::core::{AnchorPhase, TemplateCurve};
    use crate::shared::AlignerOptions;
    use glam::DVec3;

    #[test]
    fn test_reset_clears_everything_but_template() {
        let template =
            TemplateCurve::new("Gerade", vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)])
                .unwrap();
        let mut state = AlignmentState::new(template.clone());
        let opts = AlignerOptions::default();
        select_anchor(&mut state, DVec3::ZERO, &opts).unwrap();
        select_anchor(&mut state, DVec3::Y, &opts).unwrap();
        assert!(state.is_initialized());

        reset(&mut state);

        assert_eq!(state.phase(), AnchorPhase::Empty);
        assert!(state.instance().is_none());
        assert!(!state.is_initialized());
        assert_eq!(state.current_rotation_deg(), 0.0);
        assert_eq!(state.generation(), 1);
        assert_eq!(state.active_template(), &template);
    }
}
