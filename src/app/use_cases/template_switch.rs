//! Use-Case: Aktives Template wechseln und mit vorhandenen Ankern neu ausrichten.

use crate::app::AlignmentState;
use crate::core::{align_with_epsilon, AlignError, TemplateCurve};
use crate::shared::AlignerOptions;

/// Ergebnis eines Template-Wechsels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Template gewechselt und mit den behaltenen Ankern neu ausgerichtet
    Realigned,
    /// Template gewechselt, weniger als zwei Anker vorhanden
    AwaitingAnchors,
}

/// Ersetzt das aktive Template.
///
/// Die alte Instanz wird verworfen und die Rotation auf 0 gesetzt. Sind
/// beide Anker gesetzt, wird sofort gegen das neue Template ausgerichtet.
/// Schlägt diese Ausrichtung fehl, bleibt der gesamte Zustand unverändert
/// (altes Template, alte Instanz).
pub fn switch_template(
    state: &mut AlignmentState,
    template: TemplateCurve,
    options: &AlignerOptions,
) -> Result<SwitchOutcome, AlignError> {
    let realigned = match state.anchors.pair() {
        Some((a0, a1)) => Some(align_with_epsilon(
            &template,
            a0,
            a1,
            options.degenerate_epsilon,
        )?),
        None => None,
    };

    log::info!(
        "Template gewechselt: '{}' → '{}'",
        state.active_template.name(),
        template.name()
    );
    state.clear_instance();
    state.active_template = template;
    state.bump_generation();

    match realigned {
        Some(instance) => {
            state.set_instance(instance);
            Ok(SwitchOutcome::Realigned)
        }
        None => Ok(SwitchOutcome::AwaitingAnchors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::{select_anchor, set_rotation};
    use crate::core::ReferenceKind;
    use glam::DVec3;

    fn template(name: &str, last_x: f64) -> TemplateCurve {
        TemplateCurve::new(
            name,
            vec![DVec3::ZERO, DVec3::X, DVec3::new(last_x, 0.0, 0.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_switch_realigns_with_retained_anchors() {
        let mut state = AlignmentState::new(template("A", 2.0));
        let opts = AlignerOptions::default();
        select_anchor(&mut state, DVec3::ZERO, &opts).unwrap();
        select_anchor(&mut state, DVec3::new(0.0, 0.0, 2.0), &opts).unwrap();
        set_rotation(&mut state, 45.0, &opts).unwrap();

        let outcome = switch_template(&mut state, template("B", 3.0), &opts).unwrap();

        assert_eq!(outcome, SwitchOutcome::Realigned);
        assert_eq!(state.active_template().name(), "B");
        assert_eq!(state.current_rotation_deg(), 0.0);
        assert_eq!(state.anchors().len(), 2);
        let p = state.instance().unwrap().points()[2];
        assert!(p.abs_diff_eq(DVec3::new(0.0, 0.0, 6.0), 1e-9));
    }

    #[test]
    fn test_switch_with_one_anchor_waits() {
        let mut state = AlignmentState::new(template("A", 2.0));
        let opts = AlignerOptions::default();
        select_anchor(&mut state, DVec3::ONE, &opts).unwrap();

        let outcome = switch_template(&mut state, template("B", 3.0), &opts).unwrap();

        assert_eq!(outcome, SwitchOutcome::AwaitingAnchors);
        assert!(state.instance().is_none());
        assert_eq!(state.anchors().len(), 1);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_failed_switch_keeps_old_state() {
        let mut state = AlignmentState::new(template("A", 2.0));
        let opts = AlignerOptions::default();
        select_anchor(&mut state, DVec3::ZERO, &opts).unwrap();
        select_anchor(&mut state, DVec3::Y, &opts).unwrap();
        let before = state.instance().cloned();

        let degenerate = TemplateCurve::new("Kaputt", vec![DVec3::ONE, DVec3::ONE]).unwrap();
        let err = switch_template(&mut state, degenerate, &opts).unwrap_err();

        assert_eq!(
            err,
            AlignError::DegenerateReference {
                reference: ReferenceKind::Template
            }
        );
        assert_eq!(state.active_template().name(), "A");
        assert_eq!(state.instance().cloned(), before);
        assert!(state.is_initialized());
        assert_eq!(state.generation(), 0);
    }
}
