//! Use-Case: Anker-Auswahl (Zustandsmaschine EMPTY → PARTIAL → ALIGNED).

use crate::app::AlignmentState;
use crate::core::{align_with_epsilon, AlignError, AnchorPhase, OverflowPolicy};
use crate::shared::AlignerOptions;
use glam::DVec3;

/// Was `select_anchor` mit dem Punkt gemacht hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Erster Anker gesetzt, warte auf den zweiten
    Added,
    /// Zweiter Anker gesetzt, Instanz neu berechnet
    Aligned,
    /// Anker-Menge war voll, Punkt verworfen (`OverflowPolicy::Reject`)
    Rejected,
    /// Anker-Menge war voll, Neustart mit dem Punkt als erstem Anker (`OverflowPolicy::Restart`)
    Restarted,
}

/// Übernimmt einen Weltpunkt in die Anker-Menge.
///
/// Beim zweiten Anker wird sofort ausgerichtet. Schlägt die Ausrichtung fehl
/// (zusammenfallende Anker, degeneriertes Template), wird der Punkt nicht
/// übernommen und der Zustand bleibt unverändert.
pub fn select_anchor(
    state: &mut AlignmentState,
    point: DVec3,
    options: &AlignerOptions,
) -> Result<SelectOutcome, AlignError> {
    match state.anchors.phase() {
        AnchorPhase::Empty => {
            state.anchors.push(point);
            log::info!("Erster Anker gesetzt: {:?}", point);
            Ok(SelectOutcome::Added)
        }
        AnchorPhase::Partial => {
            let Some(a0) = state.anchors.first() else {
                return Ok(SelectOutcome::Rejected);
            };
            let instance = align_with_epsilon(
                &state.active_template,
                a0,
                point,
                options.degenerate_epsilon,
            )?;
            if !instance.fits_anchors(a0, point, options.fit_tolerance) {
                log::warn!(
                    "Instanz weicht von den Ankern ab (Toleranz {}): {:?}",
                    options.fit_tolerance,
                    instance.anchor_points()
                );
            }

            state.anchors.push(point);
            state.set_instance(instance);
            log::info!(
                "Pfad '{}' an Ankern {:?} → {:?} ausgerichtet",
                state.active_template.name(),
                a0,
                point
            );
            Ok(SelectOutcome::Aligned)
        }
        AnchorPhase::Complete => match options.overflow_policy {
            OverflowPolicy::Reject => {
                log::info!("Beide Anker gesetzt, weiterer Punkt verworfen: {:?}", point);
                Ok(SelectOutcome::Rejected)
            }
            OverflowPolicy::Restart => {
                state.anchors.clear();
                state.clear_instance();
                state.anchors.push(point);
                log::info!("Anker-Auswahl neu gestartet mit {:?}", point);
                Ok(SelectOutcome::Restarted)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ReferenceKind, TemplateCurve};

    fn state() -> AlignmentState {
        AlignmentState::new(
            TemplateCurve::new(
                "Gerade",
                vec![
                    DVec3::new(0.0, 0.0, 0.0),
                    DVec3::new(1.0, 0.0, 0.0),
                    DVec3::new(2.0, 0.0, 0.0),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_two_points_align() {
        let mut state = state();
        let opts = AlignerOptions::default();

        assert_eq!(
            select_anchor(&mut state, DVec3::ZERO, &opts).unwrap(),
            SelectOutcome::Added
        );
        assert!(!state.is_initialized());
        assert!(state.instance().is_none());

        assert_eq!(
            select_anchor(&mut state, DVec3::new(0.0, 0.0, 2.0), &opts).unwrap(),
            SelectOutcome::Aligned
        );
        assert!(state.is_initialized());
        let instance = state.instance().unwrap();
        assert_eq!(instance.len(), 3);
        assert!(instance.points()[2].abs_diff_eq(DVec3::new(0.0, 0.0, 4.0), 1e-9));
    }

    #[test]
    fn test_third_point_rejected_by_default() {
        let mut state = state();
        let opts = AlignerOptions::default();
        select_anchor(&mut state, DVec3::ZERO, &opts).unwrap();
        select_anchor(&mut state, DVec3::X, &opts).unwrap();
        let before = state.instance().cloned();

        assert_eq!(
            select_anchor(&mut state, DVec3::Y, &opts).unwrap(),
            SelectOutcome::Rejected
        );
        assert_eq!(state.anchors().len(), 2);
        assert_eq!(state.instance().cloned(), before);
    }

    #[test]
    fn test_third_point_restarts_with_restart_policy() {
        let mut state = state();
        let opts = AlignerOptions {
            overflow_policy: OverflowPolicy::Restart,
            ..AlignerOptions::default()
        };
        select_anchor(&mut state, DVec3::ZERO, &opts).unwrap();
        select_anchor(&mut state, DVec3::X, &opts).unwrap();

        assert_eq!(
            select_anchor(&mut state, DVec3::Y, &opts).unwrap(),
            SelectOutcome::Restarted
        );
        assert_eq!(state.anchors().as_slice(), &[DVec3::Y]);
        assert!(!state.is_initialized());
        assert!(state.instance().is_none());
    }

    #[test]
    fn test_coincident_second_anchor_leaves_state_partial() {
        let mut state = state();
        let opts = AlignerOptions::default();
        let p = DVec3::new(5.0, 5.0, 5.0);
        select_anchor(&mut state, p, &opts).unwrap();

        let err = select_anchor(&mut state, p, &opts).unwrap_err();
        assert_eq!(
            err,
            AlignError::DegenerateReference {
                reference: ReferenceKind::Anchors
            }
        );
        assert_eq!(state.phase(), AnchorPhase::Partial);
        assert!(!state.is_initialized());
    }

    #[test]
    fn test_coincident_anchors_rejected_with_invalid_epsilon() {
        let mut state = state();
        let opts = AlignerOptions {
            degenerate_epsilon: -1.0,
            ..AlignerOptions::default()
        };
        let p = DVec3::new(5.0, 5.0, 5.0);
        select_anchor(&mut state, p, &opts).unwrap();

        assert!(select_anchor(&mut state, p, &opts).is_err());
        assert!(!state.is_initialized());
        assert!(state.instance().is_none());
        assert_eq!(state.phase(), AnchorPhase::Partial);
    }
}
