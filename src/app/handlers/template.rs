//! Handler für Template-Wechsel und Reset.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AlignError, TemplateCurve};

/// Wechselt zyklisch zum nächsten Template im Katalog.
pub fn next(state: &mut AppState) -> Result<(), AlignError> {
    let previous = state.catalog.active_index();
    let Some(template) = state.catalog.next().cloned() else {
        log::info!("Nur ein Template im Katalog, kein Wechsel");
        return Ok(());
    };
    activate_or_restore(state, template, previous)
}

/// Aktiviert das Template am Katalog-Index.
pub fn select_index(state: &mut AppState, index: usize) -> Result<(), AlignError> {
    let previous = state.catalog.active_index();
    let template = state.catalog.select(index)?.clone();
    activate_or_restore(state, template, previous)
}

/// Registriert ein extern geladenes Template und aktiviert es.
pub fn activate(state: &mut AppState, template: TemplateCurve) -> Result<(), AlignError> {
    let previous = state.catalog.active_index();
    let index = state.catalog.upsert(template)?;
    let template = state.catalog.select(index)?.clone();
    activate_or_restore(state, template, previous)
}

/// Entfernt alle Anker, verwirft den Pfad und alle offenen Anker-Anfragen.
pub fn reset(state: &mut AppState) {
    use_cases::reset(&mut state.alignment);
    state.pending.clear();
}

fn activate_or_restore(
    state: &mut AppState,
    template: TemplateCurve,
    previous: usize,
) -> Result<(), AlignError> {
    match use_cases::switch_template(&mut state.alignment, template, &state.options) {
        Ok(outcome) => {
            state.pending.clear();
            log::debug!("Template-Wechsel: {:?}", outcome);
            Ok(())
        }
        Err(e) => {
            // Katalog-Index an das weiterhin aktive Template angleichen
            let _ = state.catalog.select(previous);
            Err(e)
        }
    }
}
