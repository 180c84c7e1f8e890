//! Handler für Anker-Auswahl und asynchrone Anker-Erzeugung.

use crate::app::pending::{AnchorTicket, TicketStatus};
use crate::app::ports::PointSource;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::AlignError;
use glam::DVec3;

/// Übergibt einen Weltpunkt an den Anker-Selektor.
pub fn select(state: &mut AppState, point: DVec3) -> Result<(), AlignError> {
    let outcome = use_cases::select_anchor(&mut state.alignment, point, &state.options)?;
    log::debug!("Anker-Auswahl: {:?}", outcome);
    Ok(())
}

/// Fordert bei der PointSource einen Anker an `point` an.
///
/// Das Ticket trägt die aktuelle Generation. Lehnt die Quelle ab, wird das
/// Ticket sofort wieder verworfen.
pub fn request_creation(state: &mut AppState, source: &mut dyn PointSource, point: DVec3) {
    let ticket = state.pending.issue(state.alignment.generation());
    match source.request_anchor(ticket, point) {
        Ok(()) => log::debug!("Anker-Erzeugung angefordert: {:?} an {:?}", ticket, point),
        Err(e) => {
            state.pending.redeem(ticket, state.alignment.generation());
            log::warn!("Anker-Erzeugung an {:?} fehlgeschlagen: {:#}", point, e);
        }
    }
}

/// Prüft ein eingetroffenes Anker-Ergebnis und übernimmt es ggf. als Anker.
pub fn accept_resolved(
    state: &mut AppState,
    ticket: AnchorTicket,
    point: Option<DVec3>,
) -> Result<(), AlignError> {
    match state.pending.redeem(ticket, state.alignment.generation()) {
        TicketStatus::Unknown => {
            log::debug!("Unbekanntes Anker-Ticket ignoriert: {:?}", ticket);
            Ok(())
        }
        TicketStatus::Stale => {
            log::warn!(
                "Veraltetes Anker-Ergebnis verworfen: {:?} (aktuelle Generation {})",
                ticket,
                state.alignment.generation()
            );
            Ok(())
        }
        TicketStatus::Current => match point {
            Some(point) => select(state, point),
            None => {
                log::warn!("Anker-Erzeugung für {:?} fehlgeschlagen", ticket);
                Ok(())
            }
        },
    }
}
