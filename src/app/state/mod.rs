//! Application State
//!
//! Verwaltet den Zustand der Anwendung (Ausrichtung, Katalog, offene Anfragen).

mod alignment;
mod app_state;

pub use alignment::AlignmentState;
pub use app_state::AppState;
