//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod pending;
pub mod ports;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Engine (Ausrichtung, Katalog, offene Anfragen).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use pending::{AnchorTicket, PendingAnchors, TicketStatus};
pub use ports::{CurveRenderer, PointEvent, PointSource, QueuedPointSource, RecordingRenderer};
pub use render_scene::build as build_render_scene;
pub use state::{AlignmentState, AppState};
