//! Anchor Path Aligner Library.
//!
//! Richtet eine Template-Kurve per Ähnlichkeitstransformation an zwei
//! Weltankern aus und dreht die freien Kurvenpunkte um die Ankerachse.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AnchorTicket, AppCommand, AppController, AppIntent, AppState, CurveRenderer, PointEvent,
    PointSource, QueuedPointSource,
};
pub use crate::core::{
    align, AlignError, AnchorPhase, InstanceCurve, OverflowPolicy, ReferenceKind,
    TemplateCatalog, TemplateCurve,
};
pub use shared::{AlignerOptions, CurveScene};
