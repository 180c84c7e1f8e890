//! Use-Cases der Ausrichtungs-Engine.
//!
//! Reine Funktionen über `AlignmentState` plus expliziter Eingabe; kein
//! Zugriff auf Controller, Katalog oder Kollaborateure.

pub mod anchor_selection;
pub mod reset;
pub mod rotation;
pub mod template_switch;

pub use anchor_selection::{select_anchor, SelectOutcome};
pub use reset::reset;
pub use rotation::{set_rotation, RotationOutcome};
pub use template_switch::{switch_template, SwitchOutcome};
