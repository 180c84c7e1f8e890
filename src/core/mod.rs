//! Core-Domänentypen: Template, Instanz-Kurve, Anker, Ausrichtung, Achsrotation.
//!
//! Reine Berechnungen ohne Zustand der Anwendung; alles hier ist unabhängig
//! vom Controller testbar.

pub mod align;
pub mod anchor_set;
pub mod axis_rotation;
pub mod catalog;
pub mod error;
pub mod instance;
pub mod template;

pub use align::{
    align, align_with_epsilon, rotation_between, SimilarityTransform, DEGENERATE_EPSILON,
};
pub use anchor_set::{AnchorPhase, AnchorSet, OverflowPolicy, MAX_ANCHORS};
pub use axis_rotation::{rotate_trailing_points, validate_angle};
pub use catalog::{CatalogFile, TemplateCatalog};
pub use error::{AlignError, ReferenceKind};
pub use instance::InstanceCurve;
pub use template::TemplateCurve;

/// Weltraum- bzw. Template-Punkt. Der Frame ergibt sich aus dem Kontext.
pub type Point3 = glam::DVec3;
