//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Render-Übergabe, die zwischen `app` und dem
//! externen Renderer geteilt werden.

pub mod options;
mod render_scene;

pub use options::AlignerOptions;
pub use options::{DEGENERATE_EPSILON, FIT_TOLERANCE, OPTIONS_FILE_NAME};
pub use render_scene::CurveScene;
