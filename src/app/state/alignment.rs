//! Ausrichtungszustand: aktives Template, Anker, Instanz-Kurve, Rotation.

use crate::core::{AnchorPhase, AnchorSet, InstanceCurve, TemplateCurve};

/// Einziger Besitzer des veränderlichen Engine-Zustands.
///
/// Invarianten:
/// - `initialized` ⇒ `instance` ist gesetzt und Punkt 0/1 liegen auf den Ankern.
/// - `instance.len() == active_template.len()`, wenn gesetzt.
/// - Die Rotation verändert nur Punkte ab Index 2.
#[derive(Debug, Clone)]
pub struct AlignmentState {
    pub(crate) active_template: TemplateCurve,
    pub(crate) anchors: AnchorSet,
    pub(crate) instance: Option<InstanceCurve>,
    pub(crate) current_rotation_deg: f64,
    pub(crate) initialized: bool,
    pub(crate) generation: u64,
}

impl AlignmentState {
    /// Erstellt einen leeren Zustand (keine Anker, keine Instanz) für ein Template.
    pub fn new(template: TemplateCurve) -> Self {
        Self {
            active_template: template,
            anchors: AnchorSet::new(),
            instance: None,
            current_rotation_deg: 0.0,
            initialized: false,
            generation: 0,
        }
    }

    /// Aktives Template.
    pub fn active_template(&self) -> &TemplateCurve {
        &self.active_template
    }

    /// Gewählte Anker.
    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// Aktuelle Instanz-Kurve, falls ausgerichtet.
    pub fn instance(&self) -> Option<&InstanceCurve> {
        self.instance.as_ref()
    }

    /// Zuletzt angewendeter Rotationswinkel in Grad.
    pub fn current_rotation_deg(&self) -> f64 {
        self.current_rotation_deg
    }

    /// Gibt `true` zurück, wenn eine ausgerichtete Instanz existiert.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Generation für die Zuordnung asynchroner Anker-Ergebnisse.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Phase der Anker-Auswahl.
    pub fn phase(&self) -> AnchorPhase {
        self.anchors.phase()
    }

    /// Verwirft Instanz und Rotation (Anker bleiben).
    pub(crate) fn clear_instance(&mut self) {
        self.instance = None;
        self.initialized = false;
        self.current_rotation_deg = 0.0;
    }

    /// Setzt eine frisch ausgerichtete, unrotierte Instanz.
    pub(crate) fn set_instance(&mut self, instance: InstanceCurve) {
        self.instance = Some(instance);
        self.initialized = true;
        self.current_rotation_deg = 0.0;
    }

    /// Markiert alle laufenden Anker-Anfragen als veraltet.
    pub(crate) fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
