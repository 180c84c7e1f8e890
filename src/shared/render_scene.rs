//! Kurven-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der externe Renderer sie konsumiert.

use crate::core::AnchorPhase;
use glam::DVec3;
use serde::Serialize;

/// Read-only Daten für einen Render-Durchlauf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveScene {
    /// Pfad-Titel (Name des aktiven Templates)
    pub title: String,
    /// Weltpunkte der Instanz-Kurve (leer solange nicht ausgerichtet)
    pub points: Vec<DVec3>,
    /// Ob die Kurve angezeigt werden soll
    pub active: bool,
    /// Gesetzte Anker in Auswahlreihenfolge
    pub anchors: Vec<DVec3>,
    /// Aktuell angewendeter Rotationswinkel in Grad
    pub rotation_deg: f64,
    /// Phase der Anker-Auswahl
    pub phase: AnchorPhase,
}

impl CurveScene {
    /// Gibt zurück, ob eine Kurve zum Rendern vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.active && !self.points.is_empty()
    }
}
