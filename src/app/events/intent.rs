use crate::app::pending::AnchorTicket;
use crate::core::TemplateCurve;
use glam::DVec3;
use serde::Deserialize;

/// App-Intent Events.
/// Intents sind Eingaben aus Host/Tracking ohne direkte Mutationslogik.
///
/// Deserialisierbar, damit Sitzungen als JSON-Skript abgespielt werden können
/// (`{"type": "PointSelected", "point": [0, 0, 0]}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum AppIntent {
    /// Treffer auf einer erkannten Fläche.
    /// `attachable`: Anker kann synchron an die Fläche gehängt werden.
    SurfaceHit { point: DVec3, attachable: bool },
    /// Asynchrone Anker-Erzeugung abgeschlossen (`point = None` → fehlgeschlagen)
    AnchorResolved {
        ticket: AnchorTicket,
        point: Option<DVec3>,
    },
    /// Weltpunkt direkt als Anker wählen
    PointSelected { point: DVec3 },
    /// Rotations-Slider geändert (Grad, gültig in [0, 360])
    RotationChanged { angle: f64 },
    /// Zum nächsten Template im Katalog wechseln
    NextTemplateRequested,
    /// Template per Katalog-Index wählen
    TemplateSelected { index: usize },
    /// Extern geladenes Template registrieren und aktivieren
    TemplateLoaded { template: TemplateCurve },
    /// Alle Anker entfernen und Pfad verwerfen
    ResetRequested,
}
