use crate::app::pending::AnchorTicket;
use crate::core::TemplateCurve;
use glam::DVec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt an den Anker-Selektor übergeben
    SelectAnchor { point: DVec3 },
    /// Asynchrone Anker-Erzeugung bei der PointSource anfordern
    RequestAnchorCreation { point: DVec3 },
    /// Ergebnis einer asynchronen Anker-Erzeugung prüfen und übernehmen
    AcceptResolvedAnchor {
        ticket: AnchorTicket,
        point: Option<DVec3>,
    },
    /// Achsrotation auf Zielwinkel setzen
    SetRotation { angle: f64 },
    /// Zyklisch zum nächsten Template wechseln
    SelectNextTemplate,
    /// Template per Katalog-Index aktivieren
    SelectTemplateIndex { index: usize },
    /// Template im Katalog registrieren und aktivieren
    ActivateTemplate { template: TemplateCurve },
    /// Anker, Instanz und offene Anfragen verwerfen
    Reset,
}
