use crate::app::pending::PendingAnchors;
use crate::app::CommandLog;
use crate::core::{AlignError, TemplateCatalog};
use crate::shared::AlignerOptions;

use super::AlignmentState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Ausrichtungszustand (Template, Anker, Instanz, Rotation)
    pub alignment: AlignmentState,
    /// Verfügbare Templates und aktiver Index
    pub catalog: TemplateCatalog,
    /// Laufzeit-Optionen
    pub options: AlignerOptions,
    /// Offene asynchrone Anker-Anfragen
    pub pending: PendingAnchors,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Letzter behebbarer Fehler des zuletzt verarbeiteten Intents (für Operator-Hinweis)
    pub last_error: Option<AlignError>,
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self::with_options(catalog, AlignerOptions::default())
    }

    /// Erstellt einen leeren Zustand; `options.start_template` wählt das Start-Template.
    ///
    /// Ungültige Schwellwerte in `options` werden durch die Standardwerte ersetzt.
    pub fn with_options(mut catalog: TemplateCatalog, options: AlignerOptions) -> Self {
        let options = options.sanitized();
        if let Some(name) = options.start_template.as_deref() {
            match catalog.find(name) {
                Some(index) => {
                    // Index stammt aus find(), kann nicht außerhalb liegen
                    let _ = catalog.select(index);
                }
                None => log::warn!("Start-Template '{}' nicht im Katalog", name),
            }
        }

        Self {
            alignment: AlignmentState::new(catalog.active().clone()),
            catalog,
            options,
            pending: PendingAnchors::new(),
            command_log: CommandLog::new(),
            last_error: None,
        }
    }

    /// Name des aktiven Templates (Pfad-Titel).
    pub fn path_title(&self) -> &str {
        self.alignment.active_template().name()
    }
}
