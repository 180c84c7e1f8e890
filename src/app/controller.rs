//! Application Controller für zentrale Event-Verarbeitung.

use super::ports::{CurveRenderer, PointEvent, PointSource};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::AlignError;
use crate::shared::CurveScene;

/// Orchestriert Intents, Use-Cases und die angehängte PointSource.
///
/// Lebenszyklus: `start()` hängt eine Quelle an, `stop()` löst sie wieder.
/// Ohne Quelle werden Anker-Anfragen verworfen, alle anderen Intents
/// funktionieren weiter.
#[derive(Default)]
pub struct AppController {
    source: Option<Box<dyn PointSource>>,
}

impl AppController {
    /// Erstellt einen neuen Controller ohne angehängte Quelle.
    pub fn new() -> Self {
        Self { source: None }
    }

    /// Hängt eine PointSource an. Eine zuvor angehängte Quelle wird erst gelöst.
    pub fn start(&mut self, mut source: Box<dyn PointSource>) -> anyhow::Result<()> {
        self.stop();
        source.attach()?;
        self.source = Some(source);
        log::info!("PointSource angehängt");
        Ok(())
    }

    /// Löst die angehängte PointSource. Ohne vorheriges `start()` ein No-op.
    pub fn stop(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.detach();
            log::info!("PointSource gelöst");
        }
    }

    /// Gibt zurück, ob eine PointSource angehängt ist.
    pub fn is_running(&self) -> bool {
        self.source.is_some()
    }

    /// Holt alle Ereignisse der angehängten Quelle ab und verarbeitet sie.
    ///
    /// Gibt die Anzahl verarbeiteter Ereignisse zurück.
    pub fn poll(&mut self, state: &mut AppState) -> anyhow::Result<usize> {
        let events = match self.source.as_mut() {
            Some(source) => source.drain_events(),
            None => return Ok(0),
        };
        let count = events.len();
        for event in events {
            let intent = match event {
                PointEvent::SurfaceHit { point, attachable } => {
                    AppIntent::SurfaceHit { point, attachable }
                }
                PointEvent::AnchorResolved { ticket, point } => {
                    AppIntent::AnchorResolved { ticket, point }
                }
            };
            self.handle_intent(state, intent)?;
        }
        Ok(count)
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// `state.last_error` enthält danach den Fehler dieses Intents oder `None`.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        state.last_error = None;
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Fachliche Fehler (`AlignError`) brechen nicht ab: sie werden geloggt und
    /// in `state.last_error` abgelegt, der Zustand bleibt unverändert.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let result: Result<(), AlignError> = match command {
            // === Anker ===
            AppCommand::SelectAnchor { point } => handlers::anchor::select(state, point),
            AppCommand::RequestAnchorCreation { point } => {
                match self.source.as_deref_mut() {
                    Some(source) => handlers::anchor::request_creation(state, source, point),
                    None => log::warn!(
                        "Keine PointSource angehängt, Anker-Anfrage an {:?} verworfen",
                        point
                    ),
                }
                Ok(())
            }
            AppCommand::AcceptResolvedAnchor { ticket, point } => {
                handlers::anchor::accept_resolved(state, ticket, point)
            }

            // === Rotation ===
            AppCommand::SetRotation { angle } => handlers::rotation::set(state, angle),

            // === Templates ===
            AppCommand::SelectNextTemplate => handlers::template::next(state),
            AppCommand::SelectTemplateIndex { index } => {
                handlers::template::select_index(state, index)
            }
            AppCommand::ActivateTemplate { template } => {
                handlers::template::activate(state, template)
            }
            AppCommand::Reset => {
                handlers::template::reset(state);
                Ok(())
            }
        };

        if let Err(e) = result {
            log::warn!("{}", e);
            state.last_error = Some(e);
        }

        Ok(())
    }

    /// Baut die Kurven-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> CurveScene {
        render_scene::build(state)
    }

    /// Übergibt die aktuelle Kurven-Szene an einen Renderer.
    pub fn present(&self, state: &AppState, renderer: &mut dyn CurveRenderer) {
        renderer.render(&self.build_render_scene(state));
    }
}

impl Drop for AppController {
    fn drop(&mut self) {
        self.stop();
    }
}
