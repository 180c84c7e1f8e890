//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SurfaceHit {
            point,
            attachable: true,
        } => vec![AppCommand::SelectAnchor { point }],
        AppIntent::SurfaceHit {
            point,
            attachable: false,
        } => vec![AppCommand::RequestAnchorCreation { point }],
        AppIntent::AnchorResolved { ticket, point } => {
            vec![AppCommand::AcceptResolvedAnchor { ticket, point }]
        }
        AppIntent::PointSelected { point } => vec![AppCommand::SelectAnchor { point }],
        AppIntent::RotationChanged { angle } => vec![AppCommand::SetRotation { angle }],
        AppIntent::NextTemplateRequested => vec![AppCommand::SelectNextTemplate],
        AppIntent::TemplateSelected { index } => vec![AppCommand::SelectTemplateIndex { index }],
        AppIntent::TemplateLoaded { template } => vec![AppCommand::ActivateTemplate { template }],
        AppIntent::ResetRequested => vec![AppCommand::Reset],
    }
}
