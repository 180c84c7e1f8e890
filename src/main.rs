//! Anchor Path Aligner (Headless-Runner).
//!
//! Lädt einen Template-Katalog, spielt eine Intent-Sitzung (JSON) ab und
//! gibt die resultierende Kurven-Szene als JSON auf stdout aus.

use anchor_path_aligner::{
    AlignerOptions, AppController, AppIntent, AppState, QueuedPointSource, TemplateCatalog,
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anchor-path-aligner")]
#[command(about = "Richtet Template-Kurven an zwei Weltankern aus")]
#[command(version)]
struct Cli {
    /// Template-Katalog (.toml oder .json), sonst `catalog_path` aus den Optionen
    catalog: Option<PathBuf>,

    /// Sitzung als JSON-Array von Intents
    #[arg(long)]
    session: Option<PathBuf>,

    /// Options-Datei (Standard: neben der Executable)
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Anchor Path Aligner v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let options_path = cli.options.unwrap_or_else(AlignerOptions::config_path);
    let options = AlignerOptions::load_from_file(&options_path);

    let catalog_path = cli
        .catalog
        .or_else(|| options.catalog_path.as_ref().map(PathBuf::from))
        .context("Kein Katalog angegeben (Argument oder catalog_path in den Optionen)")?;
    let catalog = TemplateCatalog::load_from_file(&catalog_path, options.degenerate_epsilon)?;
    log::info!("{} Templates geladen: {:?}", catalog.len(), catalog.names());

    let mut state = AppState::with_options(catalog, options);
    let mut controller = AppController::new();
    controller.start(Box::new(QueuedPointSource::auto_resolving()))?;

    if let Some(session) = cli.session {
        let intents = load_session(&session)?;
        log::info!("Spiele {} Intents aus {:?} ab", intents.len(), session);
        for intent in intents {
            controller.handle_intent(&mut state, intent)?;
            // Asynchron angeforderte Anker sofort zustellen
            controller.poll(&mut state)?;
            if let Some(e) = &state.last_error {
                log::warn!("Intent nicht angewendet: {}", e);
            }
        }
    }

    controller.stop();
    log::info!("{} Commands ausgeführt", state.command_log.len());
    if let Some(last) = state.command_log.entries().last() {
        log::debug!("Letzter Command: {:?}", last);
    }

    let scene = controller.build_render_scene(&state);
    let json = serde_json::to_string_pretty(&scene).context("Szene nicht serialisierbar")?;
    println!("{}", json);
    Ok(())
}

fn load_session(path: &std::path::Path) -> anyhow::Result<Vec<AppIntent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Sitzung nicht lesbar: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Sitzung ungültig: {}", path.display()))
}
