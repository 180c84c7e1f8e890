//! Zentrale Konfiguration der Ausrichtungs-Engine.
//!
//! `AlignerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::OverflowPolicy;
use serde::{Deserialize, Serialize};

// ── Ausrichtung ─────────────────────────────────────────────────────

/// Toleranz für die Anker-Passprüfung nach jeder Ausrichtung (Welteinheiten).
pub const FIT_TOLERANCE: f64 = 1e-5;
/// Streckenlänge, ab der eine Referenz als degeneriert gilt.
pub const DEGENERATE_EPSILON: f64 = crate::core::DEGENERATE_EPSILON;

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "anchor_path_aligner.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `anchor_path_aligner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignerOptions {
    /// Verhalten bei einem dritten Ankerpunkt
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
    /// Toleranz der Anker-Passprüfung
    #[serde(default = "default_fit_tolerance")]
    pub fit_tolerance: f64,
    /// Schwelle für degenerierte Referenzstrecken
    #[serde(default = "default_degenerate_epsilon")]
    pub degenerate_epsilon: f64,
    /// Katalog-Datei, die beim Start geladen wird
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
    /// Name des beim Start aktiven Templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_template: Option<String>,
}

impl Default for AlignerOptions {
    fn default() -> Self {
        Self {
            overflow_policy: OverflowPolicy::default(),
            fit_tolerance: FIT_TOLERANCE,
            degenerate_epsilon: DEGENERATE_EPSILON,
            catalog_path: None,
            start_template: None,
        }
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Serde-Default für `fit_tolerance`.
fn default_fit_tolerance() -> f64 {
    FIT_TOLERANCE
}

/// Serde-Default für `degenerate_epsilon`.
fn default_degenerate_epsilon() -> f64 {
    DEGENERATE_EPSILON
}

impl AlignerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt ungültige Schwellwerte (nicht endlich oder ≤ 0) durch die Standardwerte.
    pub fn sanitized(mut self) -> Self {
        if !is_positive_finite(self.fit_tolerance) {
            log::warn!(
                "fit_tolerance = {} ungültig, verwende Standardwert {}",
                self.fit_tolerance,
                FIT_TOLERANCE
            );
            self.fit_tolerance = FIT_TOLERANCE;
        }
        if !is_positive_finite(self.degenerate_epsilon) {
            log::warn!(
                "degenerate_epsilon = {} ungültig, verwende Standardwert {}",
                self.degenerate_epsilon,
                DEGENERATE_EPSILON
            );
            self.degenerate_epsilon = DEGENERATE_EPSILON;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("anchor_path_aligner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }
}
