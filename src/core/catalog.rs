//! Template-Katalog: alle verfügbaren Pfad-Formen plus aktiver Index.

use super::{AlignError, TemplateCurve, DEGENERATE_EPSILON};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dateiformat eines Katalogs (`[[templates]]` in TOML bzw. `{"templates": […]}` in JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Templates in Anzeigereihenfolge
    pub templates: Vec<TemplateCurve>,
}

/// Geordnete, nicht-leere Sammlung validierter Templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<TemplateCurve>,
    active: usize,
    degenerate_epsilon: f64,
}

impl TemplateCatalog {
    /// Erstellt einen Katalog mit der Standard-Degenerationsschwelle.
    pub fn new(templates: Vec<TemplateCurve>) -> Result<Self, AlignError> {
        Self::with_epsilon(templates, DEGENERATE_EPSILON)
    }

    /// Erstellt einen Katalog. Das erste Template ist aktiv.
    ///
    /// Lehnt leere Listen und Templates ab, deren erste Strecke nicht länger
    /// als `degenerate_epsilon` ist. Dieselbe Schwelle gilt für `upsert()`.
    pub fn with_epsilon(
        templates: Vec<TemplateCurve>,
        degenerate_epsilon: f64,
    ) -> Result<Self, AlignError> {
        if templates.is_empty() {
            return Err(AlignError::EmptyCatalog);
        }
        for template in &templates {
            template.validate_reference(degenerate_epsilon)?;
        }
        Ok(Self {
            templates,
            active: 0,
            degenerate_epsilon,
        })
    }

    /// Lädt einen Katalog aus TOML oder JSON (Endung `.json` → JSON, sonst TOML).
    ///
    /// `degenerate_epsilon` sollte der Schwelle der Ausrichtung entsprechen
    /// (`AlignerOptions::degenerate_epsilon`).
    pub fn load_from_file(path: &Path, degenerate_epsilon: f64) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Katalog nicht lesbar: {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let file: CatalogFile = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Katalog-JSON fehlerhaft: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Katalog-TOML fehlerhaft: {}", path.display()))?
        };
        let catalog = Self::with_epsilon(file.templates, degenerate_epsilon)?;
        log::info!(
            "Template-Katalog geladen aus {}: {} Template(s)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Anzahl der Templates (immer ≥ 1).
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Immer `false`; ein Katalog enthält mindestens ein Template.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Schwelle, mit der Templates beim Aufnehmen geprüft werden.
    pub fn degenerate_epsilon(&self) -> f64 {
        self.degenerate_epsilon
    }

    /// Index des aktiven Templates.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Das aktive Template.
    pub fn active(&self) -> &TemplateCurve {
        &self.templates[self.active]
    }

    /// Template per Index.
    pub fn get(&self, index: usize) -> Option<&TemplateCurve> {
        self.templates.get(index)
    }

    /// Sucht ein Template per Name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.name() == name)
    }

    /// Namen aller Templates in Reihenfolge.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name()).collect()
    }

    /// Setzt das aktive Template per Index.
    pub fn select(&mut self, index: usize) -> Result<&TemplateCurve, AlignError> {
        if index >= self.templates.len() {
            return Err(AlignError::TemplateIndexOutOfRange {
                index,
                count: self.templates.len(),
            });
        }
        self.active = index;
        Ok(&self.templates[index])
    }

    /// Zyklisch zum nächsten Template weiterschalten.
    ///
    /// Gibt `None` zurück (und ändert nichts), wenn nur ein Template existiert.
    pub fn next(&mut self) -> Option<&TemplateCurve> {
        if self.templates.len() <= 1 {
            return None;
        }
        self.active = (self.active + 1) % self.templates.len();
        Some(&self.templates[self.active])
    }

    /// Fügt ein Template hinzu oder ersetzt eines gleichen Namens. Gibt dessen Index zurück.
    pub fn upsert(&mut self, template: TemplateCurve) -> Result<usize, AlignError> {
        template.validate_reference(self.degenerate_epsilon)?;
        if let Some(index) = self.find(template.name()) {
            self.templates[index] = template;
            Ok(index)
        } else {
            self.templates.push(template);
            Ok(self.templates.len() - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReferenceKind;
    use glam::DVec3;

    fn template(name: &str, end: f64) -> TemplateCurve {
        TemplateCurve::new(
            name,
            vec![DVec3::ZERO, DVec3::X, DVec3::new(end, 0.0, 0.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            TemplateCatalog::new(Vec::new()).unwrap_err(),
            AlignError::EmptyCatalog
        );
    }

    #[test]
    fn test_degenerate_template_rejected() {
        let bad = TemplateCurve::new("Kaputt", vec![DVec3::X, DVec3::X]).unwrap();
        assert!(TemplateCatalog::new(vec![template("A", 2.0), bad]).is_err());
    }

    #[test]
    fn test_configured_epsilon_applies_to_new_and_upsert() {
        let short = TemplateCurve::new(
            "Kurz",
            vec![DVec3::ZERO, DVec3::new(1e-4, 0.0, 0.0), DVec3::X],
        )
        .unwrap();

        assert!(TemplateCatalog::new(vec![short.clone()]).is_ok());
        assert_eq!(
            TemplateCatalog::with_epsilon(vec![short.clone()], 1e-3).unwrap_err(),
            AlignError::DegenerateReference {
                reference: ReferenceKind::Template
            }
        );

        let mut catalog = TemplateCatalog::with_epsilon(vec![template("A", 2.0)], 1e-3).unwrap();
        assert_eq!(catalog.degenerate_epsilon(), 1e-3);
        assert!(catalog.upsert(short).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut catalog =
            TemplateCatalog::new(vec![template("A", 2.0), template("B", 3.0), template("C", 4.0)])
                .unwrap();
        assert_eq!(catalog.active().name(), "A");
        assert_eq!(catalog.next().map(|t| t.name().to_owned()), Some("B".into()));
        assert_eq!(catalog.next().map(|t| t.name().to_owned()), Some("C".into()));
        assert_eq!(catalog.next().map(|t| t.name().to_owned()), Some("A".into()));
        assert_eq!(catalog.active_index(), 0);
    }

    #[test]
    fn test_next_with_single_template_is_noop() {
        let mut catalog = TemplateCatalog::new(vec![template("A", 2.0)]).unwrap();
        assert!(catalog.next().is_none());
        assert_eq!(catalog.active_index(), 0);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut catalog = TemplateCatalog::new(vec![template("A", 2.0)]).unwrap();
        assert_eq!(
            catalog.select(3).unwrap_err(),
            AlignError::TemplateIndexOutOfRange { index: 3, count: 1 }
        );
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut catalog = TemplateCatalog::new(vec![template("A", 2.0)]).unwrap();
        assert_eq!(catalog.upsert(template("B", 5.0)).unwrap(), 1);
        assert_eq!(catalog.upsert(template("A", 9.0)).unwrap(), 0);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().points()[2], DVec3::new(9.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_toml_catalog() {
        let content = r#"
            [[templates]]
            name = "Gerade"
            points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]

            [[templates]]
            name = "Bogen"
            points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.5, 0.0, 0.5], [1.5, 0.0, 1.5]]
        "#;
        let file: CatalogFile = toml::from_str(content).unwrap();
        let catalog = TemplateCatalog::new(file.templates).unwrap();
        assert_eq!(catalog.names(), vec!["Gerade", "Bogen"]);
        assert_eq!(catalog.get(1).unwrap().len(), 4);
    }
}
