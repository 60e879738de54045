//! Project catalog.
//!
//! The catalog is a JSON resource deserialised once at startup. The
//! built-in copy is embedded into the binary; a file on disk can replace it.
//!
//! ```ignore
//! let catalog = Catalog::builtin()?;
//! if let Some(project) = catalog.lookup("beat-by-beat") {
//!     println!("{} - {}", project.title, project.subtitle);
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Catalog shipped with the application.
const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// A single project shown on a card and in the detail modal.
///
/// The four sequence fields are always present after deserialisation;
/// a record that omits one gets an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    /// Display label such as "Live" or "In Development"
    pub status: String,
    pub start_date: String,
    /// Single glyph used as the project icon
    pub image: String,
    /// Cards marked coming-soon never open the modal
    #[serde(default)]
    pub coming_soon: bool,
}

/// Read-only set of project records keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records, rejecting empty or duplicate ids.
    pub fn from_records(records: Vec<ProjectRecord>) -> PortfolioResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(PortfolioError::Catalog(format!(
                    "project at position {} has an empty id",
                    position
                )));
            }
            if index.insert(record.id.clone(), position).is_some() {
                return Err(PortfolioError::Catalog(format!(
                    "duplicate project id: {}",
                    record.id
                )));
            }
        }
        Ok(Self { records, index })
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a catalog file from disk.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.len(),
            "Loaded project catalog"
        );
        Ok(catalog)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> PortfolioResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load from `path` when given, falling back to the built-in catalog.
    ///
    /// A broken override is logged rather than surfaced.
    pub fn load_or_builtin(path: Option<&Path>) -> PortfolioResult<Self> {
        if let Some(path) = path {
            match Self::load(path) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    tracing::error!(
                        path = %path.display(),
                        "Failed to load catalog, using built-in: {}",
                        e
                    );
                }
            }
        }
        Self::builtin()
    }

    /// Look up a record by id.
    pub fn lookup(&self, id: &str) -> Option<&ProjectRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: "Title".to_string(),
            subtitle: "Subtitle".to_string(),
            description: "Description".to_string(),
            features: vec![],
            technologies: vec![],
            challenges: vec![],
            outcomes: vec![],
            status: "Live".to_string(),
            start_date: "July 2024".to_string(),
            image: "🌸".to_string(),
            coming_soon: false,
        }
    }

    #[test]
    fn builtin_catalog_has_every_project() {
        let catalog = Catalog::builtin().unwrap();
        for id in ["beat-by-beat", "portfolio", "color-palette", "learning-tracker"] {
            let project = catalog.lookup(id).unwrap();
            assert!(!project.coming_soon);
            assert!(!project.features.is_empty());
            assert!(!project.technologies.is_empty());
        }
        assert_eq!(catalog.lookup("portfolio").unwrap().image, "🌸");
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let json = r#"[{
            "id": "x", "title": "X", "subtitle": "", "description": "",
            "status": "Coming Soon", "start_date": "TBD", "image": "✨"
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let x = catalog.lookup("x").unwrap();
        assert!(x.features.is_empty());
        assert!(x.outcomes.is_empty());
        assert!(!x.coming_soon);
    }

    #[test]
    fn lookup_unknown_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.lookup("does-not-exist").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_records(vec![record("a"), record("a")]).unwrap_err();
        assert!(err.to_string().contains("duplicate project id: a"));
    }

    #[test]
    fn rejects_empty_id() {
        assert!(Catalog::from_records(vec![record("  ")]).is_err());
    }

    #[test]
    fn preserves_order() {
        let catalog = Catalog::from_records(vec![record("b"), record("a")]).unwrap();
        let ids: Vec<_> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn load_or_builtin_falls_back_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let catalog = Catalog::load_or_builtin(Some(&path)).unwrap();
        assert!(catalog.lookup("beat-by-beat").is_some());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, serde_json::to_string(&vec![record("solo")]).unwrap()).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.lookup("solo").is_some());
    }
}
