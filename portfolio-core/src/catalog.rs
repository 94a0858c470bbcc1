//! The repository catalog: an ordered, read-only list of project records
//! loaded from the static `repos.json` asset.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Language usage entry, shaped like the GraphQL edges the data was exported from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEdge {
    pub size: u64,
    pub node: LanguageNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageNode {
    pub name: String,
}

impl LanguageEdge {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            size,
            node: LanguageNode {
                name: name.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.node.name
    }
}

/// One project as exported from the source host. Optional fields keep the
/// exact JSON shape (`""` and `null` survive a round trip) so the screenshot
/// updater can rewrite the asset without churn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stargazer_count: Option<u32>,
    #[serde(default)]
    pub languages: Vec<LanguageEdge>,
    #[serde(default)]
    pub open_graph_image_url: String,
    #[serde(default)]
    pub screenshot_path: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl ProjectRecord {
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Live deployment link. Its presence decides deployed vs archived.
    pub fn homepage(&self) -> Option<&str> {
        non_empty(&self.homepage_url)
    }

    pub fn is_deployed(&self) -> bool {
        self.homepage().is_some()
    }

    /// Locally captured screenshot when present, otherwise the Open Graph image.
    pub fn preview_image(&self) -> &str {
        non_empty(&self.screenshot_path).unwrap_or(&self.open_graph_image_url)
    }

    /// Where the primary call to action points: the deployment, or the source.
    pub fn primary_link(&self) -> &str {
        self.homepage().unwrap_or(&self.url)
    }

    /// First `limit` language names in catalog order.
    pub fn language_names(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.languages.iter().take(limit).map(LanguageEdge::name)
    }

    /// Short opaque identifier derived from the source url.
    pub fn repo_id(&self) -> String {
        let encoded = STANDARD.encode(self.url.as_bytes());
        encoded
            .chars()
            .take(constants::site::REPO_ID_LENGTH)
            .collect()
    }
}

/// Repository-style names only: ASCII alphanumerics, `-`, `_` and `.`,
/// never `.` or `..` on their own.
pub fn is_route_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Ordered project records with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Builds a catalog. Names double as routing keys and output directory
    /// names, so each must be unique and a safe path segment.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !is_route_segment(&record.name) {
                return Err(PortfolioError::InvalidName(record.name.clone()));
            }
            if !seen.insert(record.name.as_str()) {
                return Err(PortfolioError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| PortfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            records = catalog.len(),
            "loaded project catalog"
        );
        Ok(catalog)
    }

    /// Pretty JSON in the same shape the catalog was loaded from.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ProjectRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"[
      {
        "name": "pazuru-pico",
        "description": "Puyo-puyo game",
        "url": "http://github.com/hamzaabamboo/pazuru-pico",
        "homepageUrl": "https://hamzaabamboo.github.io/pazuru-pico",
        "stargazerCount": 3,
        "languages": [
          {"size": 100, "node": {"name": "TypeScript"}},
          {"size": 20, "node": {"name": "CSS"}}
        ],
        "openGraphImageUrl": "img.png",
        "screenshotPath": "/screenshots/pazuru-pico.png"
      },
      {
        "name": "some-lib",
        "description": null,
        "url": "http://github.com/lib",
        "homepageUrl": "",
        "languages": [],
        "openGraphImageUrl": "img.png",
        "screenshotPath": null
      }
    ]"#;

    #[test]
    fn parses_exported_shape() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let pico = &catalog.records()[0];
        assert!(pico.is_deployed());
        assert_eq!(pico.preview_image(), "/screenshots/pazuru-pico.png");
        assert_eq!(pico.language_names(1).collect::<Vec<_>>(), vec!["TypeScript"]);
        assert_eq!(pico.stargazer_count, Some(3));

        let lib = &catalog.records()[1];
        assert!(!lib.is_deployed());
        assert_eq!(lib.description(), None);
        assert_eq!(lib.preview_image(), "img.png");
        assert_eq!(lib.primary_link(), "http://github.com/lib");
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Catalog::new(vec![record("a", ""), record("a", "https://a")]).unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateName(name) if name == "a"));
    }

    #[test]
    fn rejects_names_that_escape_their_route() {
        for name in ["..", ".", "a/b", "", "x y", "../etc", "a\\b", "q?x"] {
            let err = Catalog::new(vec![record(name, "")]).unwrap_err();
            assert!(
                matches!(err, PortfolioError::InvalidName(ref n) if n == name),
                "{name:?} accepted"
            );
        }
        assert!(Catalog::new(vec![record("pazuru.pico_v2-x", "")]).is_ok());
    }

    #[test]
    fn blank_screenshot_falls_back_to_open_graph() {
        let mut r = record("x", "");
        r.screenshot_path = Some(String::new());
        assert_eq!(r.preview_image(), "https://og.example/x.png");
    }

    #[test]
    fn round_trip_keeps_explicit_nulls() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let json = catalog.to_json_pretty().unwrap();
        assert!(json.contains("\"screenshotPath\": null"));
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }

    #[test]
    fn repo_id_is_base64_prefix() {
        let r = record("aibou", "");
        // base64("https://github.com/...") starts with "aHR0cHM6Ly9n"
        assert_eq!(r.repo_id(), "aHR0cHM6Ly9n");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, PortfolioError::Io { .. }));
    }
}
