//! Site manifest describing every file a build wrote.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::routes::RouteKind;

/// One generated document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Site-relative URL path.
    pub path: String,
    /// Output file relative to the export root, with `/` separators.
    pub file: String,
    pub kind: RouteKind,
}

/// How the catalog was split for the listing pages.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub featured: usize,
    pub deployed: usize,
    pub archived: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteManifest {
    pub base_path: String,
    pub locales: Vec<String>,
    pub project_count: usize,
    pub sections: SectionCounts,
    pub pages: Vec<ManifestEntry>,
    pub assets: Vec<String>,
    /// Files copied from the compiled scene bundle.
    pub scene_files: usize,
    /// Files copied from the public directory.
    pub public_files: usize,
}

impl SiteManifest {
    pub fn count(&self, kind: RouteKind) -> usize {
        self.pages.iter().filter(|page| page.kind == kind).count()
    }

    /// Writes `site-manifest.json` at the export root.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(constants::site::SITE_MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| SiteError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "generated site manifest");
        self.log_summary();
        Ok(path)
    }

    fn log_summary(&self) {
        tracing::info!(
            home = self.count(RouteKind::Home),
            project = self.count(RouteKind::Project),
            featured = self.sections.featured,
            deployed = self.sections.deployed,
            archived = self.sections.archived,
            "pages"
        );
        if self.scene_files == 0 {
            tracing::warn!("no scene bundle copied; pages will show no background");
        } else {
            tracing::info!(files = self.scene_files, "scene bundle");
        }
    }
}

/// Path rendered with forward slashes regardless of platform.
pub fn portable_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_read_back_with_their_kind() {
        let json = r#"{"path": "/404.html", "file": "404.html", "kind": "not_found"}"#;
        let entry: ManifestEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, RouteKind::NotFound);
        assert!(serde_json::to_string(&entry).unwrap().contains("\"not_found\""));
    }

    #[test]
    fn manifest_survives_a_write_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = SiteManifest {
            base_path: String::new(),
            locales: vec!["en".into(), "ja".into()],
            project_count: 1,
            sections: SectionCounts {
                featured: 0,
                deployed: 1,
                archived: 0,
            },
            pages: vec![ManifestEntry {
                path: "/en/".into(),
                file: "en/index.html".into(),
                kind: RouteKind::Home,
            }],
            assets: vec!["assets/site.css".into()],
            scene_files: 0,
            public_files: 0,
        };
        let path = manifest.write(dir.path()).unwrap();
        let reloaded: SiteManifest =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(reloaded, manifest);
    }
}
