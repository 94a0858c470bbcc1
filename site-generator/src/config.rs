use std::path::PathBuf;

use constants::site::{DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_DIR};
use portfolio_core::HighlightSet;

/// Inputs and output location for one site build.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// The static `repos.json` asset.
    pub catalog_path: PathBuf,
    /// Root of the static export.
    pub output_dir: PathBuf,
    /// Compiled scene bundle (trunk `dist`) copied under `scene/`, if any.
    pub scene_dir: Option<PathBuf>,
    /// Public directory (screenshots and other static files) copied verbatim.
    pub public_dir: Option<PathBuf>,
    /// Prefix for every absolute link when hosted below the domain root.
    pub base_path: String,
    pub highlights: HighlightSet,
    /// Fail the build instead of warning when an internal link is dangling.
    pub strict_links: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            scene_dir: None,
            public_dir: None,
            base_path: String::new(),
            highlights: HighlightSet::default(),
            strict_links: false,
        }
    }
}

impl SiteConfig {
    /// Normalises a base path to either `""` or `/segment[/segment...]`.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        self.base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        self
    }

    /// Absolute link for a site-relative path starting with `/`.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }

    /// Image or asset source: site-relative paths get the base prefix,
    /// anything else (remote urls) is used verbatim.
    pub fn asset_src(&self, src: &str) -> String {
        if src.starts_with('/') && !src.starts_with("//") {
            self.href(src)
        } else {
            src.to_string()
        }
    }

    /// Site-relative path for an absolute link, if it belongs to this site.
    pub fn strip_base<'a>(&self, href: &'a str) -> Option<&'a str> {
        if !href.starts_with('/') || href.starts_with("//") {
            return None;
        }
        if self.base_path.is_empty() {
            return Some(href);
        }
        href.strip_prefix(self.base_path.as_str())
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalised() {
        assert_eq!(SiteConfig::default().with_base_path("/").base_path, "");
        assert_eq!(SiteConfig::default().with_base_path("portfolio/").base_path, "/portfolio");
    }

    #[test]
    fn hrefs_round_trip_through_base() {
        let config = SiteConfig::default().with_base_path("portfolio");
        let href = config.href("/en/");
        assert_eq!(href, "/portfolio/en/");
        assert_eq!(config.strip_base(&href), Some("/en/"));
        assert_eq!(config.strip_base("/portfolioextra/en/"), None);
        assert_eq!(config.strip_base("https://example.com/"), None);
        assert_eq!(config.strip_base("//cdn.example.com/x"), None);
    }

    #[test]
    fn remote_assets_are_untouched() {
        let config = SiteConfig::default().with_base_path("portfolio");
        assert_eq!(config.asset_src("/screenshots/a.png"), "/portfolio/screenshots/a.png");
        assert_eq!(config.asset_src("https://img/x.png"), "https://img/x.png");
    }
}
