/// Project names promoted to the featured section, in no particular order.
pub const HIGHLIGHTS: &[&str] = &["pazuru-pico", "aibou", "video-clipper"];

/// Locale codes the site is generated for. The first entry is the default.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja"];

pub const DEFAULT_LOCALE: &str = "en";

/// Languages shown per record in each section of the overlay.
pub const FEATURED_LANGUAGE_LIMIT: usize = 4;
pub const ARCHIVED_LANGUAGE_LIMIT: usize = 2;

/// Characters of the base64-encoded source url shown as the repo id.
pub const REPO_ID_LENGTH: usize = 12;

/// Default locations relative to the workspace root.
pub const DEFAULT_CATALOG_PATH: &str = "data/repos.json";
pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Key under which the theme preference is persisted in browser storage.
pub const THEME_STORAGE_KEY: &str = "theme";

pub const SITE_MANIFEST_FILE: &str = "site-manifest.json";
pub const NOT_FOUND_FILE: &str = "404.html";

/// Directory (under the output root) holding the compiled scene iframe.
pub const SCENE_DIR: &str = "scene";
