//! Data model and resolution logic behind the portfolio site.
//!
//! Everything here is a pure function of build-time data: the project
//! catalog, the compiled message bundles and the caller's locale/theme.
//! Rendering lives in `site-generator` and `scene-renderer`.

pub mod catalog;
pub mod error;
pub mod locale;
pub mod lookup;
pub mod messages;
pub mod partition;
pub mod theme;

pub use catalog::{Catalog, LanguageEdge, ProjectRecord};
pub use error::PortfolioError;
pub use locale::Locale;
pub use partition::{CatalogPartition, HighlightSet};
pub use theme::{Resolution, Theme, ThemePreference};
