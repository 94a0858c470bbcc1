//! The static routing surface: which pages exist and what a path resolves to.

use std::path::PathBuf;

use portfolio_core::lookup::{detail_static_params, home_static_params, project_path};
use portfolio_core::{Catalog, Locale, ProjectRecord};
use serde::{Deserialize, Serialize};

/// A pre-generated page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home(Locale),
    Project { locale: Locale, name: String },
}

/// Page family, as recorded in the site manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Home,
    Project,
    NotFound,
    Redirect,
}

impl Route {
    pub fn locale(&self) -> Locale {
        match self {
            Route::Home(locale) | Route::Project { locale, .. } => *locale,
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Home(_) => RouteKind::Home,
            Route::Project { .. } => RouteKind::Project,
        }
    }

    /// Site-relative URL path with a trailing slash.
    pub fn path(&self) -> String {
        match self {
            Route::Home(locale) => locale.home_path(),
            Route::Project { locale, name } => project_path(*locale, name),
        }
    }

    /// Output file relative to the export root.
    pub fn output_file(&self) -> PathBuf {
        path_to_file(&self.path())
    }
}

/// `/a/b/` -> `a/b/index.html`; `/x.html` stays a file.
pub fn path_to_file(path: &str) -> PathBuf {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() || trimmed.ends_with('/') {
        PathBuf::from(format!("{trimmed}index.html"))
    } else if trimmed.rsplit('/').next().is_some_and(|last| last.contains('.')) {
        PathBuf::from(trimmed)
    } else {
        PathBuf::from(format!("{trimmed}/index.html"))
    }
}

/// Every page generated for `catalog`: all home pages, then every detail page
/// locale-major.
pub fn static_routes(catalog: &Catalog) -> Vec<Route> {
    home_static_params()
        .into_iter()
        .map(Route::Home)
        .chain(
            detail_static_params(catalog)
                .into_iter()
                .map(|params| Route::Project {
                    locale: params.locale,
                    name: params.name,
                }),
        )
        .collect()
}

/// What a request path would be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// The bare root, which redirects to the default locale.
    Root,
    Home(Locale),
    Project {
        locale: Locale,
        record: &'a ProjectRecord,
    },
    NotFound,
}

/// Resolves a path the way the static export serves it. The locale segment
/// is strict here: an unsupported locale is not found rather than falling
/// back.
pub fn resolve_path<'a>(catalog: &'a Catalog, path: &str) -> RouteMatch<'a> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_suffix("index.html").unwrap_or(path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => RouteMatch::Root,
        [segment] => match Locale::from_route_segment(segment) {
            Some(locale) => RouteMatch::Home(locale),
            None => RouteMatch::NotFound,
        },
        [segment, "project", name] => {
            let Some(locale) = Locale::from_route_segment(segment) else {
                return RouteMatch::NotFound;
            };
            match catalog.find(name) {
                Some(record) => RouteMatch::Project { locale, record },
                None => RouteMatch::NotFound,
            }
        }
        _ => RouteMatch::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn output_files_follow_directory_index_layout() {
        assert_eq!(Route::Home(Locale::En).output_file(), PathBuf::from("en/index.html"));
        let detail = Route::Project {
            locale: Locale::Ja,
            name: "aibou".to_string(),
        };
        assert_eq!(detail.output_file(), PathBuf::from("ja/project/aibou/index.html"));
        assert_eq!(path_to_file("/404.html"), PathBuf::from("404.html"));
        assert_eq!(path_to_file("/"), PathBuf::from("index.html"));
        assert_eq!(path_to_file("/en"), PathBuf::from("en/index.html"));
    }
}
