//! Page renderers. Each one is a pure function of the loaded catalog, the
//! message bundles and the route's locale.

pub mod not_found;
pub mod overlay;
pub mod project;
pub mod redirect;

use std::path::PathBuf;

use portfolio_core::messages::{MessageBundle, MessageCatalog};
use portfolio_core::{Catalog, CatalogPartition, Locale, PortfolioError};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::routes::{Route, RouteKind, path_to_file};

/// Read-only inputs shared by every renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub messages: &'a MessageCatalog,
    pub catalog: &'a Catalog,
    pub groups: &'a CatalogPartition<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn bundle(&self, locale: Locale) -> Result<&'a MessageBundle> {
        self.messages.bundle(locale).ok_or_else(|| {
            PortfolioError::MissingMessage {
                locale,
                key: "*".to_string(),
            }
            .into()
        })
    }
}

/// One output document.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: String,
    pub file: PathBuf,
    pub kind: RouteKind,
    pub html: String,
}

/// Renders a pre-generated route. A detail route whose record is gone
/// renders the not-found document in its place.
pub fn render_route(ctx: &RenderContext<'_>, route: &Route) -> Result<RenderedPage> {
    let html = match route {
        Route::Home(locale) => overlay::render(ctx, *locale)?,
        Route::Project { locale, name } => match ctx.catalog.find(name) {
            Some(record) => project::render(ctx, *locale, record)?,
            None => {
                tracing::warn!(%locale, name, "detail route without a catalog record");
                not_found::render(ctx, *locale)?
            }
        },
    };
    Ok(RenderedPage {
        path: route.path(),
        file: route.output_file(),
        kind: route.kind(),
        html,
    })
}

/// The pages that exist outside the enumerated routes.
pub fn render_fallbacks(ctx: &RenderContext<'_>) -> Result<Vec<RenderedPage>> {
    let not_found_path = format!("/{}", constants::site::NOT_FOUND_FILE);
    Ok(vec![
        RenderedPage {
            file: path_to_file(&not_found_path),
            path: not_found_path,
            kind: RouteKind::NotFound,
            html: not_found::render(ctx, Locale::DEFAULT)?,
        },
        RenderedPage {
            path: "/".to_string(),
            file: path_to_file("/"),
            kind: RouteKind::Redirect,
            html: redirect::render(ctx.config, Locale::DEFAULT),
        },
    ])
}
