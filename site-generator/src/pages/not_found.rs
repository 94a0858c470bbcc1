use portfolio_core::Locale;

use super::RenderContext;
use crate::error::Result;
use crate::html::{PageShell, escape};

/// Served for unsupported locales and unknown project names. It carries no
/// scene, so it renders even where the scene bundle was not deployed.
pub fn render(ctx: &RenderContext<'_>, locale: Locale) -> Result<String> {
    let t = ctx.bundle(locale)?.translator("NotFound");
    let title = t.t("title");
    let body = format!(
        "<main class=\"not-found\">\n<h1>404</h1>\n<h2>{}</h2>\n<p>{}</p>\n<a href=\"{}\" class=\"chip\">{}</a>\n</main>",
        escape(&title),
        escape(&t.t("message")),
        ctx.config.href(&locale.home_path()),
        escape(&t.t("home")),
    );
    let shell = PageShell {
        locale,
        title: &title,
        description: &title,
        kind: "not-found",
        scene: None,
    };
    Ok(shell.render(ctx.config, &body))
}
