//! Detail page for one project, over the orbiting scene.

use std::fmt::Write as _;

use portfolio_core::{Locale, ProjectRecord};

use super::RenderContext;
use crate::error::Result;
use crate::html::{PageShell, SceneVariant, escape, external_link, language_tags};

pub fn render(ctx: &RenderContext<'_>, locale: Locale, record: &ProjectRecord) -> Result<String> {
    let bundle = ctx.bundle(locale)?;
    let t = bundle.translator("Project");
    let overlay = bundle.translator("Overlay");
    let config = ctx.config;

    let mut body = String::from("<main class=\"project\">\n");
    let _ = writeln!(
        body,
        r#"<nav class="back"><a href="{}"><span aria-hidden="true">←</span> {}</a></nav>"#,
        config.href(&locale.home_path()),
        escape(&t.t("back"))
    );
    body.push_str("<div class=\"project-grid\">\n<div class=\"project-visual\">\n");

    let image = record.preview_image();
    if !image.is_empty() {
        let _ = writeln!(
            body,
            r#"<div class="project-media"><img src="{}" alt="{}"></div>"#,
            escape(&config.asset_src(image)),
            escape(&record.name)
        );
    }

    body.push_str("<div class=\"actions\">");
    if let Some(homepage) = record.homepage() {
        body.push_str(&external_link(homepage, "launch", &escape(&t.t("visitSite"))));
    }
    let source_class = if record.is_deployed() {
        "source"
    } else {
        "source wide"
    };
    body.push_str(&external_link(&record.url, source_class, &escape(&t.t("viewSource"))));
    body.push_str("</div>\n</div>\n");

    let description = match record.description() {
        Some(text) => escape(text),
        None => escape(&overlay.t("noDescription")),
    };
    let _ = write!(
        body,
        "<div class=\"project-info\">\n<h1>{}</h1>\n<p class=\"description\">{}</p>\n",
        escape(&record.name),
        description
    );
    let _ = writeln!(
        body,
        "<section class=\"languages\"><h2>{}</h2><div class=\"tags\">{}</div></section>",
        escape(&t.t("languages")),
        language_tags(record.language_names(usize::MAX), "tag tag-mono")
    );
    let _ = writeln!(body, "<div class=\"repo-id\">REPO ID: {}...</div>", record.repo_id());
    body.push_str("</div>\n</div>\n</main>");

    let title = format!("{} | {}", record.name, bundle.translator("Metadata").t("title"));
    let description = record.description().unwrap_or_default().to_string();
    let shell = PageShell {
        locale,
        title: &title,
        description: &description,
        kind: "project",
        scene: Some(SceneVariant::Orbit),
    };
    Ok(shell.render(config, &body))
}
