//! The listing page: hero, featured showcase, deployed grid and archives laid
//! over the scroll-driven scene.

use std::fmt::Write as _;

use constants::site::{ARCHIVED_LANGUAGE_LIMIT, FEATURED_LANGUAGE_LIMIT};
use portfolio_core::lookup::project_path;
use portfolio_core::messages::Translator;
use portfolio_core::{Locale, ProjectRecord};

use super::RenderContext;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::html::{PageShell, SceneVariant, escape, external_link, language_tags};

pub fn render(ctx: &RenderContext<'_>, locale: Locale) -> Result<String> {
    let bundle = ctx.bundle(locale)?;
    let meta = bundle.translator("Metadata");
    let t = bundle.translator("Overlay");
    let config = ctx.config;

    let mut body = String::new();
    body.push_str("<main class=\"overlay\">\n");
    body.push_str(&toggles(config, locale));
    body.push_str(&hero(&t));
    body.push_str(&featured(config, &t, locale, &ctx.groups.featured));
    body.push_str(&deployed(config, &t, &ctx.groups.deployed));
    body.push_str(&archives(&t, &ctx.groups.archived));
    let _ = writeln!(body, "<footer class=\"footer\">{}</footer>", escape(&t.t("footer")));
    body.push_str("</main>");

    let title = meta.t("title");
    let description = meta.t("description");
    let shell = PageShell {
        locale,
        title: &title,
        description: &description,
        kind: "home",
        scene: Some(SceneVariant::Scroll),
    };
    Ok(shell.render(config, &body))
}

/// Theme toggle and locale switcher. The toggle ships hidden with no label:
/// the preference is only known once the session theme has resolved.
fn toggles(config: &SiteConfig, current: Locale) -> String {
    let mut html = String::from("<nav class=\"toggles\">\n");
    html.push_str(
        "<button type=\"button\" class=\"chip theme-toggle\" data-theme-toggle hidden></button>\n",
    );
    html.push_str("<div class=\"locales\">");
    for locale in Locale::ALL {
        let current_attr = if locale == current {
            r#" aria-current="page""#
        } else {
            ""
        };
        let _ = write!(
            html,
            r#"<a href="{}" class="chip" hreflang="{}"{}>{}</a>"#,
            config.href(&locale.home_path()),
            locale.as_str(),
            current_attr,
            locale.switcher_label()
        );
    }
    html.push_str("</div>\n</nav>\n");
    html
}

fn hero(t: &Translator<'_>) -> String {
    format!(
        "<section class=\"hero\">\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n<div class=\"scroll-hint\">{}</div>\n</section>\n",
        escape(&t.t("title")),
        escape(&t.t("subtitle")),
        escape(&t.t("scrollHint")),
    )
}

fn description(t: &Translator<'_>, record: &ProjectRecord) -> String {
    match record.description() {
        Some(text) => escape(text),
        None => escape(&t.t("noDescription")),
    }
}

fn preview(config: &SiteConfig, record: &ProjectRecord) -> String {
    let src = record.preview_image();
    if src.is_empty() {
        return String::new();
    }
    format!(
        r#"<img src="{}" alt="{}" loading="lazy">"#,
        escape(&config.asset_src(src)),
        escape(&record.name)
    )
}

/// Alternating showcase rows; the title opens the detail page.
fn featured(
    config: &SiteConfig,
    t: &Translator<'_>,
    locale: Locale,
    records: &[&ProjectRecord],
) -> String {
    let mut html = format!(
        "<section class=\"featured\">\n<h2>{}</h2>\n<div class=\"featured-list\">\n",
        escape(&t.t("featured"))
    );
    for (i, record) in records.iter().enumerate() {
        let side = if i % 2 == 0 { "row" } else { "row-reverse" };
        let _ = write!(
            html,
            "<article class=\"featured-item {side}\">\n<div class=\"featured-media\">{}</div>\n<div class=\"featured-info\">\n",
            preview(config, record)
        );
        let _ = writeln!(
            html,
            r#"<h3><a href="{}">{}</a></h3>"#,
            config.href(&project_path(locale, &record.name)),
            escape(&record.name)
        );
        let _ = writeln!(html, "<p class=\"description\">{}</p>", description(t, record));
        let _ = writeln!(
            html,
            "<div class=\"tags\">{}</div>",
            language_tags(record.language_names(FEATURED_LANGUAGE_LIMIT), "tag")
        );
        let _ = writeln!(
            html,
            "<div class=\"actions\">{}</div>",
            external_link(record.primary_link(), "launch", &escape(&t.t("launch")))
        );
        html.push_str("</div>\n</article>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn deployed(config: &SiteConfig, t: &Translator<'_>, records: &[&ProjectRecord]) -> String {
    let mut html = format!(
        "<section class=\"deployed\">\n<h2>{}</h2>\n<div class=\"grid grid-3\">\n",
        escape(&t.t("deployed"))
    );
    for record in records {
        let card = format!(
            "{}<div class=\"card-body\"><h3>{}</h3><p class=\"description\">{}</p></div>",
            preview(config, record),
            escape(&record.name),
            description(t, record)
        );
        // Deployed records always have a homepage; fall back to the source anyway.
        html.push_str(&external_link(record.primary_link(), "card", &card));
        html.push('\n');
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn archives(t: &Translator<'_>, records: &[&ProjectRecord]) -> String {
    let mut html = format!(
        "<section class=\"archives\">\n<h2>{}</h2>\n<div class=\"grid grid-4\">\n",
        escape(&t.t("libs"))
    );
    for record in records {
        let card = format!(
            "<h3>{}</h3><p class=\"description\">{}</p><div class=\"tags\">{}</div>",
            escape(&record.name),
            description(t, record),
            language_tags(record.language_names(ARCHIVED_LANGUAGE_LIMIT), "tag tag-small")
        );
        html.push_str(&external_link(&record.url, "archive", &card));
        html.push('\n');
    }
    html.push_str("</div>\n</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::messages::MessageCatalog;
    use portfolio_core::partition::partition;
    use portfolio_core::{Catalog, HighlightSet, LanguageEdge};

    fn record(name: &str, homepage: &str, description: &str) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            description: Some(description.to_string()),
            url: format!("https://github.com/hamzaabamboo/{name}"),
            homepage_url: Some(homepage.to_string()),
            stargazer_count: Some(3),
            languages: ["TypeScript", "CSS", "HTML", "Rust", "Go"]
                .iter()
                .map(|l| LanguageEdge::new(l, 10))
                .collect(),
            open_graph_image_url: format!("https://og.example/{name}.png"),
            screenshot_path: None,
        }
    }

    fn render_home(catalog: &Catalog, locale: Locale) -> String {
        let config = SiteConfig::default();
        let messages = MessageCatalog::builtin().unwrap();
        let groups = partition(catalog, &HighlightSet::default());
        let ctx = RenderContext {
            config: &config,
            messages: &messages,
            catalog,
            groups: &groups,
        };
        render(&ctx, locale).unwrap()
    }

    #[test]
    fn featured_record_uses_fallback_description_and_launches_homepage() {
        let catalog = Catalog::new(vec![
            record("pazuru-pico", "https://pico.example", ""),
            record("some-lib", "", "A <small> library"),
        ])
        .unwrap();
        let html = render_home(&catalog, Locale::En);

        assert!(html.contains("<h2>Featured</h2>"));
        assert!(html.contains(r#"<a href="/en/project/pazuru-pico/">pazuru-pico</a>"#));
        assert!(html.contains("No description provided."));
        assert!(html.contains(r#"href="https://pico.example" class="launch""#));
        assert!(html.contains("A &lt;small&gt; library"));
        assert!(html.contains(r#"href="https://github.com/hamzaabamboo/some-lib" class="archive""#));
    }

    #[test]
    fn language_chips_are_truncated_per_section() {
        let catalog = Catalog::new(vec![
            record("aibou", "https://aibou.example", "x"),
            record("lib", "", "y"),
        ])
        .unwrap();
        let html = render_home(&catalog, Locale::En);
        let featured = html.split("<section class=\"deployed\">").next().unwrap();
        assert!(featured.contains(">Rust</span>"));
        assert!(!featured.contains(">Go</span>"));

        let archives = html.split("<section class=\"archives\">").nth(1).unwrap();
        assert!(archives.contains(">CSS</span>"));
        assert!(!archives.contains(">HTML</span>"));
    }

    #[test]
    fn headings_follow_locale_and_toggle_starts_hidden() {
        let catalog = Catalog::new(vec![record("x", "https://x", "d")]).unwrap();
        let html = render_home(&catalog, Locale::Ja);
        assert!(html.contains("<h2>公開中のアプリ</h2>"));
        assert!(html.contains("data-theme-toggle hidden"));
        assert!(html.contains(r#"href="/ja/" class="chip" hreflang="ja" aria-current="page">JP</a>"#));
        assert!(html.contains("?variant=scroll"));
    }

    #[test]
    fn screenshot_takes_precedence_over_open_graph_image() {
        let mut shot = record("video-clipper", "https://v", "d");
        shot.screenshot_path = Some("/screenshots/video_clipper.png".to_string());
        let catalog = Catalog::new(vec![shot]).unwrap();
        let html = render_home(&catalog, Locale::En);
        assert!(html.contains(r#"src="/screenshots/video_clipper.png""#));
        assert!(!html.contains("og.example/video-clipper"));
    }
}
