//! Shared page shell and the small amount of HTML plumbing the pages need.

use std::fmt::Write as _;

use portfolio_core::Locale;

use crate::assets::theme_boot_script;
use crate::config::SiteConfig;

/// Escapes text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Motion variant of the background scene embedded in a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneVariant {
    /// Storm follows scroll progress, camera follows the pointer.
    Scroll,
    /// Camera circles the origin on its own.
    Orbit,
}

impl SceneVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            SceneVariant::Scroll => "scroll",
            SceneVariant::Orbit => "orbit",
        }
    }
}

/// Everything the shell needs besides the page body.
#[derive(Debug, Clone)]
pub struct PageShell<'a> {
    pub locale: Locale,
    pub title: &'a str,
    pub description: &'a str,
    /// Extra class on `<body>` used by the stylesheet.
    pub kind: &'a str,
    pub scene: Option<SceneVariant>,
}

impl PageShell<'_> {
    /// Full document around `body`. The markup starts unresolved; the inline
    /// head script resolves the session theme before the body paints.
    pub fn render(&self, config: &SiteConfig, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + 1024);
        html.push_str("<!DOCTYPE html>\n");
        let _ = writeln!(
            html,
            r#"<html lang="{}" data-theme-state="unresolved">"#,
            self.locale.as_str()
        );
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(html, "<script>{}</script>", theme_boot_script());
        let _ = writeln!(html, "<title>{}</title>", escape(self.title));
        let _ = writeln!(
            html,
            r#"<meta name="description" content="{}">"#,
            escape(self.description)
        );
        let _ = writeln!(
            html,
            r#"<link rel="stylesheet" href="{}">"#,
            config.href("/assets/site.css")
        );
        let _ = writeln!(
            html,
            r#"<script src="{}" defer></script>"#,
            config.href("/assets/bridge.js")
        );
        html.push_str("</head>\n");
        let _ = writeln!(html, r#"<body class="page page-{}">"#, self.kind);
        if let Some(variant) = self.scene {
            let _ = writeln!(
                html,
                r#"<iframe class="scene" src="{}?variant={}" title="" aria-hidden="true" tabindex="-1"></iframe>"#,
                config.href(&format!("/{}/index.html", constants::site::SCENE_DIR)),
                variant.as_str()
            );
        }
        html.push_str(body);
        html.push_str("\n</body>\n</html>\n");
        html
    }
}

/// Link that leaves the site in a new tab.
pub fn external_link(href: &str, class: &str, content: &str) -> String {
    format!(
        r#"<a href="{}" class="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape(href),
        class,
        content
    )
}

/// Language chips in catalog order.
pub fn language_tags<'a>(names: impl Iterator<Item = &'a str>, class: &str) -> String {
    let mut tags = String::new();
    for name in names {
        let _ = write!(tags, r#"<span class="{}">{}</span>"#, class, escape(name));
    }
    tags
}

/// Every `href` and `src` attribute value in a document, in document order,
/// unescaped only for `&amp;`.
pub fn link_targets(html: &str) -> Vec<String> {
    const NEEDLES: [&str; 2] = [" href=\"", " src=\""];
    let mut found = Vec::new();
    let mut rest = html;
    loop {
        let next = NEEDLES
            .iter()
            .filter_map(|needle| rest.find(needle).map(|at| (at, needle.len())))
            .min();
        let Some((start, len)) = next else {
            break;
        };
        rest = &rest[start + len..];
        let Some(end) = rest.find('"') else {
            break;
        };
        found.push(rest[..end].replace("&amp;", "&"));
        rest = &rest[end + 1..];
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("プロジェクト"), "プロジェクト");
    }

    #[test]
    fn shell_starts_unresolved_and_embeds_scene() {
        let config = SiteConfig::default().with_base_path("/folio");
        let shell = PageShell {
            locale: Locale::Ja,
            title: "t",
            description: "d",
            kind: "home",
            scene: Some(SceneVariant::Orbit),
        };
        let html = shell.render(&config, "<main></main>");
        assert!(html.contains(r#"<html lang="ja" data-theme-state="unresolved">"#));
        assert!(html.contains("/folio/scene/index.html?variant=orbit"));
        assert!(html.contains(r#"href="/folio/assets/site.css""#));

        let head = html.split("</head>").next().unwrap();
        assert!(head.contains("window.portfolioTheme"));
        assert!(head.contains(r#"localStorage.getItem(storageKey)"#));
    }

    #[test]
    fn collects_link_targets_in_document_order() {
        let html = r#"<a href="/en/">x</a><iframe class="scene" src="/scene/index.html?variant=scroll"></iframe><link href="/a.css"><img data-src="/lazy.png" src="https://x?a=1&amp;b=2">"#;
        assert_eq!(
            link_targets(html),
            vec!["/en/", "/scene/index.html?variant=scroll", "/a.css", "https://x?a=1&b=2"]
        );
    }
}
