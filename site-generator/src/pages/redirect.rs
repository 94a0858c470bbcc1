use portfolio_core::Locale;

use crate::config::SiteConfig;

/// Root document sending visitors to a locale's home page. Static hosting has
/// no middleware, so this is a refresh plus a plain link.
pub fn render(config: &SiteConfig, locale: Locale) -> String {
    let target = config.href(&locale.home_path());
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<meta http-equiv=\"refresh\" content=\"0; url={target}\">\n<link rel=\"canonical\" href=\"{target}\">\n<title>{target}</title>\n</head>\n<body><a href=\"{target}\">{target}</a></body>\n</html>\n",
        lang = locale.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_default_home_under_base() {
        let html = render(&SiteConfig::default().with_base_path("folio"), Locale::En);
        assert!(html.contains("url=/folio/en/"));
        assert!(html.contains(r#"<a href="/folio/en/">"#));
    }
}
