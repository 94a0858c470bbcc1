//! Localized message bundles compiled into the binary.
//!
//! Each bundle is a nested `Namespace -> key -> string` JSON object. The
//! locale-to-bundle mapping is fixed at compile time; selecting a locale is
//! a lookup, never a filesystem read.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{PortfolioError, Result};
use crate::locale::{Locale, resolve_message_locale};

/// Keys every bundle must provide, as `(namespace, key)`.
pub const REQUIRED_KEYS: &[(&str, &str)] = &[
    ("Metadata", "title"),
    ("Metadata", "description"),
    ("Overlay", "title"),
    ("Overlay", "subtitle"),
    ("Overlay", "scrollHint"),
    ("Overlay", "featured"),
    ("Overlay", "noDescription"),
    ("Overlay", "launch"),
    ("Overlay", "deployed"),
    ("Overlay", "libs"),
    ("Overlay", "footer"),
    ("Project", "back"),
    ("Project", "visitSite"),
    ("Project", "viewSource"),
    ("Project", "languages"),
    ("NotFound", "title"),
    ("NotFound", "message"),
    ("NotFound", "home"),
];

fn bundle_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => include_str!("../messages/en.json"),
        Locale::Ja => include_str!("../messages/ja.json"),
    }
}

/// One locale's messages.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBundle {
    locale: Locale,
    root: serde_json::Map<String, Value>,
}

impl MessageBundle {
    pub fn from_json_str(locale: Locale, json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(root) => Ok(Self { locale, root }),
            _ => Err(PortfolioError::InvalidBundle { locale }),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Message at `namespace.key`, if present and a string.
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.root.get(namespace)?.get(key)?.as_str()
    }

    pub fn translator<'a>(&'a self, namespace: &'a str) -> Translator<'a> {
        Translator {
            bundle: self,
            namespace,
        }
    }
}

/// Namespaced view over a bundle.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    bundle: &'a MessageBundle,
    namespace: &'a str,
}

impl<'a> Translator<'a> {
    /// Message for `key`; a missing key renders as its dotted path so the gap
    /// is visible on the page instead of leaving it blank.
    pub fn t(&self, key: &str) -> String {
        match self.bundle.get(self.namespace, key) {
            Some(message) => message.to_string(),
            None => {
                tracing::warn!(
                    locale = %self.bundle.locale,
                    namespace = self.namespace,
                    key,
                    "missing message"
                );
                format!("{}.{}", self.namespace, key)
            }
        }
    }

    pub fn locale(&self) -> Locale {
        self.bundle.locale
    }
}

/// All supported bundles keyed by locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    bundles: HashMap<Locale, MessageBundle>,
}

impl MessageCatalog {
    /// Parses the bundles compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let bundles = Locale::ALL
            .iter()
            .map(|&locale| Ok((locale, MessageBundle::from_json_str(locale, bundle_source(locale))?)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { bundles })
    }

    pub fn from_bundles(bundles: impl IntoIterator<Item = MessageBundle>) -> Self {
        Self {
            bundles: bundles.into_iter().map(|b| (b.locale, b)).collect(),
        }
    }

    /// Bundle for a supported locale, falling back to the default bundle.
    pub fn bundle(&self, locale: Locale) -> Option<&MessageBundle> {
        self.bundles
            .get(&locale)
            .or_else(|| self.bundles.get(&Locale::DEFAULT))
    }

    /// Lenient request-time entry point: any requested value yields a bundle.
    pub fn for_request(&self, requested: Option<&str>) -> Option<&MessageBundle> {
        self.bundle(resolve_message_locale(requested))
    }

    /// Fails on the first supported locale lacking a required key.
    pub fn validate(&self) -> Result<()> {
        for locale in Locale::ALL {
            let Some(bundle) = self.bundles.get(&locale) else {
                return Err(PortfolioError::MissingMessage {
                    locale,
                    key: "*".to_string(),
                });
            };
            for (namespace, key) in REQUIRED_KEYS {
                if bundle.get(namespace, key).is_none() {
                    return Err(PortfolioError::MissingMessage {
                        locale,
                        key: format!("{namespace}.{key}"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bundles_are_complete() {
        let catalog = MessageCatalog::builtin().unwrap();
        catalog.validate().unwrap();
    }

    #[test]
    fn request_locale_is_lenient() {
        let catalog = MessageCatalog::builtin().unwrap();
        assert_eq!(catalog.for_request(Some("fr")).unwrap().locale(), Locale::En);
        assert_eq!(catalog.for_request(Some("ja")).unwrap().locale(), Locale::Ja);
        assert_eq!(catalog.for_request(None).unwrap().locale(), Locale::En);
    }

    #[test]
    fn bundles_differ_per_locale() {
        let catalog = MessageCatalog::builtin().unwrap();
        let en = catalog.bundle(Locale::En).unwrap().translator("Project");
        let ja = catalog.bundle(Locale::Ja).unwrap().translator("Project");
        assert_ne!(en.t("back"), ja.t("back"));
    }

    #[test]
    fn missing_key_renders_dotted_path() {
        let bundle = MessageBundle::from_json_str(Locale::En, r#"{"Overlay": {"title": "T"}}"#).unwrap();
        let t = bundle.translator("Overlay");
        assert_eq!(t.t("title"), "T");
        assert_eq!(t.t("footer"), "Overlay.footer");
    }

    #[test]
    fn validation_names_the_missing_key() {
        let partial = MessageBundle::from_json_str(Locale::Ja, r#"{"Overlay": {}}"#).unwrap();
        let full = MessageCatalog::builtin().unwrap().bundle(Locale::En).unwrap().clone();
        let catalog = MessageCatalog::from_bundles([full, partial]);

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::MissingMessage { locale: Locale::Ja, ref key } if key == "Metadata.title"
        ));
    }

    #[test]
    fn non_object_bundle_is_rejected() {
        let err = MessageBundle::from_json_str(Locale::En, "[]").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidBundle { .. }));
    }
}
