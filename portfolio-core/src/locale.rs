//! Supported locales and the two resolution policies applied to them.
//!
//! Route parsing is strict: an unsupported segment is a not-found page.
//! Message loading is lenient: an unsupported or missing locale quietly
//! falls back to the default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ja,
}

/// Returned by [`Locale::from_str`] for anything outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale `{0}`")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    pub const DEFAULT: Locale = Locale::En;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Short label for the language switcher.
    pub fn switcher_label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Ja => "JP",
        }
    }

    /// Strict parse for the `{locale}` route segment.
    pub fn from_route_segment(segment: &str) -> Option<Self> {
        segment.parse().ok()
    }

    /// Home route for this locale.
    pub fn home_path(self) -> String {
        format!("/{}/", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient resolution used when choosing a message bundle.
pub fn resolve_message_locale(requested: Option<&str>) -> Locale {
    match requested.map(str::parse::<Locale>) {
        Some(Ok(locale)) => locale,
        Some(Err(UnsupportedLocale(value))) => {
            tracing::debug!(requested = %value, fallback = %Locale::DEFAULT, "unsupported message locale");
            Locale::DEFAULT
        }
        None => Locale::DEFAULT,
    }
}
