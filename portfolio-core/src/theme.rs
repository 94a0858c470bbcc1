//! Theme preference, effective theme and the mount-gate resolution state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the visitor asked for, as persisted by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// What actually gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Parses a stored value. Anything unrecognised counts as `system`,
    /// matching what a fresh visitor gets.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Preference set by the toggle: dark flips to light, anything else to dark.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::System => Self::Dark,
        }
    }

    /// Label on the toggle, naming the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "LIGHT MODE",
            Self::Light | Self::System => "DARK MODE",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(()),
        }
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Ambient signal from a `prefers-color-scheme: dark` match.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective theme: `system` defers to the ambient platform signal.
pub fn resolve(preference: ThemePreference, ambient: Theme) -> Theme {
    match preference {
        ThemePreference::Light => Theme::Light,
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::System => ambient,
    }
}

/// A value that does not exist yet on the first render pass.
///
/// Consumers draw a placeholder for `Unresolved` and the real control only
/// once the value is `Resolved`, so a generic first guess never flashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    Unresolved,
    Resolved(T),
}

impl<T> Default for Resolution<T> {
    fn default() -> Self {
        Self::Unresolved
    }
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }

    pub fn as_ref(&self) -> Resolution<&T> {
        match self {
            Self::Resolved(value) => Resolution::Resolved(value),
            Self::Unresolved => Resolution::Unresolved,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::Resolved(value) => Resolution::Resolved(f(value)),
            Self::Unresolved => Resolution::Unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_table() {
        assert_eq!(resolve(ThemePreference::System, Theme::Dark), Theme::Dark);
        assert_eq!(resolve(ThemePreference::System, Theme::Light), Theme::Light);
        assert_eq!(resolve(ThemePreference::Light, Theme::Dark), Theme::Light);
        assert_eq!(resolve(ThemePreference::Dark, Theme::Light), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_is_system() {
        assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::System);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::System);
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
    }

    #[test]
    fn toggle_goes_to_dark_unless_already_dark() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::System.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggle_label(), "LIGHT MODE");
        assert_eq!(ThemePreference::System.toggle_label(), "DARK MODE");
    }

    #[test]
    fn unresolved_renders_nothing() {
        let gate: Resolution<Theme> = Resolution::default();
        assert!(!gate.is_resolved());
        assert_eq!(gate.map(Theme::is_dark), Resolution::Unresolved);

        let gate = Resolution::Resolved(Theme::Dark);
        assert_eq!(gate.map(Theme::is_dark).resolved(), Some(true));
    }
}
