use std::str::FromStr;

use bevy::prelude::*;

/// How the scene moves. The home page drives it from scroll, the detail
/// page lets the camera drift on its own.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SceneVariant {
    #[default]
    Scroll,
    Orbit,
}

impl SceneVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Orbit => "orbit",
        }
    }

    /// Reads `variant=` from a url query string, with or without the
    /// leading `?`. Missing or unknown values fall back to scroll.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "variant")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for SceneVariant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll" => Ok(Self::Scroll),
            "orbit" => Ok(Self::Orbit),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_selects_variant() {
        assert_eq!(SceneVariant::from_query("?variant=orbit"), SceneVariant::Orbit);
        assert_eq!(SceneVariant::from_query("a=1&variant=scroll"), SceneVariant::Scroll);
        assert_eq!(SceneVariant::from_query("?variant=spin"), SceneVariant::Scroll);
        assert_eq!(SceneVariant::from_query(""), SceneVariant::Scroll);
    }
}
