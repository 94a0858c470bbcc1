//! Host platform access. In the browser these read the page's storage,
//! media queries and url; native builds take the same inputs from the
//! environment so the scene can be previewed in a window.

use portfolio_core::{Theme, ThemePreference};

use crate::engine::variant::SceneVariant;

#[cfg(target_arch = "wasm32")]
use constants::site::THEME_STORAGE_KEY;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

pub const THEME_ENV: &str = "PORTFOLIO_THEME";
pub const AMBIENT_THEME_ENV: &str = "PORTFOLIO_AMBIENT_THEME";
pub const VARIANT_ENV: &str = "PORTFOLIO_SCENE_VARIANT";

/// Preference persisted by an earlier visit; `system` when absent.
pub fn stored_preference() -> ThemePreference {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
        ThemePreference::from_stored(stored.as_deref())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemePreference::from_stored(std::env::var(THEME_ENV).ok().as_deref())
    }
}

pub fn persist_preference(preference: ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => {
                if storage
                    .set_item(THEME_STORAGE_KEY, preference.as_str())
                    .is_err()
                {
                    bevy::log::warn!("Failed to persist theme preference");
                }
            }
            None => bevy::log::warn!("Local storage unavailable, theme preference not saved"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        bevy::log::debug!("Theme preference {} not persisted on native", preference);
    }
}

/// Ambient theme from `prefers-color-scheme`.
pub fn ambient_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let prefers_dark = window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches());
        Theme::from_prefers_dark(prefers_dark)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var(AMBIENT_THEME_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Theme::Dark)
    }
}

/// Motion variant requested by the embedding page.
pub fn scene_variant() -> SceneVariant {
    #[cfg(target_arch = "wasm32")]
    {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        SceneVariant::from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var(VARIANT_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

/// Whether the page can host the scene's canvas. The build renders through
/// WebGPU, which replaces the WebGL2 path, so a browser without
/// `navigator.gpu` gets the theme-only fallback.
pub fn accelerated_surface_available() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = window() else {
            return false;
        };
        js_sys::Reflect::get(&window.navigator(), &"gpu".into())
            .is_ok_and(|gpu| !gpu.is_undefined() && !gpu.is_null())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}
