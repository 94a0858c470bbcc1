//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, the mount gate and
//! the no-surface fallback for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene, effects and bridge plugins.
pub mod app_setup;

/// Application state machine: mounting until the session theme is known,
/// then running.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;

/// Theme-only bridge used when the page cannot host an accelerated canvas.
pub mod surface;
