/// Scene camera and the scroll/orbit rigs.
pub mod camera;

/// App lifecycle, window and the no-surface fallback.
pub mod core;

/// Pointer and scroll inputs.
pub mod input;

/// Browser storage, media query and url access, with native stand-ins.
pub mod platform;

/// Post-processing and theme environment.
pub mod render;

/// Particle field, glyphs and floor grid.
pub mod scene;

/// Session theme resolution and change events.
pub mod theme;

/// Scroll or orbit motion, chosen by the embedding page.
pub mod variant;
