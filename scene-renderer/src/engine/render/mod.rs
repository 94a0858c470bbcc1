//! Rendering: the dark-theme post-process pass, its glitch timing and the
//! theme-driven environment.

/// Glitch, scanline and noise fullscreen pass after tonemapping.
///
/// Same node layout as an eye-dome pass: extracted settings component,
/// dynamic uniform and a single fullscreen triangle.
pub mod post_processing;

/// Seeded sporadic glitch schedule feeding the post-process uniform.
pub mod glitch;

/// Clear colour, ambient light, fog and bloom per theme.
pub mod effects;
