//! Build-time constants shared by the site generator and the scene renderer.

/// Highlighted projects, supported locales and other site-wide values.
pub mod site;

/// Light and dark colour palettes for the background scene.
pub mod palette;

/// Particle counts, volumes, camera and post-processing parameters.
pub mod render_settings;

/// Capture policy for the out-of-band screenshot updater.
pub mod screenshot;
