/// Glyphs scattered through the code storm.
pub const GLYPHS: &[char] = &[
    '0', '1', '<', '>', '{', '}', '/', '*', '¦', '|', '[', ']', '∆', '⚡',
];

pub const GLYPH_COUNT: usize = 120;
pub const GLYPH_SCALE_MIN: f32 = 0.25;
pub const GLYPH_SCALE_RANGE: f32 = 0.4;

pub const DATA_BIT_COUNT: usize = 500;
/// Share of data bits drawn as long streaks instead of short ticks.
pub const DATA_BIT_LONG_CHANCE: f64 = 0.1;
pub const DATA_BIT_LONG: f32 = 1.5;
pub const DATA_BIT_SHORT: f32 = 0.4;
pub const DATA_BIT_THICKNESS: f32 = 0.04;
/// Radians per second the data bit cloud spins about Y.
pub const DATA_BIT_SPIN: f32 = 0.05;

pub const SPARKLE_COUNT: usize = 300;
pub const SPARKLE_EXTENT: f32 = 40.0;
/// World units per sparkle size unit.
pub const SPARKLE_UNIT: f32 = 0.02;

/// Width, height and depth of the box particles are scattered in.
pub const FIELD_EXTENT: [f32; 3] = [50.0, 50.0, 30.0];

/// Seed for the procedural particle field.
pub const FIELD_SEED: u64 = 0x5eed_c0de;

pub const GRID_SIZE: f32 = 100.0;
pub const GRID_DIVISIONS: u32 = 40;
pub const GRID_HEIGHT: f32 = -10.0;

pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 10.0];

/// Easing rate multiplier applied to frame delta.
pub const EASE_RATE: f32 = 2.0;
/// Scroll progress 1.0 maps to this group rotation (radians, times PI).
pub const SCROLL_ROTATION_TURNS: f32 = 1.0;
/// Scroll progress 1.0 maps to this group lift.
pub const SCROLL_LIFT: f32 = 15.0;
/// Pointer at the viewport edge maps to this camera offset.
pub const POINTER_SENSITIVITY: f32 = 2.0;

pub const ORBIT_SPEED: f32 = 0.2;
pub const ORBIT_RADIUS: f32 = 2.0;

pub const FOG_START: f32 = 10.0;
pub const FOG_END: f32 = 50.0;

pub const BLOOM_INTENSITY: f32 = 0.35;

pub const SCANLINE_DENSITY: f32 = 1.2;
pub const SCANLINE_OPACITY: f32 = 0.03;
pub const NOISE_OPACITY: f32 = 0.03;

/// Seconds between glitch bursts.
pub const GLITCH_DELAY: (f32, f32) = (4.0, 10.0);
/// Seconds a glitch burst lasts.
pub const GLITCH_DURATION: (f32, f32) = (0.1, 0.2);
/// Horizontal displacement as a share of the frame.
pub const GLITCH_STRENGTH: (f32, f32) = (0.05, 0.1);
