/// 8-bit sRGB colour, kept free of any rendering crate so both the site
/// generator and the scene renderer can share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used in generated CSS.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Every colour decision the background scene makes for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePalette {
    pub background: Rgb8,
    /// Linear fog colour, `None` when the theme renders without fog.
    pub fog: Option<Rgb8>,
    pub ambient_intensity: f32,
    pub glyphs: [Rgb8; 6],
    pub data_bits: Rgb8,
    pub data_bits_opacity: f32,
    pub sparkles: Rgb8,
    pub sparkle_size: f32,
    pub sparkle_opacity: f32,
    pub grid_centre: Rgb8,
    pub grid_lines: Rgb8,
    /// Bloom, glitch, scanline and noise passes.
    pub post_processing: bool,
}

pub const DARK: ScenePalette = ScenePalette {
    background: Rgb8::new(0x02, 0x06, 0x17),
    fog: Some(Rgb8::new(0x02, 0x06, 0x17)),
    ambient_intensity: 0.8,
    glyphs: [
        Rgb8::new(0x22, 0xd3, 0xee),
        Rgb8::new(0x4a, 0xde, 0x80),
        Rgb8::new(0xa7, 0x8b, 0xfa),
        Rgb8::new(0xf4, 0x72, 0xb6),
        Rgb8::new(0xfa, 0xcc, 0x15),
        Rgb8::new(0xfb, 0x92, 0x3c),
    ],
    data_bits: Rgb8::new(0x22, 0xd3, 0xee),
    data_bits_opacity: 0.3,
    sparkles: Rgb8::new(0x22, 0xd3, 0xee),
    sparkle_size: 2.0,
    sparkle_opacity: 0.5,
    grid_centre: Rgb8::new(0x22, 0xd3, 0xee),
    grid_lines: Rgb8::new(0x0e, 0x74, 0x90),
    post_processing: true,
};

pub const LIGHT: ScenePalette = ScenePalette {
    background: Rgb8::new(0xf8, 0xfa, 0xfc),
    fog: None,
    ambient_intensity: 1.0,
    glyphs: [
        Rgb8::new(0x0c, 0x4a, 0x6e),
        Rgb8::new(0x14, 0x53, 0x2d),
        Rgb8::new(0x4c, 0x1d, 0x95),
        Rgb8::new(0x83, 0x18, 0x43),
        Rgb8::new(0x71, 0x3f, 0x12),
        Rgb8::new(0x9a, 0x34, 0x12),
    ],
    data_bits: Rgb8::new(0x0e, 0xa5, 0xe9),
    data_bits_opacity: 0.5,
    sparkles: Rgb8::new(0x03, 0x69, 0xa1),
    sparkle_size: 3.0,
    sparkle_opacity: 1.0,
    grid_centre: Rgb8::new(0x94, 0xa3, 0xb8),
    grid_lines: Rgb8::new(0xcb, 0xd5, 0xe1),
    post_processing: false,
};

/// Page fallback colours behind the scene canvas (slate-50 / slate-950).
pub const PAGE_BACKGROUND_LIGHT: Rgb8 = Rgb8::new(0xf8, 0xfa, 0xfc);
pub const PAGE_BACKGROUND_DARK: Rgb8 = Rgb8::new(0x02, 0x06, 0x17);

/// Accent used for headings, borders and buttons on the overlay.
pub const ACCENT: Rgb8 = Rgb8::new(0x06, 0xb6, 0xd4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Rgb8::new(0x02, 0x06, 0x17).to_hex(), "#020617");
        assert_eq!(ACCENT.to_hex(), "#06b6d4");
    }

    #[test]
    fn only_dark_carries_heavy_effects() {
        assert!(DARK.post_processing && DARK.fog.is_some());
        assert!(!LIGHT.post_processing && LIGHT.fog.is_none());
    }
}
