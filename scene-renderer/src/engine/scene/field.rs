//! Procedural placement for every particle in the scene.
//!
//! The field is generated once from a seed and kept as a resource, so a
//! theme change recolours the same particles instead of reshuffling them.

use bevy::prelude::*;
use constants::render_settings::{
    DATA_BIT_COUNT, DATA_BIT_LONG, DATA_BIT_LONG_CHANCE, DATA_BIT_SHORT, FIELD_EXTENT, GLYPHS,
    GLYPH_COUNT, GLYPH_SCALE_MIN, GLYPH_SCALE_RANGE, SPARKLE_COUNT, SPARKLE_EXTENT,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphParticle {
    pub position: Vec3,
    pub glyph: char,
    /// Glyph height in world units.
    pub scale: f32,
    /// Index into the palette's six glyph colours.
    pub colour: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataBit {
    pub position: Vec3,
    /// Rotation about X and Y, in radians.
    pub tilt: Vec2,
    pub length: f32,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ParticleField {
    pub glyphs: Vec<GlyphParticle>,
    pub data_bits: Vec<DataBit>,
    pub sparkles: Vec<Vec3>,
}

impl ParticleField {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let extent = Vec3::from_array(FIELD_EXTENT);

        let glyphs = (0..GLYPH_COUNT)
            .map(|_| GlyphParticle {
                position: centred(&mut rng, extent),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                scale: GLYPH_SCALE_MIN + rng.r#gen::<f32>() * GLYPH_SCALE_RANGE,
                colour: rng.gen_range(0..6),
            })
            .collect();

        let data_bits = (0..DATA_BIT_COUNT)
            .map(|_| DataBit {
                position: centred(&mut rng, extent),
                tilt: Vec2::new(
                    rng.gen_range(0.0..std::f32::consts::PI),
                    rng.gen_range(0.0..std::f32::consts::PI),
                ),
                length: if rng.gen_bool(DATA_BIT_LONG_CHANCE) {
                    DATA_BIT_LONG
                } else {
                    DATA_BIT_SHORT
                },
            })
            .collect();

        let sparkles = (0..SPARKLE_COUNT)
            .map(|_| centred(&mut rng, Vec3::splat(SPARKLE_EXTENT)))
            .collect();

        Self {
            glyphs,
            data_bits,
            sparkles,
        }
    }
}

/// Uniform point in a box of `extent` centred on the origin.
fn centred(rng: &mut StdRng, extent: Vec3) -> Vec3 {
    Vec3::new(
        rng.r#gen::<f32>() - 0.5,
        rng.r#gen::<f32>() - 0.5,
        rng.r#gen::<f32>() - 0.5,
    ) * extent
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::FIELD_SEED;

    fn inside(point: Vec3, extent: Vec3) -> bool {
        let half = extent / 2.0;
        point.abs().cmple(half).all()
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(ParticleField::generate(7), ParticleField::generate(7));
        assert_ne!(ParticleField::generate(7), ParticleField::generate(8));
    }

    #[test]
    fn counts_match_the_composition() {
        let field = ParticleField::generate(FIELD_SEED);
        assert_eq!(field.glyphs.len(), 120);
        assert_eq!(field.data_bits.len(), 500);
        assert_eq!(field.sparkles.len(), 300);
    }

    #[test]
    fn particles_stay_in_their_volumes() {
        let field = ParticleField::generate(FIELD_SEED);
        let extent = Vec3::from_array(FIELD_EXTENT);

        for glyph in &field.glyphs {
            assert!(inside(glyph.position, extent));
            assert!((0.25..0.65).contains(&glyph.scale));
            assert!(glyph.colour < 6);
            assert!(GLYPHS.contains(&glyph.glyph));
        }
        for bit in &field.data_bits {
            assert!(inside(bit.position, extent));
            assert!(bit.length == DATA_BIT_LONG || bit.length == DATA_BIT_SHORT);
            assert!(bit.tilt.cmpge(Vec2::ZERO).all());
        }
        for sparkle in &field.sparkles {
            assert!(inside(*sparkle, Vec3::splat(SPARKLE_EXTENT)));
        }
    }

    #[test]
    fn long_data_bits_are_the_minority() {
        let field = ParticleField::generate(FIELD_SEED);
        let long = field
            .data_bits
            .iter()
            .filter(|bit| bit.length == DATA_BIT_LONG)
            .count();
        assert!(long > 10 && long < 100, "{long} long bits");
    }
}
