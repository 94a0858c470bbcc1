//! Sporadic glitch timing: a burst of random length and strength after a
//! random pause, forever.

use bevy::prelude::*;
use constants::render_settings::{FIELD_SEED, GLITCH_DELAY, GLITCH_DURATION, GLITCH_STRENGTH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchBurst {
    pub strength: f32,
    /// Per-burst value the shader hashes to pick displaced bands.
    pub seed: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct GlitchSchedule {
    rng: StdRng,
    next_start: f32,
    active: Option<(f32, GlitchBurst)>,
}

impl Default for GlitchSchedule {
    fn default() -> Self {
        Self::new(FIELD_SEED.rotate_left(17), 0.0)
    }
}

impl GlitchSchedule {
    pub fn new(seed: u64, now: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let next_start = now + rng.gen_range(GLITCH_DELAY.0..GLITCH_DELAY.1);
        Self {
            rng,
            next_start,
            active: None,
        }
    }

    /// Burst in effect at `now`, if any. Time must not run backwards.
    pub fn update(&mut self, now: f32) -> Option<GlitchBurst> {
        if let Some((end, burst)) = self.active {
            if now < end {
                return Some(burst);
            }
            self.active = None;
            self.next_start = end + self.rng.gen_range(GLITCH_DELAY.0..GLITCH_DELAY.1);
        }

        if now < self.next_start {
            return None;
        }

        let duration = self.rng.gen_range(GLITCH_DURATION.0..GLITCH_DURATION.1);
        let burst = GlitchBurst {
            strength: self.rng.gen_range(GLITCH_STRENGTH.0..GLITCH_STRENGTH.1),
            seed: self.rng.r#gen::<f32>(),
        };
        self.active = Some((now + duration, burst));
        Some(burst)
    }
}
