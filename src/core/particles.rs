use super::constants::{
    PARTICLE_DELAY_MAX_S, PARTICLE_DURATION_MIN_S, PARTICLE_DURATION_SPAN_S,
    PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_SPAN_PX,
};
use rand::Rng;

/// Randomised look of one decorative hero particle. Fixed once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: PARTICLE_SIZE_MIN_PX + rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX,
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            duration_s: PARTICLE_DURATION_MIN_S + rng.gen::<f64>() * PARTICLE_DURATION_SPAN_S,
            delay_s: rng.gen::<f64>() * PARTICLE_DELAY_MAX_S,
        }
    }

    /// Inline style properties as `(name, value)` pairs.
    pub fn style_properties(&self) -> [(&'static str, String); 6] {
        [
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}
