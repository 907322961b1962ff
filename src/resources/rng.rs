//! Seedable random source for enemy behavior.
//!
//! Injected as a resource so tests can seed it and replay identical wander
//! patterns and territory placements.

use bevy_ecs::prelude::Resource;

#[derive(Resource)]
pub struct WanderRng(pub fastrand::Rng);

impl WanderRng {
    pub fn with_seed(seed: u64) -> Self {
        WanderRng(fastrand::Rng::with_seed(seed))
    }

    /// Uniform float in `[min, max)`.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.0.f32() * (max - min)
    }
}

impl Default for WanderRng {
    fn default() -> Self {
        WanderRng(fastrand::Rng::new())
    }
}
