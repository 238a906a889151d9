//! Mean-reverting scalar noise (an Ornstein–Uhlenbeck process).
//!
//! One primitive, two jobs: low-amplitude fixational gaze jitter and pupil
//! "breathing". The parameterization differs per use; the update rule is
//! identical. All sampling takes an explicit RNG so a seeded run replays
//! the same trajectory.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Floor for the diffusion time step. A zero or negative `dt` must never
/// reach the square root.
const MIN_DIFFUSION_DT: f32 = 1e-4;

/// A scalar Ornstein–Uhlenbeck process:
/// `value += reversion·(mean − value)·dt + volatility·sqrt(dt)·N(0,1)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftProcess {
    value: f32,
    mean: f32,
    /// Pull strength toward the mean, per second.
    reversion: f32,
    /// Noise amplitude, per square-root second.
    volatility: f32,
}

impl DriftProcess {
    /// Create a process resting at its mean.
    pub fn new(mean: f32, reversion: f32, volatility: f32) -> Self {
        Self {
            value: mean,
            mean,
            reversion,
            volatility,
        }
    }

    /// Advance by `dt` seconds and return the new value.
    ///
    /// The diffusion term floors `dt` at 1e-4; the reversion term uses `dt`
    /// as given, so a non-positive step leaves the pull at zero.
    pub fn step(&mut self, dt: f32, rng: &mut impl Rng) -> f32 {
        let z: f32 = rng.sample(StandardNormal);
        self.value += self.reversion * (self.mean - self.value) * dt
            + self.volatility * dt.max(MIN_DIFFUSION_DT).sqrt() * z;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}
