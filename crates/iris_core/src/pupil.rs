//! Pupil dilation: one drift process, clamped into its output range every
//! tick. No state machine — pure continuous stochastic output.

use rand::Rng;
use serde::Deserialize;

use crate::drift::DriftProcess;

/// Tuning for the pupil process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PupilTuning {
    pub mean: f32,
    pub reversion: f32,
    pub volatility: f32,
    /// Output clamp bounds; the raw process value itself is not clamped.
    pub min: f32,
    pub max: f32,
}

impl Default for PupilTuning {
    fn default() -> Self {
        Self {
            mean: 0.55,
            reversion: 1.2,
            volatility: 0.04,
            min: 0.2,
            max: 0.95,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PupilController {
    drift: DriftProcess,
    min: f32,
    max: f32,
}

impl PupilController {
    pub fn new(tuning: PupilTuning) -> Self {
        Self {
            drift: DriftProcess::new(tuning.mean, tuning.reversion, tuning.volatility),
            min: tuning.min,
            max: tuning.max,
        }
    }

    /// Advance by `dt` seconds and return the clamped dilation value.
    pub fn step(&mut self, dt: f32, rng: &mut impl Rng) -> f32 {
        self.drift.step(dt, rng).clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_output_always_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut pupil = PupilController::new(PupilTuning::default());
        for _ in 0..10_000 {
            let v = pupil.step(0.016, &mut rng);
            assert!((0.2..=0.95).contains(&v), "pupil out of range: {}", v);
        }
    }

    #[test]
    fn test_hovers_near_mean() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut pupil = PupilController::new(PupilTuning::default());
        let mut sum = 0.0;
        let n = 20_000;
        for _ in 0..n {
            sum += pupil.step(0.016, &mut rng);
        }
        let avg = sum / n as f32;
        assert!(
            (avg - 0.55).abs() < 0.1,
            "long-run average should sit near the mean, got {}",
            avg
        );
    }
}
