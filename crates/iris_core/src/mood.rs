//! Mood oscillator: a slow continuous sinusoid standing in for an affect
//! signal. Drives brow posture and biases lid aperture.

use rand::Rng;
use serde::Deserialize;

/// Tuning for the mood sinusoid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoodTuning {
    /// Phase velocity in radians per second.
    pub speed: f32,
    pub amplitude: f32,
}

impl Default for MoodTuning {
    fn default() -> Self {
        Self {
            speed: 0.08,
            amplitude: 0.7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoodOscillator {
    phase: f32,
    tuning: MoodTuning,
}

impl MoodOscillator {
    /// Phase starts at a random offset in [0, τ).
    pub fn new(tuning: MoodTuning, rng: &mut impl Rng) -> Self {
        Self {
            phase: rng.gen::<f32>() * std::f32::consts::TAU,
            tuning,
        }
    }

    /// Advance the phase by `dt` seconds and return the mood in [-1, 1].
    pub fn step(&mut self, dt: f32) -> f32 {
        self.phase += self.tuning.speed * dt;
        (self.tuning.amplitude * self.phase.sin()).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mood_bounded_by_amplitude() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut mood = MoodOscillator::new(MoodTuning::default(), &mut rng);
        for _ in 0..10_000 {
            let m = mood.step(0.1);
            assert!(m >= -0.7 && m <= 0.7, "mood exceeds amplitude: {}", m);
        }
    }

    #[test]
    fn test_phase_advances_by_speed() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut mood = MoodOscillator::new(MoodTuning::default(), &mut rng);
        let start = mood.phase;
        mood.step(2.0);
        assert!(
            (mood.phase - start - 0.16).abs() < 1e-6,
            "expected phase advance of speed * dt"
        );
    }

    #[test]
    fn test_initial_phase_within_one_turn() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mood = MoodOscillator::new(MoodTuning::default(), &mut rng);
        assert!(mood.phase >= 0.0 && mood.phase < std::f32::consts::TAU);
    }
}
