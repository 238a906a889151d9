//! Blink controller.
//!
//! An independent timed state machine producing a triangular
//! open → closed → open envelope, eased through smoothstep. Most blinks run
//! the full duration; a fraction are shorter micro-blinks.

use rand::Rng;
use serde::Deserialize;

use crate::math::smoothstep;

/// Tuning for blink timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlinkTuning {
    /// Probability that a triggered blink is a micro-blink.
    pub micro_probability: f32,
    /// Micro-blink duration in seconds.
    pub micro_duration: f32,
    /// Full blink duration in seconds.
    pub full_duration: f32,
    /// Pause between blinks in seconds.
    pub interval_min: f32,
    pub interval_max: f32,
    /// Delay bounds for the very first blink after startup.
    pub first_delay_min: f32,
    pub first_delay_max: f32,
}

impl Default for BlinkTuning {
    fn default() -> Self {
        Self {
            micro_probability: 0.15,
            micro_duration: 0.12,
            full_duration: 0.18,
            interval_min: 2.2,
            interval_max: 5.0,
            first_delay_min: 0.5,
            first_delay_max: 4.0,
        }
    }
}

/// Where the controller is in the blink cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlinkPhase {
    /// Eyes open, waiting for the next trigger.
    Idle,
    /// Mid-blink. `progress` runs 0 → 1 over `duration` seconds.
    Blinking { progress: f32, duration: f32 },
}

/// The blink state machine.
#[derive(Debug, Clone)]
pub struct BlinkController {
    tuning: BlinkTuning,
    phase: BlinkPhase,
    next_blink_at: f32,
}

impl BlinkController {
    pub fn new(tuning: BlinkTuning, rng: &mut impl Rng) -> Self {
        let next_blink_at = rng.gen_range(tuning.first_delay_min..tuning.first_delay_max);
        Self {
            tuning,
            phase: BlinkPhase::Idle,
            next_blink_at,
        }
    }

    /// Advance by `dt` seconds at simulation time `clock` and return the
    /// blink amount for this tick: 0 open, 1 fully closed at mid-blink.
    ///
    /// The next blink is scheduled at trigger time, not at completion, so
    /// a long blink never delays its successor.
    pub fn step(&mut self, clock: f32, dt: f32, rng: &mut impl Rng) -> f32 {
        if self.phase == BlinkPhase::Idle && clock >= self.next_blink_at {
            let duration = if rng.gen_bool(f64::from(self.tuning.micro_probability)) {
                self.tuning.micro_duration
            } else {
                self.tuning.full_duration
            };
            self.phase = BlinkPhase::Blinking {
                progress: 0.0,
                duration,
            };
            self.next_blink_at =
                clock + rng.gen_range(self.tuning.interval_min..self.tuning.interval_max);
        }

        match self.phase {
            BlinkPhase::Blinking { progress, duration } => {
                let progress = if dt > 0.0 {
                    progress + dt / duration
                } else {
                    progress
                };
                if progress >= 1.0 {
                    self.phase = BlinkPhase::Idle;
                    return 0.0;
                }
                self.phase = BlinkPhase::Blinking { progress, duration };

                // Symmetric triangle over progress, eased at both ends.
                let u = progress.clamp(0.0, 1.0);
                smoothstep(1.0 - (2.0 * u - 1.0).abs())
            }
            BlinkPhase::Idle => 0.0,
        }
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn controller() -> (BlinkController, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let blink = BlinkController::new(BlinkTuning::default(), &mut rng);
        (blink, rng)
    }

    #[test]
    fn test_idle_amount_is_zero() {
        let (mut blink, mut rng) = controller();
        // Well before the first scheduled blink.
        let amount = blink.step(0.0, 0.016, &mut rng);
        assert_eq!(amount, 0.0);
        assert_eq!(blink.phase, BlinkPhase::Idle);
    }

    #[test]
    fn test_first_blink_scheduled_in_startup_window() {
        let (blink, _rng) = controller();
        let t = &blink.tuning;
        assert!(blink.next_blink_at >= t.first_delay_min && blink.next_blink_at < t.first_delay_max);
    }

    #[test]
    fn test_envelope_shape_and_symmetry() {
        let (mut blink, mut rng) = controller();

        // Arm with a zero-length step so progress stays at 0.
        let armed = blink.step(10.0, 0.0, &mut rng);
        assert_eq!(armed, 0.0, "envelope starts at zero");
        let BlinkPhase::Blinking { duration, .. } = blink.phase else {
            panic!("expected an active blink");
        };

        let dt = duration / 4.0;
        let quarter = blink.step(10.0, dt, &mut rng); // progress 0.25
        let peak = blink.step(10.0, dt, &mut rng); // progress 0.5
        let three_quarter = blink.step(10.0, dt, &mut rng); // progress 0.75
        let done = blink.step(10.0, dt, &mut rng); // progress 1.0

        assert_eq!(peak, 1.0, "mid-blink must be fully closed");
        assert_eq!(
            quarter, three_quarter,
            "closing and reopening halves must mirror each other"
        );
        assert_eq!(done, 0.0, "envelope ends at zero");
        assert_eq!(blink.phase, BlinkPhase::Idle);
    }

    #[test]
    fn test_duration_is_micro_or_full() {
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut blink = BlinkController::new(BlinkTuning::default(), &mut rng);
            blink.step(100.0, 0.0, &mut rng);
            let BlinkPhase::Blinking { duration, .. } = blink.phase else {
                panic!("expected an active blink");
            };
            assert!(
                duration == 0.12 || duration == 0.18,
                "unexpected blink duration {}",
                duration
            );
        }
    }

    #[test]
    fn test_reschedule_happens_at_trigger_not_completion() {
        let (mut blink, mut rng) = controller();
        blink.step(10.0, 0.0, &mut rng);
        let t = &blink.tuning;
        assert!(
            blink.next_blink_at >= 10.0 + t.interval_min
                && blink.next_blink_at < 10.0 + t.interval_max,
            "next blink must be scheduled relative to the trigger time, got {}",
            blink.next_blink_at
        );
    }

    #[test]
    fn test_zero_dt_holds_progress() {
        let (mut blink, mut rng) = controller();
        blink.step(10.0, 0.0, &mut rng);
        let phase_before = blink.phase;
        blink.step(10.0, 0.0, &mut rng);
        assert_eq!(blink.phase, phase_before);
    }

    #[test]
    fn test_amount_bounded_over_long_run() {
        let (mut blink, mut rng) = controller();
        let mut clock = 0.0;
        for _ in 0..10_000 {
            clock += 0.016;
            let amount = blink.step(clock, 0.016, &mut rng);
            assert!(
                (0.0..=1.0).contains(&amount),
                "blink amount out of range: {}",
                amount
            );
        }
    }
}
