//! Saccade/fixation controller.
//!
//! Gaze alternates between two regimes: short ballistic jumps to a freshly
//! sampled target (saccades) and the near-steady hold between them
//! (fixation), where per-axis drift processes supply continuous
//! micro-jitter. One saccade moves both eyes together; a small vergence
//! offset on the horizontal axis keeps the pair converging rather than
//! perfectly parallel.

use rand::Rng;
use serde::Deserialize;

use crate::drift::DriftProcess;
use crate::math::{smoothstep, Vec2};

/// Tuning for saccade generation and fixational drift.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GazeTuning {
    /// Half-range of the shared base target on the x axis.
    pub base_range_x: f32,
    /// Half-range of the shared base target on the y axis.
    pub base_range_y: f32,
    /// Maximum binocular convergence offset, applied on x only.
    pub vergence_max: f32,
    /// Saccade duration bounds in seconds.
    pub duration_min: f32,
    pub duration_max: f32,
    /// Pause between saccades in seconds.
    pub interval_min: f32,
    pub interval_max: f32,
    /// Gain applied to fixational drift before it perturbs position.
    pub drift_gain: f32,
    /// Mean-reversion rate of the fixational drift processes.
    pub drift_reversion: f32,
    /// Volatility of the fixational drift processes.
    pub drift_volatility: f32,
}

impl Default for GazeTuning {
    fn default() -> Self {
        Self {
            base_range_x: 0.6,
            base_range_y: 0.4,
            vergence_max: 0.08,
            duration_min: 0.03,
            duration_max: 0.07,
            interval_min: 0.18,
            interval_max: 1.1,
            drift_gain: 0.05,
            drift_reversion: 1.5,
            drift_volatility: 0.08,
        }
    }
}

/// Where the controller is in the saccade cycle.
///
/// An explicit tag instead of a sentinel progress value: "active means
/// progress < 1" lives in the type, not in threshold comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SaccadePhase {
    /// Holding the current target; drift jitter only.
    Fixating,
    /// Mid-jump. `progress` runs 0 → 1 over `duration` seconds.
    Saccading { progress: f32, duration: f32 },
}

/// Per-eye interpolation state. `start` is a value snapshot of the
/// position at saccade onset.
#[derive(Debug, Clone, Copy, Default)]
struct EyeState {
    position: Vec2,
    start: Vec2,
    target: Vec2,
}

/// One drift process per axis.
#[derive(Debug, Clone)]
struct EyeDrift {
    x: DriftProcess,
    y: DriftProcess,
}

impl EyeDrift {
    fn new(tuning: &GazeTuning) -> Self {
        Self {
            x: DriftProcess::new(0.0, tuning.drift_reversion, tuning.drift_volatility),
            y: DriftProcess::new(0.0, tuning.drift_reversion, tuning.drift_volatility),
        }
    }
}

/// The saccade/fixation state machine for both eyes.
#[derive(Debug, Clone)]
pub struct GazeController {
    tuning: GazeTuning,
    phase: SaccadePhase,
    next_saccade_at: f32,
    left: EyeState,
    right: EyeState,
    left_drift: EyeDrift,
    right_drift: EyeDrift,
}

impl GazeController {
    /// Both eyes start centered; the first saccade fires on the first tick.
    pub fn new(tuning: GazeTuning) -> Self {
        let left_drift = EyeDrift::new(&tuning);
        let right_drift = EyeDrift::new(&tuning);
        Self {
            tuning,
            phase: SaccadePhase::Fixating,
            next_saccade_at: 0.0,
            left: EyeState::default(),
            right: EyeState::default(),
            left_drift,
            right_drift,
        }
    }

    /// Advance by `dt` seconds at simulation time `clock`.
    ///
    /// The transition check runs before the position update, so a saccade
    /// triggered this tick starts moving this tick. A non-positive `dt`
    /// holds progress (a finite duration must not divide zero time) but
    /// still re-evaluates positions.
    pub fn step(&mut self, clock: f32, dt: f32, rng: &mut impl Rng) {
        if self.phase == SaccadePhase::Fixating && clock >= self.next_saccade_at {
            self.begin_saccade(clock, rng);
        }

        match self.phase {
            SaccadePhase::Saccading { progress, duration } => {
                let progress = if dt > 0.0 {
                    progress + dt / duration
                } else {
                    progress
                };
                let blend = smoothstep(progress);
                self.left.position = self.left.start.lerp(self.left.target, blend);
                self.right.position = self.right.start.lerp(self.right.target, blend);

                // smoothstep(>=1) = 1, so the landing is exact.
                self.phase = if progress >= 1.0 {
                    SaccadePhase::Fixating
                } else {
                    SaccadePhase::Saccading { progress, duration }
                };
            }
            SaccadePhase::Fixating => {
                let gain = self.tuning.drift_gain;
                self.left.position.x =
                    (self.left.position.x + gain * self.left_drift.x.step(dt, rng)).clamp(-1.0, 1.0);
                self.left.position.y =
                    (self.left.position.y + gain * self.left_drift.y.step(dt, rng)).clamp(-1.0, 1.0);
                self.right.position.x = (self.right.position.x
                    + gain * self.right_drift.x.step(dt, rng))
                .clamp(-1.0, 1.0);
                self.right.position.y = (self.right.position.y
                    + gain * self.right_drift.y.step(dt, rng))
                .clamp(-1.0, 1.0);
            }
        }
    }

    /// Sample a fresh shared target and arm the interpolation.
    fn begin_saccade(&mut self, clock: f32, rng: &mut impl Rng) {
        let t = &self.tuning;
        let base_x = rng.gen_range(-t.base_range_x..t.base_range_x);
        let base_y = rng.gen_range(-t.base_range_y..t.base_range_y);
        let vergence = rng.gen_range(0.0..t.vergence_max);

        self.left.start = self.left.position;
        self.right.start = self.right.position;
        self.left.target = Vec2::new(base_x - vergence, base_y).clamp_axes(-1.0, 1.0);
        self.right.target = Vec2::new(base_x + vergence, base_y).clamp_axes(-1.0, 1.0);

        let duration = rng.gen_range(t.duration_min..t.duration_max);
        self.phase = SaccadePhase::Saccading {
            progress: 0.0,
            duration,
        };
        self.next_saccade_at = clock + rng.gen_range(t.interval_min..t.interval_max);
    }

    /// Current left-eye gaze, components in [-1, 1].
    pub fn left(&self) -> Vec2 {
        self.left.position
    }

    /// Current right-eye gaze, components in [-1, 1].
    pub fn right(&self) -> Vec2 {
        self.right.position
    }

    pub fn phase(&self) -> SaccadePhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn controller() -> (GazeController, ChaCha8Rng) {
        (
            GazeController::new(GazeTuning::default()),
            ChaCha8Rng::seed_from_u64(7),
        )
    }

    #[test]
    fn test_first_tick_triggers_a_saccade() {
        let (mut gaze, mut rng) = controller();
        gaze.step(0.0, 0.0, &mut rng);
        assert!(
            matches!(gaze.phase, SaccadePhase::Saccading { .. }),
            "expected a saccade armed on the first tick"
        );
    }

    #[test]
    fn test_saccade_lands_exactly_on_target() {
        let (mut gaze, mut rng) = controller();

        // Arm the saccade with a zero-length step so progress stays at 0.
        gaze.step(0.0, 0.0, &mut rng);
        let SaccadePhase::Saccading { duration, .. } = gaze.phase else {
            panic!("expected an active saccade");
        };
        let target_left = gaze.left.target;
        let target_right = gaze.right.target;

        // Four steps of duration/4 sum to progress 1.0 exactly (binary
        // division by 4 is lossless).
        let dt = duration / 4.0;
        for _ in 0..4 {
            gaze.step(0.0, dt, &mut rng);
        }

        assert_eq!(gaze.phase, SaccadePhase::Fixating);
        assert_eq!(
            gaze.left.position, target_left,
            "left eye must land on its recorded target exactly"
        );
        assert_eq!(
            gaze.right.position, target_right,
            "right eye must land on its recorded target exactly"
        );
    }

    #[test]
    fn test_targets_respect_vergence_split() {
        let (mut gaze, mut rng) = controller();
        gaze.step(0.0, 0.0, &mut rng);

        // Left target sits at or left of the right target on x; y is shared.
        assert!(gaze.left.target.x <= gaze.right.target.x);
        assert_eq!(gaze.left.target.y, gaze.right.target.y);
        let split = gaze.right.target.x - gaze.left.target.x;
        assert!(
            split <= 2.0 * gaze.tuning.vergence_max + 1e-6,
            "vergence split too wide: {}",
            split
        );
    }

    #[test]
    fn test_fixation_drift_stays_in_bounds() {
        let (mut gaze, mut rng) = controller();

        // Drive long enough to cross several saccade/fixation cycles.
        let mut clock = 0.0;
        for _ in 0..5000 {
            clock += 0.016;
            gaze.step(clock, 0.016, &mut rng);
            for p in [gaze.left.position, gaze.right.position] {
                assert!(p.x >= -1.0 && p.x <= 1.0, "x out of range: {}", p.x);
                assert!(p.y >= -1.0 && p.y <= 1.0, "y out of range: {}", p.y);
            }
        }
    }

    #[test]
    fn test_fixation_drift_actually_moves() {
        let (mut gaze, mut rng) = controller();

        // Complete the first saccade, then fixate.
        let mut clock = 0.0;
        while gaze.phase == SaccadePhase::Fixating {
            clock += 0.016;
            gaze.step(clock, 0.016, &mut rng);
        }
        while matches!(gaze.phase, SaccadePhase::Saccading { .. }) {
            gaze.step(clock, 0.016, &mut rng);
        }

        let before = gaze.left.position;
        gaze.step(clock, 0.016, &mut rng);
        assert_ne!(
            gaze.left.position, before,
            "fixational drift should perturb the held position"
        );
    }

    #[test]
    fn test_zero_dt_holds_progress() {
        let (mut gaze, mut rng) = controller();
        gaze.step(0.0, 0.0, &mut rng);
        let phase_before = gaze.phase;
        gaze.step(0.0, 0.0, &mut rng);
        assert_eq!(gaze.phase, phase_before, "zero dt must not advance progress");
    }

    #[test]
    fn test_next_saccade_scheduled_after_trigger() {
        let (mut gaze, mut rng) = controller();
        gaze.step(0.0, 0.0, &mut rng);
        let t = &gaze.tuning;
        assert!(gaze.next_saccade_at >= t.interval_min && gaze.next_saccade_at < t.interval_max);
    }
}
