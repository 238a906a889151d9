//! The simulation orchestrator.
//!
//! Owns every controller plus the random source, advances sub-state in a
//! fixed order, and emits one immutable [`FaceSnapshot`] per tick. The
//! random generator is injected at construction: seeding is an explicit
//! contract, not a hidden process-wide side effect.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::blink::BlinkController;
use crate::config::FaceTuning;
use crate::face::{brow_pose, encode_eyelid, lid_sample, LidTuning};
use crate::gaze::GazeController;
use crate::mood::MoodOscillator;
use crate::pupil::PupilController;
use crate::snapshot::FaceSnapshot;

/// The full face simulation. One instance per driver loop; `step` is
/// synchronous, non-blocking, and total over any numeric input.
#[derive(Debug, Clone)]
pub struct FaceSimulator {
    clock: f32,
    gaze: GazeController,
    mood: MoodOscillator,
    blink: BlinkController,
    pupil: PupilController,
    lid: LidTuning,
    rng: ChaCha8Rng,
}

impl FaceSimulator {
    /// Build a simulator. A seed pins the full output sequence bit-for-bit;
    /// without one the generator comes from OS entropy and runs are not
    /// reproducible.
    pub fn new(tuning: FaceTuning, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mood = MoodOscillator::new(tuning.mood, &mut rng);
        let blink = BlinkController::new(tuning.blink, &mut rng);
        Self {
            clock: 0.0,
            gaze: GazeController::new(tuning.gaze),
            mood,
            blink,
            pupil: PupilController::new(tuning.pupil),
            lid: tuning.lid,
            rng,
        }
    }

    /// Elapsed simulated time in seconds.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Advance the simulation by `dt` seconds and return this tick's
    /// snapshot.
    ///
    /// The clock never moves backward: a negative or non-finite `dt`
    /// contributes zero elapsed time, and the controllers treat it as a
    /// no-op advance.
    pub fn step(&mut self, dt: f32) -> FaceSnapshot {
        let dt = if dt.is_finite() {
            dt
        } else {
            tracing::warn!("non-finite dt {}, treating as zero", dt);
            0.0
        };
        self.clock += dt.max(0.0);

        self.gaze.step(self.clock, dt, &mut self.rng);
        let mood = self.mood.step(dt);
        let blink = self.blink.step(self.clock, dt, &mut self.rng);
        let pupil = self.pupil.step(dt, &mut self.rng);

        let left = lid_sample(self.gaze.left().y, mood, blink, &self.lid);
        let right = lid_sample(self.gaze.right().y, mood, blink, &self.lid);

        FaceSnapshot {
            gaze_left: self.gaze.left(),
            gaze_right: self.gaze.right(),
            pupil,
            blink,
            mood,
            eyelid_left: encode_eyelid(left.openness, &self.lid),
            eyelid_right: encode_eyelid(right.openness, &self.lid),
            squint_left: left.squint,
            squint_right: right.squint,
            brow: brow_pose(mood),
        }
    }
}
