//! # Iris Core
//!
//! Synthetic ocular/facial telemetry for an avatar: gaze direction, blink,
//! pupil dilation, and brow posture, generated as a stand-in signal source
//! when no real eye tracker is connected.
//!
//! The engine is a set of composed stochastic processes and timed state
//! machines that turn a wall-clock time delta into one plausible snapshot:
//!
//! - **Gaze**: ballistic saccades (smoothstep-eased jumps to a shared
//!   target with binocular vergence) alternating with fixation, where a
//!   mean-reverting drift process supplies continuous micro-jitter.
//! - **Blink**: a timed triangular close/open envelope with occasional
//!   micro-blinks.
//! - **Pupil**: a single drift process "breathing" inside a clamped range.
//! - **Mood**: a slow sinusoid whose sign splits into brow raise/lower.
//!
//! ## Stepping
//!
//! [`FaceSimulator::step`] is pure, synchronous, and non-blocking: the
//! caller owns pacing and feeds in whatever `dt` it measured. Sub-state
//! advances in a fixed order (gaze, mood, blink, pupil, expression
//! mapping) and every snapshot field is clamped into its documented range.
//! A seed pins the whole output sequence bit-for-bit.

mod blink;
mod config;
mod drift;
mod face;
mod gaze;
mod math;
mod mood;
mod pupil;
mod sim;
mod snapshot;

pub use blink::{BlinkController, BlinkPhase, BlinkTuning};
pub use config::{FaceTuning, IrisConfig};
pub use drift::DriftProcess;
pub use face::{brow_pose, encode_eyelid, lid_sample, BrowPose, LidSample, LidTuning};
pub use gaze::{GazeController, GazeTuning, SaccadePhase};
pub use math::{lerp, smoothstep, Vec2};
pub use mood::{MoodOscillator, MoodTuning};
pub use pupil::{PupilController, PupilTuning};
pub use sim::FaceSimulator;
pub use snapshot::FaceSnapshot;
