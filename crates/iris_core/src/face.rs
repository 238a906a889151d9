//! Expression mapping.
//!
//! Pure functions combining vertical gaze, mood, and blink amount into
//! per-eye lid openness, squint, and the range-encoded eyelid channel, plus
//! brow actuation derived from mood alone.

use serde::{Deserialize, Serialize};

/// Tuning for lid aperture and its wire encoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LidTuning {
    /// Neutral aperture before gaze/mood/blink are applied.
    pub base_openness: f32,
    /// Gain of the vertical gaze component on aperture.
    pub gaze_lift: f32,
    /// Gain of positive (raise) and negative (lower) mood on aperture.
    pub mood_lift: f32,
    /// Fraction of the aperture a full blink removes.
    pub blink_depth: f32,
    /// Aperture ceiling; values above 1.0 represent a widened lid.
    pub widen_limit: f32,
    /// Encoded value meaning "fully open"; the widen band sits above it.
    pub open_point: f32,
}

impl Default for LidTuning {
    fn default() -> Self {
        Self {
            base_openness: 0.9,
            gaze_lift: 0.25,
            mood_lift: 0.10,
            blink_depth: 0.85,
            widen_limit: 1.2,
            open_point: 0.75,
        }
    }
}

/// Lid aperture for one eye before range encoding, plus its squint value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LidSample {
    /// Aperture in [0, widen_limit]; 0 closed, above 1.0 widened.
    pub openness: f32,
    /// Pinned fully open; the animated formula was retired in favor of the
    /// constant.
    pub squint: f32,
}

/// Aperture for one eye from its vertical gaze, the mood, and the blink
/// amount. Blink closes the lid multiplicatively after gaze and mood have
/// biased it.
pub fn lid_sample(gaze_y: f32, mood: f32, blink: f32, tuning: &LidTuning) -> LidSample {
    let up = mood.max(0.0);
    let down = (-mood).max(0.0);

    let base = tuning.base_openness + tuning.gaze_lift * gaze_y + tuning.mood_lift * up
        - tuning.mood_lift * down;
    let openness = (base * (1.0 - tuning.blink_depth * blink)).clamp(0.0, tuning.widen_limit);

    LidSample {
        openness,
        squint: 1.0,
    }
}

/// Encode lid aperture into the wire range [0, 1].
///
/// The downstream protocol reads `open_point` (0.75) as "fully open":
/// apertures up to 1.0 map linearly onto [0, open_point], and the excess
/// above 1.0 maps linearly onto the widen band [open_point, 1]. Each
/// branch clamps into its own sub-range.
pub fn encode_eyelid(openness: f32, tuning: &LidTuning) -> f32 {
    if openness <= 1.0 {
        (tuning.open_point * openness).clamp(0.0, tuning.open_point)
    } else {
        let excess = (openness - 1.0).clamp(0.0, 1.0);
        (tuning.open_point + (1.0 - tuning.open_point) * excess).clamp(tuning.open_point, 1.0)
    }
}

/// Brow actuation, applied identically to both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BrowPose {
    pub inner_up: f32,
    pub outer_up: f32,
    pub lowerer: f32,
}

/// Derive brow posture from mood alone: positive mood raises (inner at
/// half gain), negative mood lowers.
pub fn brow_pose(mood: f32) -> BrowPose {
    let up = mood.max(0.0);
    let down = (-mood).max(0.0);
    BrowPose {
        inner_up: 0.5 * up,
        outer_up: up,
        lowerer: down,
    }
}
