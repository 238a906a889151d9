//! Avatar parameter addresses and the snapshot → message fan-out.

use iris_core::FaceSnapshot;

pub const EYE_LEFT_X: &str = "/avatar/parameters/v2/EyeLeftX";
pub const EYE_LEFT_Y: &str = "/avatar/parameters/v2/EyeLeftY";
pub const EYE_RIGHT_X: &str = "/avatar/parameters/v2/EyeRightX";
pub const EYE_RIGHT_Y: &str = "/avatar/parameters/v2/EyeRightY";
pub const PUPIL_DILATION: &str = "/avatar/parameters/v2/PupilDilation";
pub const EYELID_LEFT: &str = "/avatar/parameters/v2/EyeLidLeft";
pub const EYELID_RIGHT: &str = "/avatar/parameters/v2/EyeLidRight";
pub const EYE_SQUINT_LEFT: &str = "/avatar/parameters/v2/EyeSquintLeft";
pub const EYE_SQUINT_RIGHT: &str = "/avatar/parameters/v2/EyeSquintRight";
pub const BROW_INNER_UP_LEFT: &str = "/avatar/parameters/v2/BrowInnerUpLeft";
pub const BROW_OUTER_UP_LEFT: &str = "/avatar/parameters/v2/BrowOuterUpLeft";
pub const BROW_LOWERER_LEFT: &str = "/avatar/parameters/v2/BrowLowererLeft";
pub const BROW_INNER_UP_RIGHT: &str = "/avatar/parameters/v2/BrowInnerUpRight";
pub const BROW_OUTER_UP_RIGHT: &str = "/avatar/parameters/v2/BrowOuterUpRight";
pub const BROW_LOWERER_RIGHT: &str = "/avatar/parameters/v2/BrowLowererRight";

/// Raw mood debug channel, off by default.
pub const MOOD_DEBUG: &str = "/avatar/parameters/Mood";

/// Fan a snapshot out into `(address, value)` pairs in publish order.
///
/// Brow actuation is duplicated per side — the pose carries no left/right
/// asymmetry.
pub fn snapshot_messages(snap: &FaceSnapshot, send_mood: bool) -> Vec<(&'static str, f32)> {
    let mut out = vec![
        (EYE_LEFT_X, snap.gaze_left.x),
        (EYE_LEFT_Y, snap.gaze_left.y),
        (EYE_RIGHT_X, snap.gaze_right.x),
        (EYE_RIGHT_Y, snap.gaze_right.y),
        (PUPIL_DILATION, snap.pupil),
        (EYELID_LEFT, snap.eyelid_left),
        (EYELID_RIGHT, snap.eyelid_right),
        (EYE_SQUINT_LEFT, snap.squint_left),
        (EYE_SQUINT_RIGHT, snap.squint_right),
        (BROW_INNER_UP_LEFT, snap.brow.inner_up),
        (BROW_OUTER_UP_LEFT, snap.brow.outer_up),
        (BROW_LOWERER_LEFT, snap.brow.lowerer),
        (BROW_INNER_UP_RIGHT, snap.brow.inner_up),
        (BROW_OUTER_UP_RIGHT, snap.brow.outer_up),
        (BROW_LOWERER_RIGHT, snap.brow.lowerer),
    ];
    if send_mood {
        out.push((MOOD_DEBUG, snap.mood));
    }
    out
}
