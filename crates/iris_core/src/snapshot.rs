//! The per-tick output record.

use serde::Serialize;

use crate::face::BrowPose;
use crate::math::Vec2;

/// One immutable snapshot of ocular/facial parameters.
///
/// Produced once per [`crate::FaceSimulator::step`] call and never retained
/// by the simulation; the caller forwards it and drops it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceSnapshot {
    /// Left-eye gaze, components in [-1, 1].
    pub gaze_left: Vec2,
    /// Right-eye gaze, components in [-1, 1].
    pub gaze_right: Vec2,
    /// Pupil dilation in [0.2, 0.95].
    pub pupil: f32,
    /// Blink envelope in [0, 1]; 1 is fully closed.
    pub blink: f32,
    /// Affect signal in [-1, 1].
    pub mood: f32,
    /// Range-encoded lid openness in [0, 1]; 0.75 means fully open.
    pub eyelid_left: f32,
    pub eyelid_right: f32,
    /// Currently pinned at 1.0.
    pub squint_left: f32,
    pub squint_right: f32,
    /// Brow actuation, identical for both sides.
    pub brow: BrowPose,
}
