//! OSC-over-UDP publishing of face snapshots.
//!
//! Each snapshot field goes out as an independently named float parameter
//! on a best-effort, unordered, unacknowledged transport. A failed send is
//! logged and dropped, never retried — the next tick supersedes it within
//! tens of milliseconds.

mod params;
mod publisher;

pub use params::{snapshot_messages, MOOD_DEBUG};
pub use publisher::{OscPublisher, PublishError};
