//! # Crate motion-display
//!
//! ## motion-display
//!
//! The `motion-display` crate renders live motion readings as a tabbed
//! numeric readout: one tab per motion source, a shared degrees/radians
//! toggle, and `--` placeholders while a source has no data yet.
//!
//! Formatting is a display concern only: stored readings stay in
//! radians/g/µT and are converted at render time.

pub mod dashboard;
pub mod format;
pub mod panel;
pub mod sinks;

pub use dashboard::Dashboard;
pub use panel::MotionPanel;
pub use sinks::ReadoutSink;
