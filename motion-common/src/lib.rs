//! Shared data model and capability traits for the `motion-rs` workspace

pub mod constants;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::motion::{MotionSink, MotionSource};
#[doc(inline)]
pub use traits::publisher::Notifiable;

// Re-export types
#[doc(inline)]
pub use types::{
    AngleType, Attitude, Clock, MagneticField, MotionChannel, MotionReading, ReferenceFrame,
    UpdateInterval, XYZ,
};
