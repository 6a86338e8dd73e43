pub mod motion;
pub mod publisher;

pub use crate::traits::motion::{MotionSink, MotionSource};
pub use crate::traits::publisher::Notifiable;
