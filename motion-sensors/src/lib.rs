//! # Crate motion-sensors
//!
//! ## motion-sensors
//!
//! The `motion-sensors` crate manages live device-motion subscriptions: one
//! source per physical sensor channel (the device itself, or a paired pair
//! of headphones), each publishing its most recent [`MotionReading`].
//!
//! Features include:
//! - Device and headphone sources behind one capability contract. The
//!   device variant requests a 1/15 s update interval and the
//!   x-magnetic-north/z-vertical reference frame; the headphone variant
//!   uses the platform defaults.
//! - Start/stop lifecycle with guaranteed cleanup: dropping a source tears
//!   down its hardware subscription on every exit path.
//! - Registration of listeners to be notified of every delivered reading,
//!   plus a polling-accessible latest value.
//! - A mock source that synthesizes readings for tests and demos.
//!
//! Platform errors are logged and transition the affected source to
//! stopped; they are never fatal to the process and there is no automatic
//! retry.
//!
//! [`MotionReading`]: motion_common::types::MotionReading

pub(crate) mod adapters;
pub(crate) mod constants;
mod helpers;
mod http_client;
pub(crate) mod models;
pub mod ports;
pub mod services;

pub use models::errors::SensorError;
pub use ports::{MotionPort, UpdateOptions};
pub use services::{
    run_device_service, run_headphone_service, run_mock_service, DeviceMotionService,
    HeadphoneMotionService, MockMotionService, MotionFeed, MotionService,
};
