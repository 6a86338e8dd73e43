use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use motion_common::types::{ReferenceFrame, UpdateInterval};

use crate::models::errors::SensorError;
use crate::services::MotionFeed;

/// Options carried by one subscription request.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateOptions {
    pub interval: UpdateInterval,
    pub reference_frame: ReferenceFrame,
}

impl UpdateOptions {
    /// Options used by the device motion variant: 1/15 s updates with the
    /// horizontal x axis aligned to magnetic north.
    pub fn device() -> Self {
        Self {
            interval: UpdateInterval::device_default(),
            reference_frame: ReferenceFrame::XMagneticNorthZVertical,
        }
    }

    /// Options used by the headphone motion variant: platform defaults.
    pub fn headphone() -> Self {
        Self::default()
    }
}

/// Platform motion capability consumed by a [`MotionService`].
///
/// `start_updates` delivers readings into `feed` until the abort signal
/// fires or the platform fails; a returned error means the subscription is
/// over. `stop_updates` semantics are carried by the abort signal, which is
/// idempotent on the caller side.
///
/// [`MotionService`]: crate::services::MotionService
#[async_trait]
pub trait MotionPort: Send + Sync + 'static {
    async fn start_updates(
        &self,
        options: UpdateOptions,
        abort_signal: Arc<Notify>,
        feed: MotionFeed,
    ) -> Result<(), SensorError>;

    fn tag(&self) -> &str;
}
