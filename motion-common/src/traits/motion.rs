use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::types::MotionReading;
use crate::Notifiable;

/// One hardware motion subscription: lifecycle plus publication of the most
/// recent sample.
///
/// `start` arms the subscription and must flip `is_started` before returning;
/// `stop` cancels it. A delivered platform error also transitions the source
/// to stopped. The latest reading is overwritten on every delivery and `None`
/// before the first one.
pub trait MotionSource: Send + Sync {
    /// Returns the tag identifying this source.
    fn tag(&self) -> &str;

    /// Returns true while the underlying subscription is armed.
    fn is_started(&self) -> bool;

    /// Returns the most recent reading delivered so far, if any.
    fn latest(&self) -> Option<MotionReading>;

    /// Requests periodic motion updates. Re-issues the subscription when
    /// already started. Non-blocking.
    fn start(&self);

    /// Cancels the subscription. Safe to call repeatedly. Non-blocking.
    fn stop(&self);

    /// Registers a listener to be notified of every delivered reading.
    /// Returns the id of the registered listener.
    fn register_listener(&self, listener: &mut dyn Notifiable<MotionReading>) -> Uuid;

    /// Unregisters a listener with a given id.
    fn unregister_listener(&self, id: Uuid);
}

/// Consumer of motion readings.
#[async_trait]
pub trait MotionSink: Send + Sync {
    /// Subscribes this sink to a source. Returns the listener id.
    fn attach_listener(&self, source: &dyn MotionSource) -> Uuid;

    /// Unsubscribes a previously attached listener.
    fn detach_listener(&self, source: &dyn MotionSource, id: Uuid) {
        source.unregister_listener(id);
    }

    async fn process_reading(&self, listener_id: Uuid, reading: Arc<MotionReading>);
}
