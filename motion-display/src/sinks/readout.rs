use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use motion_common::traits::{MotionSink, MotionSource};
use motion_common::types::MotionReading;
use publisher::{listener, Listener};

/// Caches the newest reading per source tag so the readout can render at
/// its own pace. Values survive a source stopping or erroring: the screen
/// freezes on the last delivered reading until the source is restarted.
#[derive(Clone, Default)]
pub struct ReadoutSink {
    control: Arc<DashMap<Uuid, String>>,
    latest: Arc<DashMap<String, MotionReading>>,
}

impl ReadoutSink {
    pub fn new() -> Self {
        Self {
            control: Arc::new(DashMap::new()),
            latest: Arc::new(DashMap::new()),
        }
    }

    /// Newest reading received from the source with the given tag.
    pub fn latest_for(&self, tag: &str) -> Option<MotionReading> {
        self.latest.get(tag).map(|entry| *entry.value())
    }
}

#[async_trait]
impl MotionSink for ReadoutSink {
    fn attach_listener(&self, source: &dyn MotionSource) -> Uuid {
        let mut listener = listener!(self.process_reading);
        let id = source.register_listener(&mut listener);
        self.control.insert(id, source.tag().to_string());
        id
    }

    fn detach_listener(&self, source: &dyn MotionSource, id: Uuid) {
        source.unregister_listener(id);
        self.control.remove(&id);
    }

    async fn process_reading(&self, listener_id: Uuid, reading: Arc<MotionReading>) {
        if let Some(tag) = self.control.get(&listener_id) {
            self.latest.insert(tag.value().clone(), *reading);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_common::types::{Attitude, MagneticField, XYZ};

    fn reading(timestamp: f64) -> MotionReading {
        MotionReading::new(
            timestamp,
            Attitude::new(0.1, 0.2, 0.3),
            XYZ::default(),
            XYZ::default(),
            XYZ::new([0.0, 0.0, -1.0]),
            MagneticField::new(XYZ::default(), None),
        )
    }

    #[tokio::test]
    async fn test_process_reading_overwrites_per_tag() {
        let sink = ReadoutSink::new();
        let id = Uuid::new_v4();
        sink.control.insert(id, "Device".to_string());

        sink.process_reading(id, Arc::new(reading(1.0))).await;
        assert_eq!(sink.latest_for("Device"), Some(reading(1.0)));

        sink.process_reading(id, Arc::new(reading(2.0))).await;
        assert_eq!(sink.latest_for("Device"), Some(reading(2.0)));
        assert_eq!(sink.latest_for("Headphones"), None);
    }

    #[tokio::test]
    async fn test_unknown_listener_is_ignored() {
        let sink = ReadoutSink::new();
        sink.process_reading(Uuid::new_v4(), Arc::new(reading(1.0)))
            .await;
        assert!(sink.latest.is_empty());
    }
}
