use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use log::error;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use uuid::Uuid;

use motion_common::traits::{MotionSource, Notifiable};
use motion_common::types::MotionReading;
use publisher::{Publishable, Publisher};

use crate::adapters::device::DeviceMotion;
use crate::adapters::headphone::HeadphoneMotion;
use crate::adapters::mock::MockMotion;
use crate::models::errors::SensorError;
use crate::models::shutdown;
use crate::ports::{MotionPort, UpdateOptions};

/// Store-latest-then-notify channel between a platform client and the
/// service that owns it.
#[derive(Clone)]
pub struct MotionFeed {
    latest: Arc<RwLock<Option<MotionReading>>>,
    publisher: Publisher<MotionReading>,
}

impl MotionFeed {
    pub(crate) fn new(
        latest: Arc<RwLock<Option<MotionReading>>>,
        publisher: Publisher<MotionReading>,
    ) -> Self {
        Self { latest, publisher }
    }

    /// Stores `reading` as the latest value, overwriting any previous one,
    /// then notifies every registered listener with exactly that reading.
    pub async fn deliver(&self, reading: MotionReading) {
        *self.latest.write().unwrap() = Some(reading);
        self.publisher.notify_listeners(Arc::new(reading)).await;
    }
}

/// One motion source: wraps a platform client `C` with the start/stop
/// lifecycle, the latest-reading slot and listener registration.
///
/// `start` arms the subscription and returns immediately; readings arrive on
/// a background acquisition task. A platform error is logged, tears down the
/// subscription and leaves the latest reading untouched; the service must be
/// started again manually. Dropping the service aborts the acquisition task
/// on every exit path.
pub struct MotionService<C>
where
    C: MotionPort,
{
    client: Arc<C>,
    options: UpdateOptions,
    latest: Arc<RwLock<Option<MotionReading>>>,
    publisher: Publisher<MotionReading>,
    started: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
    abort_signal: Mutex<Arc<Notify>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<C> MotionService<C>
where
    C: MotionPort,
{
    /// Creates a new service around the given platform client. The service
    /// starts in the stopped state with no reading.
    pub fn new(client: C, options: UpdateOptions) -> Self {
        Self {
            client: Arc::new(client),
            options,
            latest: Arc::new(RwLock::new(None)),
            publisher: Publisher::new(),
            started: Arc::new(AtomicBool::new(false)),
            epoch: Arc::new(AtomicU64::new(0)),
            abort_signal: Mutex::new(Arc::new(Notify::new())),
            task: Mutex::new(None),
        }
    }
}

impl<C> MotionSource for MotionService<C>
where
    C: MotionPort,
{
    fn tag(&self) -> &str {
        self.client.tag()
    }

    fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    fn latest(&self) -> Option<MotionReading> {
        *self.latest.read().unwrap()
    }

    fn start(&self) {
        let abort_signal = Arc::new(Notify::new());
        {
            // Re-arm: wind down any previous acquisition task first.
            let mut current = self.abort_signal.lock().unwrap();
            current.notify_one();
            *current = abort_signal.clone();
        }
        let my_epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.started.store(true, Ordering::SeqCst);

        let client = self.client.clone();
        let options = self.options;
        let feed = MotionFeed::new(self.latest.clone(), self.publisher.clone());
        let started = self.started.clone();
        let epoch = self.epoch.clone();
        let handle = tokio::spawn(async move {
            if let Err(e) = client.start_updates(options, abort_signal, feed).await {
                error!("{} motion updates ran into an error: {:?}", client.tag(), e);
            }
            // The subscription is over, however it ended. A superseded task
            // must not clobber the re-armed state.
            if epoch.load(Ordering::SeqCst) == my_epoch {
                started.store(false, Ordering::SeqCst);
            }
        });
        let _ = self.task.lock().unwrap().replace(handle);
    }

    fn stop(&self) {
        self.abort_signal.lock().unwrap().notify_one();
        self.started.store(false, Ordering::SeqCst);
    }

    fn register_listener(&self, listener: &mut dyn Notifiable<MotionReading>) -> Uuid {
        self.publisher.register_listener(listener)
    }

    fn unregister_listener(&self, id: Uuid) {
        let _ = self.publisher.unregister_listener(id);
    }
}

impl<C> Drop for MotionService<C>
where
    C: MotionPort,
{
    fn drop(&mut self) {
        self.abort_signal.lock().unwrap().notify_one();
        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
        self.started.store(false, Ordering::SeqCst);
    }
}

pub type DeviceMotionService = MotionService<DeviceMotion>;
pub type HeadphoneMotionService = MotionService<HeadphoneMotion>;
pub type MockMotionService = MotionService<MockMotion>;

impl DeviceMotionService {
    /// Creates the device variant against a bridge base url: 1/15 s update
    /// interval, x axis aligned to magnetic north, z vertical.
    pub fn from_bridge(base_url: &str, tag: &str) -> Result<Self, SensorError> {
        let client = DeviceMotion::new(base_url, tag)?;
        Ok(MotionService::new(client, UpdateOptions::device()))
    }
}

impl HeadphoneMotionService {
    /// Creates the headphone variant against a bridge base url: platform
    /// default interval and reference frame.
    pub fn from_bridge(base_url: &str, tag: &str) -> Result<Self, SensorError> {
        let client = HeadphoneMotion::new(base_url, tag)?;
        Ok(MotionService::new(client, UpdateOptions::headphone()))
    }
}

/// Starts the device motion service, acquiring data in a background task.
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` that resolves once the service has been
///   stopped by Ctrl+C (or after `run_for_millis`, when given).
/// * An `Arc<DeviceMotionService>` for interacting with the source.
///
/// An error ClientBuild is returned if the HTTP client connecting to the
/// bridge cannot be created.
pub fn run_device_service(
    base_url: &str,
    tag: &str,
    run_for_millis: Option<u64>,
) -> Result<(JoinHandle<()>, Arc<DeviceMotionService>), SensorError> {
    let service = Arc::new(DeviceMotionService::from_bridge(base_url, tag)?);
    service.start();
    let handle = shutdown::listen_for_shutdown(Arc::downgrade(&service), run_for_millis);
    Ok((handle, service))
}

/// Starts the headphone motion service. See [`run_device_service`].
pub fn run_headphone_service(
    base_url: &str,
    tag: &str,
    run_for_millis: Option<u64>,
) -> Result<(JoinHandle<()>, Arc<HeadphoneMotionService>), SensorError> {
    let service = Arc::new(HeadphoneMotionService::from_bridge(base_url, tag)?);
    service.start();
    let handle = shutdown::listen_for_shutdown(Arc::downgrade(&service), run_for_millis);
    Ok((handle, service))
}

/// Starts a mock motion service that synthesizes readings.
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` that resolves once the service has been
///   stopped by Ctrl+C (or after `run_for_millis`, when given).
/// * An `Arc<MockMotionService>` for interacting with the source.
pub fn run_mock_service(
    tag: &str,
    capture_period_millis: f64,
    add_sensor_noise: bool,
    fail_after: Option<usize>,
    run_for_millis: Option<u64>,
) -> Result<(JoinHandle<()>, Arc<MockMotionService>), SensorError> {
    let client = MockMotion::new(tag, capture_period_millis, add_sensor_noise, fail_after)?;
    let service = Arc::new(MotionService::new(client, UpdateOptions::headphone()));
    service.start();
    let handle = shutdown::listen_for_shutdown(Arc::downgrade(&service), run_for_millis);
    Ok((handle, service))
}
