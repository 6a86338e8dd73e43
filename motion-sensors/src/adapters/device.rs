// Acquisition of device motion (attitude, rotation rate, user acceleration,
// gravity, magnetic field and heading) from the on-device sensor, exposed by
// a companion-app HTTP bridge. Includes methods to fetch the latest sample,
// control the capture, and push each sample into the owning service's feed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::constants::DEFAULT_POLL_PERIOD_SECS;
use crate::helpers;
use crate::http_client::HttpClient;
use crate::models::errors::SensorError;
use crate::ports::{MotionPort, UpdateOptions};
use crate::services::MotionFeed;

/// Constants for HTTP endpoints.
const GET_CMD: &str = "/get?";
const CONTROL_CMD: &str = "/control?cmd=";
const CONFIG_CMD: &str = "/config?";
const START_CMD: &str = "start";
const STOP_CMD: &str = "stop";

/// On-device motion sensor behind the bridge. Owns its own HTTP handle.
pub struct DeviceMotion {
    client: HttpClient,
    tag: String,
}

impl DeviceMotion {
    /// Creates a new `DeviceMotion` instance against the bridge base url.
    /// Returns a ClientBuild error if the HTTP client cannot be created.
    pub(crate) fn new(base_url: &str, tag: &str) -> Result<Self, SensorError> {
        let client = HttpClient::new(base_url.to_string())?;

        Ok(Self {
            client,
            tag: tag.to_string(),
        })
    }

    /// Returns the newest snapshot and a flag indicating whether the bridge
    /// is still measuring.
    /// # Errors
    /// - FetchData if there is an error connecting to the bridge
    /// - IncorrectDataFormat if the payload has an unexpected shape
    async fn get_reading(
        &self,
    ) -> Result<(Option<motion_common::types::MotionReading>, bool), SensorError> {
        let query = helpers::build_query();
        let data = self.client.fetch_json(&format!("{GET_CMD}{}", query)).await?;
        let measuring = helpers::get_status_from_json(&data)?;
        let reading = helpers::parse_reading(&data)?;
        Ok((reading, measuring))
    }

    /// Sends a control command to the bridge.
    async fn control(&self, command: &str) -> Result<(), SensorError> {
        self.client
            .fetch_json(&format!("{CONTROL_CMD}{}", command))
            .await?;
        Ok(())
    }

    // Pushes the requested interval and reference frame to the bridge
    async fn configure(&self, options: &UpdateOptions) -> Result<(), SensorError> {
        let period = options
            .interval
            .period_or(Duration::from_secs_f64(DEFAULT_POLL_PERIOD_SECS));
        let query = format!(
            "interval={:.4}&frame={}",
            period.as_secs_f64(),
            options.reference_frame.as_str()
        );
        self.client
            .fetch_json(&format!("{CONFIG_CMD}{}", query))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl MotionPort for DeviceMotion {
    async fn start_updates(
        &self,
        options: UpdateOptions,
        abort_signal: Arc<Notify>,
        feed: MotionFeed,
    ) -> Result<(), SensorError> {
        self.configure(&options).await?;
        log::info!("Starting device motion capture...");
        self.control(START_CMD).await?;

        let period = options
            .interval
            .period_or(Duration::from_secs_f64(DEFAULT_POLL_PERIOD_SECS));

        loop {
            tokio::select! {
                _ = abort_signal.notified() => {
                    break;
                }

                _ = tokio::time::sleep(period) => {
                    let (reading, measuring) = match self.get_reading().await {
                        Ok(tick) => tick,
                        Err(e) => {
                            let _ = self.control(STOP_CMD).await;
                            return Err(e);
                        }
                    };

                    if !measuring {
                        log::info!("Bridge stopped measuring.");
                        break;
                    }

                    if let Some(reading) = reading {
                        feed.deliver(reading).await;
                    }
                }
            }
        }

        log::info!("Stopping device motion capture...");
        self.control(STOP_CMD).await?;
        Ok(())
    }

    fn tag(&self) -> &str {
        self.tag.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use publisher::Publisher;
    use serde_json::json;
    use std::sync::RwLock;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn bridge_payload() -> serde_json::Value {
        let mut buffers = serde_json::Map::new();
        buffers.insert("motion_time".to_string(), json!({"buffer": [1.25]}));
        for var in helpers::MOTION_VARIABLES {
            let value = if var == "heading" { 90.0 } else { 0.5 };
            buffers.insert(var.to_string(), json!({ "buffer": [value] }));
        }
        json!({"buffer": buffers, "status": {"measuring": true}})
    }

    async fn mock_bridge() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/control"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(bridge_payload()))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_device_adapter_delivers_readings() {
        let server = mock_bridge().await;
        let device = DeviceMotion::new(&server.uri(), "Device").unwrap();

        let latest = Arc::new(RwLock::new(None));
        let feed = MotionFeed::new(latest.clone(), Publisher::new());
        let abort_signal = Arc::new(Notify::new());

        let abort_clone = abort_signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(400)).await;
            abort_clone.notify_one();
        });

        device
            .start_updates(UpdateOptions::device(), abort_signal, feed)
            .await
            .unwrap();

        let reading = latest.read().unwrap().unwrap();
        assert_eq!(reading.timestamp(), 1.25);
        assert_eq!(reading.magnetic_field().heading(), Some(90.0));
    }

    #[tokio::test]
    async fn test_device_adapter_sends_reference_frame() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config"))
            .and(query_param("frame", "xMagneticNorthZVertical"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
            .expect(1)
            .mount(&server)
            .await;

        let device = DeviceMotion::new(&server.uri(), "Device").unwrap();
        device.configure(&UpdateOptions::device()).await.unwrap();
    }

    #[tokio::test]
    async fn test_device_adapter_fetch_error() {
        // No bridge listening: the subscription must end with an error.
        let device = DeviceMotion::new("http://127.0.0.1:9", "Device").unwrap();

        let feed = MotionFeed::new(Arc::new(RwLock::new(None)), Publisher::new());
        let result = device
            .start_updates(UpdateOptions::device(), Arc::new(Notify::new()), feed)
            .await;

        assert!(result.is_err());
    }
}
