// Acquisition of headphone motion from a paired headphone's sensor, exposed
// by the same companion-app HTTP bridge as the device sensor. Headphones
// deliver at the platform's own rate and reference frame, so no capture
// configuration is pushed.

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
const GET_CMD: &str = "/headphones/get?";
const CONTROL_CMD: &str = "/headphones/control?cmd=";
const START_CMD: &str = "start";
const STOP_CMD: &str = "stop";

/// Paired headphone motion sensor behind the bridge. Owns its own HTTP
/// handle; shares nothing with the device variant.
pub struct HeadphoneMotion {
    client: HttpClient,
    tag: String,
}

impl HeadphoneMotion {
    /// Creates a new `HeadphoneMotion` instance against the bridge base url.
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
    async fn get_reading(
        &self,
    ) -> Result<(Option<motion_common::types::MotionReading>, bool), SensorError> {
        let query = helpers::build_query();
        let data = self.client.fetch_json(&format!("{GET_CMD}{}", query)).await?;
        let measuring = helpers::get_status_from_json(&data)?;
        let reading = helpers::parse_reading(&data)?;
        Ok((reading, measuring))
    }

    async fn control(&self, command: &str) -> Result<(), SensorError> {
        self.client
            .fetch_json(&format!("{CONTROL_CMD}{}", command))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl MotionPort for HeadphoneMotion {
    async fn start_updates(
        &self,
        options: UpdateOptions,
        abort_signal: Arc<Notify>,
        feed: MotionFeed,
    ) -> Result<(), SensorError> {
        log::info!("Starting headphone motion capture...");
        self.control(START_CMD).await?;

        // Platform default delivery rate unless the caller asked otherwise.
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

        log::info!("Stopping headphone motion capture...");
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
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_headphone_adapter_stops_when_bridge_idle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/headphones/control"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
            .mount(&server)
            .await;
        let mut buffers = serde_json::Map::new();
        buffers.insert("motion_time".to_string(), json!({"buffer": []}));
        for var in helpers::MOTION_VARIABLES {
            buffers.insert(var.to_string(), json!({"buffer": []}));
        }
        Mock::given(method("GET"))
            .and(path("/headphones/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"buffer": buffers, "status": {"measuring": false}}),
            ))
            .mount(&server)
            .await;

        let headphones = HeadphoneMotion::new(&server.uri(), "Headphones").unwrap();
        let latest = Arc::new(RwLock::new(None));
        let feed = MotionFeed::new(latest.clone(), Publisher::new());

        // The bridge reports measuring == false, so the loop winds down on
        // its own without the abort signal ever firing.
        headphones
            .start_updates(UpdateOptions::headphone(), Arc::new(Notify::new()), feed)
            .await
            .unwrap();

        assert!(latest.read().unwrap().is_none());
    }
}
