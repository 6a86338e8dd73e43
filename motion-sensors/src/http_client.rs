use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;

use crate::models::errors::SensorError;

const CLIENT_TIMEOUT_DEFAULT: u64 = 5;

pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(base_url: String) -> Result<Self, SensorError> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_DEFAULT))
            .build()
            .map_err(|e| SensorError::ClientBuild(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub(crate) async fn fetch_json(&self, path: &str) -> Result<Value, SensorError> {
        // Example of data returned by the bridge
        //  /get?motion_time&pitch&roll&yaw&...
        // {"buffer":{"pitch":{"buffer":[0.1052],"size":1,"updateMode":"single"},
        //            "roll":{"buffer":[-0.0211],"size":1,"updateMode":"single"},
        //            ...
        //            "motion_time":{"buffer":[2.5006],"size":1,"updateMode":"single"}},
        // "status":{"measuring":true,"session":"11114880"}}
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SensorError::FetchData(e.to_string()))?;

        let json: Value = response
            .json()
            .await
            .map_err(|e| SensorError::FetchData(e.to_string()))?;
        Ok(json)
    }
}
