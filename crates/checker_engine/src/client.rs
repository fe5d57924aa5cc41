use std::time::Duration;

use serde_json::Value;

use crate::{CheckError, CheckFailure};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Full URL of the scan endpoint.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/check".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Seam for the scan endpoint, so tests can substitute the transport.
#[async_trait::async_trait]
pub trait ScanClient: Send + Sync {
    async fn check(&self, url: &str) -> Result<Value, CheckError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScanClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestScanClient {
    pub fn new(settings: ClientSettings) -> Result<Self, CheckError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CheckError::new(CheckFailure::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ScanClient for ReqwestScanClient {
    async fn check(&self, url: &str) -> Result<Value, CheckError> {
        let response = self
            .client
            .post(&self.settings.endpoint)
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies carry `{"error": "..."}`; fall back to the
            // bare status line when there is none.
            let server_message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                });
            let message = server_message
                .clone()
                .unwrap_or_else(|| status.to_string());
            return Err(CheckError::new(
                CheckFailure::HttpStatus {
                    status: status.as_u16(),
                    server_message,
                },
                message,
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| CheckError::new(CheckFailure::MalformedBody, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CheckError {
    if err.is_timeout() {
        return CheckError::new(CheckFailure::Timeout, err.to_string());
    }
    CheckError::new(CheckFailure::Network, err.to_string())
}
