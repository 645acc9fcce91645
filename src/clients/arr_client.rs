use std::time::Duration;

use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::clients::ensure_success;
use crate::config::app_config::ServiceEndpoint;
use crate::models::errors::ClientError;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Submits JSON payloads to a self-hosted *arr-style service that
/// authenticates with an `X-Api-Key` header.
pub struct ArrClient {
    client: reqwest::Client,
    service: &'static str,
    endpoint: ServiceEndpoint,
    timeout: Duration,
}

impl ArrClient {
    pub fn new(
        client: reqwest::Client,
        service: &'static str,
        endpoint: ServiceEndpoint,
        timeout: Duration,
    ) -> Self {
        Self { client, service, endpoint, timeout }
    }

    pub fn check_configured(&self) -> Result<(), ClientError> {
        self.credentials().map(|_| ())
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<Value, ClientError> {
        let (base_url, api_key) = self.credentials()?;

        let result = self.client.post(format!("{}{}", base_url, path))
            .header(API_KEY_HEADER, api_key)
            .json(payload)
            .send().await
            .map_err(|err| ClientError::from_reqwest(err, self.timeout))?;

        info!("POST {} {}", result.url(), result.status());
        ensure_success(&result)?;

        let body = result.text().await
            .map_err(|err| ClientError::from_reqwest(err, self.timeout))?;

        Ok(acknowledgment(body))
    }

    fn credentials(&self) -> Result<(&str, &str), ClientError> {
        match (&self.endpoint.base_url, &self.endpoint.api_key) {
            (Some(base_url), Some(api_key)) => Ok((base_url.as_str(), api_key.as_str())),
            _ => Err(ClientError::Configuration { service: self.service }),
        }
    }
}

/// The upstream body is handed back as-is; non-JSON bodies become a string.
fn acknowledgment(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}
