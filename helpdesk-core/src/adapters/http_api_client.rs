//! HTTP API client
//!
//! Posts form-encoded payloads to `{api_root}{path}` and unwraps the backend envelope
//! `{ "status": "success" | "fail", "message": ..., "data": ... }`.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::traits::ApiClient;
use crate::types::{ApiEnvelope, ApiStatus};

/// reqwest-based [`ApiClient`]
pub struct HttpApiClient {
    client: reqwest::Client,
    api_root: Url,
}

impl HttpApiClient {
    /// Create a client for `api_root` (e.g. `https://support.example.com/api`)
    pub fn new(api_root: &str, timeout: Duration) -> CoreResult<Self> {
        let api_root = Url::parse(api_root)
            .map_err(|e| CoreError::Config(format!("invalid API root '{api_root}': {e}")))?;
        if api_root.cannot_be_a_base() {
            return Err(CoreError::Config(format!(
                "API root '{api_root}' cannot be used as a base URL"
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self { client, api_root })
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    fn endpoint(&self, path: &str) -> CoreResult<Url> {
        let joined = format!(
            "{}/{}",
            self.api_root.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| CoreError::Config(format!("invalid endpoint {joined}: {e}")))
    }
}

/// Flatten a JSON object into form fields
fn form_fields(data: &serde_json::Value) -> CoreResult<Vec<(String, String)>> {
    let serde_json::Value::Object(map) = data else {
        return Err(CoreError::Validation(
            "request payload must be a JSON object".to_string(),
        ));
    };
    Ok(map
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect())
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn call(&self, path: &str, data: serde_json::Value) -> CoreResult<serde_json::Value> {
        let url = self.endpoint(path)?;
        let fields = form_fields(&data)?;
        log::debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .form(&fields)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Network(format!("{path} timed out"))
                } else {
                    CoreError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                path: path.to_string(),
                message: status.to_string(),
            });
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| CoreError::Serialization(e.to_string()))?;

        match envelope.status {
            ApiStatus::Success => Ok(envelope.data),
            ApiStatus::Fail => Err(CoreError::Api {
                path: path.to_string(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            }),
        }
    }
}
