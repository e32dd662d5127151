use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::application::ports::{InferenceEndpoint, InferenceError};

/// Inference endpoint reached by a plain JSON POST, e.g. a self-hosted
/// text-generation server.
pub struct HttpEndpoint {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpEndpoint {
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, InferenceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| InferenceError::RequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }
}

#[async_trait]
impl InferenceEndpoint for HttpEndpoint {
    async fn invoke(&self, body: Bytes) -> Result<Bytes, InferenceError> {
        tracing::debug!(url = %self.url, bytes = body.len(), "Invoking HTTP inference endpoint");

        let mut request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| InferenceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}
