use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sagemakerruntime::Client;
use aws_sdk_sagemakerruntime::config::Region;
use aws_sdk_sagemakerruntime::error::DisplayErrorContext;
use aws_sdk_sagemakerruntime::primitives::Blob;
use bytes::Bytes;

use crate::application::ports::{InferenceEndpoint, InferenceError};

/// A deployed SageMaker real-time endpoint.
pub struct SageMakerEndpoint {
    client: Client,
    endpoint_name: String,
}

impl SageMakerEndpoint {
    pub fn new(client: Client, endpoint_name: impl Into<String>) -> Self {
        Self {
            client,
            endpoint_name: endpoint_name.into(),
        }
    }

    /// Credentials come from the AWS default provider chain.
    pub async fn from_default_chain(region: String, endpoint_name: impl Into<String>) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;
        Self::new(Client::new(&config), endpoint_name)
    }
}

#[async_trait]
impl InferenceEndpoint for SageMakerEndpoint {
    async fn invoke(&self, body: Bytes) -> Result<Bytes, InferenceError> {
        tracing::debug!(
            endpoint = %self.endpoint_name,
            bytes = body.len(),
            "Invoking SageMaker endpoint"
        );

        let output = self
            .client
            .invoke_endpoint()
            .endpoint_name(&self.endpoint_name)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body.to_vec()))
            .send()
            .await
            .map_err(|e| InferenceError::RequestFailed(DisplayErrorContext(&e).to_string()))?;

        let body = output
            .body
            .filter(|body| !body.as_ref().is_empty())
            .ok_or_else(|| InferenceError::InvalidResponse("empty response body".to_string()))?;

        Ok(Bytes::from(body.into_inner()))
    }
}
