use async_trait::async_trait;
use bytes::Bytes;

/// Remote model that takes a JSON request body and answers with a JSON body.
#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    async fn invoke(&self, body: Bytes) -> Result<Bytes, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("endpoint request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
