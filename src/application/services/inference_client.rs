use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;

use crate::application::ports::{InferenceEndpoint, InferenceError};
use crate::domain::InferencePayload;

pub struct InferenceClient {
    endpoint: Arc<dyn InferenceEndpoint>,
}

impl InferenceClient {
    pub fn new(endpoint: Arc<dyn InferenceEndpoint>) -> Self {
        Self { endpoint }
    }

    /// Sends one request to the endpoint and returns its JSON answer as is.
    ///
    /// `documents: None` leaves the field out of the payload entirely.
    #[tracing::instrument(
        skip(self, message, documents),
        fields(document_count = documents.as_ref().map(Vec::len))
    )]
    pub async fn complete_chat(
        &self,
        message: &str,
        documents: Option<Vec<String>>,
    ) -> Result<Value, InferenceError> {
        let payload = match documents {
            Some(documents) => InferencePayload::with_documents(message, documents),
            None => InferencePayload::chat(message),
        };

        let body = serde_json::to_vec(&payload)
            .map_err(|e| InferenceError::InvalidRequest(e.to_string()))?;

        let response = self.endpoint.invoke(Bytes::from(body)).await?;

        serde_json::from_slice(&response).map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}
