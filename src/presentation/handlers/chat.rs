use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::responses::{ApiError, ChatResponse};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "document_ids")]
    pub documents: Option<Vec<String>>,
}

impl ChatRequest {
    fn validated_message(&self) -> Result<&str, ApiError> {
        if self.message.is_empty() {
            return Err(ApiError::Validation("No message provided".to_string()));
        }
        Ok(&self.message)
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let message = request.validated_message()?;

    tracing::debug!(message = %preview_text(message), "Processing chat");

    let response = state.inference_client.complete_chat(message, None).await?;

    tracing::info!("Chat completion successful");
    Ok(Json(ChatResponse::success(response)))
}

#[tracing::instrument(skip(state, payload))]
pub async fn doc_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let message = request.validated_message()?;
    let requested = request.documents.as_deref().unwrap_or_default();

    let documents = state.document_processor.collect_texts(requested).await;

    tracing::debug!(
        message = %preview_text(message),
        requested = requested.len(),
        resolved = documents.len(),
        "Processing document chat"
    );

    let response = state
        .inference_client
        .complete_chat(message, Some(documents))
        .await?;

    tracing::info!("Document chat completion successful");
    Ok(Json(ChatResponse::success(response)))
}
