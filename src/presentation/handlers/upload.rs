use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use crate::domain::FileId;
use crate::presentation::state::AppState;

use super::responses::{ApiError, SUCCESS, UploadResponse, UploadSummary};

pub const FILES_FIELD: &str = "files";

/// Stores every allow-listed part of the `files` field and extracts its text
/// before answering. Parts with other extensions are dropped from the result.
///
/// The upload is all or nothing: if any part fails, files already stored by
/// this request are removed again.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut accepted = Vec::new();

    let files = match store_files(&state, multipart?, &mut accepted).await {
        Ok(files) => files,
        Err(e) => {
            roll_back(&state, &accepted).await;
            return Err(e);
        }
    };

    tracing::info!(accepted = files.len(), "Upload complete");

    Ok(Json(UploadResponse {
        status: SUCCESS,
        files,
    }))
}

async fn store_files(
    state: &AppState,
    mut multipart: Multipart,
    accepted: &mut Vec<FileId>,
) -> Result<Vec<UploadSummary>, ApiError> {
    let mut saw_file_part = false;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        saw_file_part = true;

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            tracing::debug!("Skipping file part without a filename");
            continue;
        }

        if !state.allow_list.is_allowed(&filename) {
            tracing::debug!(filename = %filename, "Skipping file with disallowed extension");
            continue;
        }

        let data = field.bytes().await?;
        let id = state.upload_store.put(&filename, data).await?;
        accepted.push(id);
        state.document_processor.process(&id).await;

        files.push(UploadSummary {
            id: id.to_string(),
            name: filename,
        });
    }

    if !saw_file_part {
        return Err(ApiError::Validation("No file part".to_string()));
    }

    Ok(files)
}

async fn roll_back(state: &AppState, accepted: &[FileId]) {
    for id in accepted {
        if let Err(e) = state.upload_store.remove(id).await {
            tracing::warn!(file_id = %id, error = %e, "Failed to roll back stored upload");
        }
    }

    if !accepted.is_empty() {
        tracing::info!(removed = accepted.len(), "Rolled back partial upload");
    }
}
