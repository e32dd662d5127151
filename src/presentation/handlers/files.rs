use axum::Json;
use axum::extract::{Path, State};

use crate::domain::FileId;
use crate::presentation::state::AppState;

use super::responses::{ApiError, FileListResponse, FileResponse, SUCCESS, StatusResponse};

fn parse_file_id(raw: &str) -> Result<FileId, ApiError> {
    raw.parse().map_err(|_| ApiError::FileNotFound)
}

#[tracing::instrument(skip(state))]
pub async fn remove_file_handler(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = parse_file_id(&file_id)?;

    if !state.upload_store.remove(&id).await? {
        return Err(ApiError::FileNotFound);
    }

    tracing::info!(file_id = %id, "File removed");
    Ok(Json(StatusResponse::success()))
}

#[tracing::instrument(skip(state))]
pub async fn file_info_handler(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let id = parse_file_id(&file_id)?;
    let file = state.upload_store.get(&id).ok_or(ApiError::FileNotFound)?;

    Ok(Json(FileResponse {
        status: SUCCESS,
        file: file.into(),
    }))
}

pub async fn list_files_handler(State(state): State<AppState>) -> Json<FileListResponse> {
    Json(FileListResponse {
        status: SUCCESS,
        files: state
            .upload_store
            .list()
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}
