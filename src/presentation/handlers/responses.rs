use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::InferenceError;
use crate::application::services::UploadStoreError;
use crate::domain::UploadedFile;

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("File not found")]
    FileNotFound,
    #[error("{0}")]
    Storage(#[from] UploadStoreError),
    #[error("{0}")]
    Inference(#[from] InferenceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::FileNotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Inference(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        Self::Rejected {
            status: error.status(),
            message: format!("Failed to read multipart: {}", error.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                status: ERROR,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: SUCCESS }
    }
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub status: &'static str,
    pub response: Value,
}

impl ChatResponse {
    pub fn success(response: Value) -> Self {
        Self {
            status: SUCCESS,
            response,
        }
    }
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub files: Vec<UploadSummary>,
}

#[derive(Serialize)]
pub struct UploadSummary {
    pub id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct FileListResponse {
    pub status: &'static str,
    pub files: Vec<FileDetails>,
}

#[derive(Serialize)]
pub struct FileResponse {
    pub status: &'static str,
    pub file: FileDetails,
}

#[derive(Serialize)]
pub struct FileDetails {
    pub id: String,
    pub name: String,
    pub upload_time: DateTime<Utc>,
    pub processed: bool,
}

impl From<UploadedFile> for FileDetails {
    fn from(file: UploadedFile) -> Self {
        Self {
            id: file.id.to_string(),
            name: file.original_name,
            upload_time: file.upload_time,
            processed: file.processed,
        }
    }
}
