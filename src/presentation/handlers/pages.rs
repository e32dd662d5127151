use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::presentation::state::AppState;

use super::responses::StatusResponse;

pub const INDEX_PAGE: &str = "index.html";

pub async fn index_handler(State(state): State<AppState>) -> Response {
    let path = state.static_dir.join(INDEX_PAGE);
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Landing page unavailable");
            (StatusCode::NOT_FOUND, Html("<h1>Not Found</h1>")).into_response()
        }
    }
}

pub async fn health_handler() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse { status: "healthy" })
}
