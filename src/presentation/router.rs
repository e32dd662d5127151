use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chat_handler, doc_chat_handler, file_info_handler, health_handler, index_handler,
    list_files_handler, remove_file_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/doc-chat", post(doc_chat_handler))
        .route("/upload", post(upload_handler))
        .route("/files", get(list_files_handler))
        .route("/files/{file_id}", get(file_info_handler))
        .route("/remove-file/{file_id}", delete(remove_file_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
