mod init_tracing;
mod request_id;
mod text_preview;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use text_preview::preview_text;
pub use tracing_config::{DEFAULT_FILTER, TracingConfig};
