mod chat;
mod files;
mod pages;
mod responses;
mod upload;

pub use chat::{ChatRequest, chat_handler, doc_chat_handler};
pub use files::{file_info_handler, list_files_handler, remove_file_handler};
pub use pages::{INDEX_PAGE, health_handler, index_handler};
pub use responses::{
    ApiError, ChatResponse, ERROR, ErrorResponse, FileDetails, SUCCESS, StatusResponse,
    UploadResponse, UploadSummary,
};
pub use upload::{FILES_FIELD, upload_handler};
