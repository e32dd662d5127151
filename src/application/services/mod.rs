mod document_processor;
mod inference_client;
mod upload_store;

pub use document_processor::{DocumentError, DocumentProcessor};
pub use inference_client::InferenceClient;
pub use upload_store::{UploadStore, UploadStoreError};
