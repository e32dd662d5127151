use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{FileLoader, InferenceEndpoint, StagingStore};
use crate::application::services::{DocumentProcessor, InferenceClient, UploadStore};
use crate::domain::ExtensionAllowList;

#[derive(Clone)]
pub struct AppState {
    pub upload_store: Arc<UploadStore>,
    pub document_processor: Arc<DocumentProcessor>,
    pub inference_client: Arc<InferenceClient>,
    pub allow_list: Arc<ExtensionAllowList>,
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Wires the services over the given ports.
    pub fn new(
        staging_store: Arc<dyn StagingStore>,
        file_loader: Arc<dyn FileLoader>,
        endpoint: Arc<dyn InferenceEndpoint>,
        allow_list: ExtensionAllowList,
        static_dir: PathBuf,
        max_body_bytes: usize,
    ) -> Self {
        let upload_store = Arc::new(UploadStore::new(staging_store));
        let document_processor = Arc::new(DocumentProcessor::new(
            Arc::clone(&upload_store),
            file_loader,
        ));
        let inference_client = Arc::new(InferenceClient::new(endpoint));

        Self {
            upload_store,
            document_processor,
            inference_client,
            allow_list: Arc::new(allow_list),
            static_dir,
            max_body_bytes,
        }
    }
}
