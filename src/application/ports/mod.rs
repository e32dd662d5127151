mod file_loader;
mod inference_endpoint;
mod staging_store;

pub use file_loader::{FileLoader, FileLoaderError};
pub use inference_endpoint::{InferenceEndpoint, InferenceError};
pub use staging_store::{StagingStore, StagingStoreError};
