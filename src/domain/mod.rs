mod document_kind;
mod extension_allow_list;
mod file_id;
mod inference_payload;
mod storage_path;
mod uploaded_file;

pub use document_kind::DocumentKind;
pub use extension_allow_list::{DEFAULT_ALLOWED_EXTENSIONS, ExtensionAllowList, extension_of};
pub use file_id::FileId;
pub use inference_payload::{GenerationParameters, InferencePayload, MAX_NEW_TOKENS, TEMPERATURE};
pub use storage_path::StoragePath;
pub use uploaded_file::UploadedFile;
