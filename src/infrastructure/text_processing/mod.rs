mod composite_file_loader;
mod pdf_adapter;
mod plain_text_adapter;
mod text_decoder;

pub use composite_file_loader::CompositeFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_decoder::{DEFAULT_ENCODINGS, TextDecoder, TextDecoderError};
