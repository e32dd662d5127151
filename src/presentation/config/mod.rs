mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_MAX_BODY_BYTES, DEFAULT_REGION, DecoderSettings, InferenceProvider, InferenceSettings,
    LoggingSettings, ServerSettings, Settings, UploadSettings,
};
