use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::domain::DEFAULT_ALLOWED_EXTENSIONS;
use crate::infrastructure::observability::DEFAULT_FILTER;
use crate::infrastructure::text_processing::DEFAULT_ENCODINGS;

use super::Environment;

pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub decoder: DecoderSettings,
    pub inference: InferenceSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<environment>.toml`, `APP__*` variables and the
    /// `AWS_REGION` / `SAGEMAKER_ENDPOINT_NAME` variables over the defaults.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_with_file(&format!("appsettings.{}", environment.as_str()))
    }

    pub fn load_with_file(file_name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(file_name).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_extensions")
                    .with_list_parse_key("decoder.encodings")
                    .try_parsing(true),
            )
            .set_override_option("inference.region", std::env::var("AWS_REGION").ok())?
            .set_override_option(
                "inference.endpoint_name",
                std::env::var("SAGEMAKER_ENDPOINT_NAME").ok(),
            )?
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: "static".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub directory: String,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            directory: "uploads".to_string(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecoderSettings {
    /// WHATWG labels tried in order before the lossy fallback.
    pub encodings: Vec<String>,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            encodings: DEFAULT_ENCODINGS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceProvider {
    #[default]
    #[serde(rename = "sagemaker")]
    SageMaker,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    pub provider: InferenceProvider,
    pub region: String,
    pub endpoint_name: Option<String>,
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            provider: InferenceProvider::default(),
            region: DEFAULT_REGION.to_string(),
            endpoint_name: None,
            url: None,
            api_key: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_FILTER.to_string(),
            json: false,
        }
    }
}
