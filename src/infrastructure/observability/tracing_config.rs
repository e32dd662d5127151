/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

pub const DEFAULT_FILTER: &str = "info,docchat=debug,tower_http=debug";

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            json_format: false,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}
