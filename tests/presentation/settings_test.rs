use docchat::presentation::config::{
    DEFAULT_MAX_BODY_BYTES, Environment, InferenceProvider, Settings,
};

#[test]
fn given_no_sources_when_using_defaults_then_matches_documented_values() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.max_body_bytes, 16 * 1024 * 1024);
    assert_eq!(settings.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert_eq!(settings.upload.directory, "uploads");
    assert_eq!(
        settings.upload.allowed_extensions,
        vec!["txt", "md", "csv", "json", "pdf"]
    );
    assert_eq!(settings.decoder.encodings.first().map(String::as_str), Some("utf-8"));
    assert_eq!(settings.inference.provider, InferenceProvider::SageMaker);
    assert!(settings.inference.timeout_seconds.is_none());
    assert!(!settings.logging.json);
}

#[test]
fn given_settings_file_when_loading_then_file_values_override_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.custom.toml"),
        r#"
[server]
port = 8081

[upload]
directory = "/var/lib/docchat"
allowed_extensions = ["txt", "log"]

[inference]
provider = "http"
url = "http://localhost:8080/generate"
timeout_seconds = 45
"#,
    )
    .unwrap();

    let file_name = dir.path().join("appsettings.custom");
    let settings = Settings::load_with_file(file_name.to_str().unwrap()).unwrap();

    assert_eq!(settings.server.port, 8081);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.upload.directory, "/var/lib/docchat");
    assert_eq!(settings.upload.allowed_extensions, vec!["txt", "log"]);
    assert_eq!(settings.inference.provider, InferenceProvider::Http);
    assert_eq!(
        settings.inference.url.as_deref(),
        Some("http://localhost:8080/generate")
    );
    assert_eq!(settings.inference.timeout_seconds, Some(45));
}

#[test]
fn given_missing_settings_file_when_loading_then_defaults_are_used() {
    let dir = tempfile::TempDir::new().unwrap();
    let file_name = dir.path().join("appsettings.absent");

    let settings = Settings::load_with_file(file_name.to_str().unwrap()).unwrap();

    assert_eq!(settings.upload.directory, "uploads");
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values() {
    assert_eq!(
        Environment::try_from("LOCAL".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
}

#[test]
fn given_unknown_environment_when_parsing_then_returns_error() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_displayed_then_is_lowercase() {
    assert_eq!(Environment::Prod.to_string(), "prod");
}
