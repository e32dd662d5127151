use docchat::infrastructure::inference::{EndpointFactory, EndpointFactoryError};
use docchat::presentation::{InferenceProvider, InferenceSettings};

#[tokio::test]
async fn given_sagemaker_without_endpoint_name_when_creating_then_returns_missing_endpoint_name() {
    let settings = InferenceSettings {
        provider: InferenceProvider::SageMaker,
        endpoint_name: None,
        ..InferenceSettings::default()
    };

    let result = EndpointFactory::create(&settings).await;

    assert!(matches!(
        result,
        Err(EndpointFactoryError::MissingEndpointName)
    ));
}

#[tokio::test]
async fn given_sagemaker_with_blank_endpoint_name_when_creating_then_returns_missing_endpoint_name()
{
    let settings = InferenceSettings {
        provider: InferenceProvider::SageMaker,
        endpoint_name: Some(String::new()),
        ..InferenceSettings::default()
    };

    let result = EndpointFactory::create(&settings).await;

    assert!(matches!(
        result,
        Err(EndpointFactoryError::MissingEndpointName)
    ));
}

#[tokio::test]
async fn given_http_provider_without_url_when_creating_then_returns_missing_url() {
    let settings = InferenceSettings {
        provider: InferenceProvider::Http,
        url: None,
        ..InferenceSettings::default()
    };

    let result = EndpointFactory::create(&settings).await;

    assert!(matches!(result, Err(EndpointFactoryError::MissingUrl)));
}

#[tokio::test]
async fn given_http_provider_with_url_when_creating_then_succeeds() {
    let settings = InferenceSettings {
        provider: InferenceProvider::Http,
        url: Some("http://127.0.0.1:8080/generate".to_string()),
        timeout_seconds: Some(30),
        ..InferenceSettings::default()
    };

    let result = EndpointFactory::create(&settings).await;

    assert!(result.is_ok());
}
