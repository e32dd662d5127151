use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::InferenceEndpoint;
use crate::presentation::config::{InferenceProvider, InferenceSettings};

use super::{HttpEndpoint, SageMakerEndpoint};

pub struct EndpointFactory;

#[derive(Debug, thiserror::Error)]
pub enum EndpointFactoryError {
    #[error("missing endpoint name: set SAGEMAKER_ENDPOINT_NAME or inference.endpoint_name")]
    MissingEndpointName,
    #[error("missing url: the http provider requires inference.url")]
    MissingUrl,
    #[error("endpoint initialization failed: {0}")]
    InitializationFailed(String),
}

impl EndpointFactory {
    pub async fn create(
        settings: &InferenceSettings,
    ) -> Result<Arc<dyn InferenceEndpoint>, EndpointFactoryError> {
        match settings.provider {
            InferenceProvider::SageMaker => {
                let endpoint_name = settings
                    .endpoint_name
                    .clone()
                    .filter(|n| !n.is_empty())
                    .ok_or(EndpointFactoryError::MissingEndpointName)?;
                tracing::info!(
                    region = %settings.region,
                    endpoint = %endpoint_name,
                    "Using SageMaker inference endpoint"
                );
                let endpoint =
                    SageMakerEndpoint::from_default_chain(settings.region.clone(), endpoint_name)
                        .await;
                Ok(Arc::new(endpoint))
            }
            InferenceProvider::Http => {
                let url = settings
                    .url
                    .clone()
                    .filter(|u| !u.is_empty())
                    .ok_or(EndpointFactoryError::MissingUrl)?;
                tracing::info!(url = %url, "Using HTTP inference endpoint");
                let endpoint = HttpEndpoint::new(
                    url,
                    settings.api_key.clone(),
                    settings.timeout_seconds.map(Duration::from_secs),
                )
                .map_err(|e| EndpointFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(endpoint))
            }
        }
    }
}
