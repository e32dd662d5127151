mod endpoint_factory;
mod http_endpoint;
mod sagemaker_endpoint;

pub use endpoint_factory::{EndpointFactory, EndpointFactoryError};
pub use http_endpoint::HttpEndpoint;
pub use sagemaker_endpoint::SageMakerEndpoint;
