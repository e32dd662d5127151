use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use docchat::domain::ExtensionAllowList;
use docchat::infrastructure::inference::EndpointFactory;
use docchat::infrastructure::observability::{TracingConfig, init_tracing};
use docchat::infrastructure::storage::LocalStagingStore;
use docchat::infrastructure::text_processing::{CompositeFileLoader, TextDecoder};
use docchat::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        json_format: settings.logging.json,
        default_filter: settings.logging.level.clone(),
    });

    let decoder = TextDecoder::new(&settings.decoder.encodings)?;
    tracing::info!(encodings = ?decoder.encoding_names(), "Text decoder configured");

    let staging_store = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.upload.directory,
    ))?);
    let file_loader = Arc::new(CompositeFileLoader::with_decoder(decoder));
    let endpoint = EndpointFactory::create(&settings.inference).await?;

    let state = AppState::new(
        staging_store,
        file_loader,
        endpoint,
        ExtensionAllowList::new(&settings.upload.allowed_extensions),
        PathBuf::from(&settings.server.static_dir),
        settings.server.max_body_bytes,
    );

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(upload_dir = %settings.upload.directory, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
