// Engine main entry point
use engine::config::settings::EngineSettings;
use engine::services::{LocaleNumberFormatServer, NumberFormatEngine};
use tonic::transport::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting locale number format engine...");

    let settings = EngineSettings::load()?;
    let addr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!(
        default_locale = %settings.default_locale,
        fallback_thousands = %settings.fallback_separators.thousands,
        fallback_decimal = %settings.fallback_separators.decimal,
        "Engine will listen on {}", addr
    );

    let service = NumberFormatEngine::from_settings(&settings)?;
    info!(locales = service.resolver().locales().len(), "Locale table ready");

    Server::builder()
        .add_service(LocaleNumberFormatServer::new(service))
        .serve(addr)
        .await?;

    Ok(())
}
