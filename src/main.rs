use chipselect::cli::Cli;
use chipselect::config::Settings;
use chipselect::dataset::Dataset;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    // Loaded once; the widget only ever reads it
    let dataset = Arc::new(Dataset::load(&settings.dataset)?);
    info!("Dataset ready with {} users", dataset.len());

    let app = chipselect::create_app(dataset);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Serving multi-select demo on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
