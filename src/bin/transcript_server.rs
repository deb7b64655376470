use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ja_transcript::api::ApiServer;
use ja_transcript::{Config, ResultSource, TranscriptService, YouTubeCaptionProvider};

/// Serve the Japanese transcript lookup over HTTP
#[derive(Parser)]
#[command(name = "ja-transcript-server", version)]
struct Cli {
    /// Config file (defaults to the standard search paths)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the config
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match (&cli.config, &loaded) {
        // an explicit config file must load
        (Some(_), Err(e)) => anyhow::bail!("{}", e),
        _ => loaded.as_ref().cloned().unwrap_or_default(),
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config.validate()?;

    info!("🚀 Japanese transcript server starting...");

    let provider = YouTubeCaptionProvider::new(config.youtube.clone())?;
    let service = TranscriptService::new(Arc::new(provider), ResultSource::HttpFunction);

    ApiServer::new(service, Arc::new(config)).start().await
}
