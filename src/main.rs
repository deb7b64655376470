use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ja_transcript::{Config, ResultSource, TranscriptService, YouTubeCaptionProvider};

const USAGE: &str = "Usage: ja-transcript <video_id>";

/// Fetch the best available Japanese transcript of a YouTube video as JSON
#[derive(Parser, Debug)]
#[command(name = "ja-transcript", version)]
struct Cli {
    /// YouTube video id (not the URL); ids may start with '-'
    #[arg(allow_hyphen_values = true)]
    video_id: String,
}

/// Parse the raw process arguments. `Err` carries the exit code to stop with;
/// the usage line or clap's message has already been printed.
fn parse_args<I, T>(args: I) -> std::result::Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        eprintln!("{}", USAGE);
        return Err(1);
    }

    Cli::try_parse_from(args).map_err(|e| {
        let _ = e.print();
        e.exit_code()
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => std::process::exit(code),
    };

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Logs go to stderr; stdout carries only the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }
    config.validate()?;

    info!("Fetching Japanese transcript for {}", cli.video_id);

    let provider = YouTubeCaptionProvider::new(config.youtube.clone())?;
    let service = TranscriptService::new(Arc::new(provider), ResultSource::Cli);
    let result = service.fetch_japanese_transcript(&cli.video_id).await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
