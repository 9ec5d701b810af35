use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use vid_insights::api::ApiServer;
use vid_insights::provider::remote::RemoteProvider;
use vid_insights::provider::TranscriptionProvider;
use vid_insights::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before config resolution so both see the same variables
    dotenvy::dotenv().ok();

    let matches = Command::new("vid-insights")
        .version(env!("CARGO_PKG_VERSION"))
        .about("HTTP relay between the insights dashboard and the video transcription provider")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Override the configured listening port"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let filter = if matches.get_flag("verbose") {
        "vid_insights=debug,tower_http=debug"
    } else {
        "vid_insights=info,tower_http=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_path(&PathBuf::from(path))?,
        None => Config::load()?,
    };

    if let Some(port) = matches.get_one::<String>("port") {
        config.server.port = port.parse()?;
    }

    config.validate()?;

    info!(
        "🚀 Video Insights Relay v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    info!("{}", config.summary());

    let provider: Arc<dyn TranscriptionProvider> =
        Arc::new(RemoteProvider::new(&config.provider)?);

    let server = ApiServer::new(Arc::new(config), provider);
    server.start().await
}
