//! staticd — static file and directory-listing HTTP server.
//!
//! Resolves each GET path against a serve root (the working directory by
//! default), then serves the file, the directory's index file, or a
//! generated listing. Every failure becomes a 404 error page; every
//! response is `text/html`.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use staticd::config::loader::load_config;
use staticd::config::validation::validate_config;
use staticd::config::{ConfigError, ServerConfig};
use staticd::http::HttpServer;
use staticd::observability;

#[derive(Parser)]
#[command(name = "staticd")]
#[command(about = "Static file and directory-listing HTTP server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configured listener address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory to serve, overriding the configured root.
    #[arg(short, long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    // CLI overrides land after the file is loaded, then the merged result
    // is validated as a whole.
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(root) = cli.root {
        config.serve.root = Some(root);
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        index_file = %config.serve.index_file,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
