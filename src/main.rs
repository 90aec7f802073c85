//! Fan-out demo server.
//!
//! ```text
//! fanout-demo greeting      # GET /greet on 127.0.0.1:5001
//! fanout-demo name          # GET /name  on 127.0.0.1:5002
//! fanout-demo aggregator    # GET / /other /fail on 0.0.0.0:6000
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use fanout_demo::config::load_or_default;
use fanout_demo::lifecycle::{wait_for_signal, Shutdown};
use fanout_demo::observability::init_logging;
use fanout_demo::ServiceKind;

#[derive(Parser)]
#[command(name = "fanout-demo")]
#[command(about = "Greeting, name and aggregator demo services", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service to run.
    #[arg(value_enum)]
    service: ServiceKind,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;
    init_logging(&config.observability.log_level);

    tracing::info!(service = %cli.service, "Starting {}", cli.service);

    let server = cli.service.build_server(&config)?;
    let listener = TcpListener::bind(cli.service.bind_address(&config)).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal(&shutdown).await;
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
