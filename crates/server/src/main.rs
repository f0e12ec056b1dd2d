use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use linda_engine::TupleSpace;
use tracing::info;

/// Tuple-space server: accepts -out/-rd/-in requests over TCP.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Socket address to listen on. Use port 0 for an ephemeral port.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let listener = TcpListener::bind(cli.listen)
        .with_context(|| format!("failed to bind {}", cli.listen))?;
    let addr = listener.local_addr()?;
    info!("tuple space listening on {addr}");

    let space = Arc::new(TupleSpace::new());
    linda_server::serve(listener, space)?;
    Ok(())
}
