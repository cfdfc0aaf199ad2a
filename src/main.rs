use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wicket::config::Config;
use wicket::server;

#[derive(Parser, Debug)]
#[command(name = "wicket", about = "Minimal HTTP/1.1 echo and file server")]
struct Cli {
    /// Directory that /files/{name} reads from and writes to
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:4221
    #[arg(long)]
    listen: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::from_file(path)?.with_env(|key| std::env::var(key).ok()),
        None => Config::load(),
    };

    if let Some(dir) = cli.directory {
        cfg.files.root_dir = dir;
    }
    if let Some(addr) = cli.listen {
        cfg.server.listen_addr = addr;
    }

    tokio::select! {
        res = server::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
