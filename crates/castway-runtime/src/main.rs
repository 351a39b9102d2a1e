use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use castway_provider::DiscoveryBackend;
use castway_provider::backend::StaticSinkBackend;
use castway_runtime::{CastwayConfig, InstanceSelector, MarkerQuery, Runtime};

#[derive(Parser)]
#[command(name = "castwayd", about = "Castway media route provider runtime")]
struct Cli {
    /// Path to the runtime config
    #[arg(long, default_value = "castway.toml")]
    config: PathBuf,

    /// Override the origin variant from the config file
    #[arg(long)]
    origin: Option<String>,

    /// Directory for variant activity markers
    #[arg(long)]
    marker_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_env("CASTWAY_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CastwayConfig::from_file(&cli.config)?;
    let origin = cli.origin.unwrap_or_else(|| config.instance.origin.clone());

    let markers = Arc::new(MarkerQuery::new(
        cli.marker_dir.unwrap_or_else(MarkerQuery::default_path),
    ));

    let selector = InstanceSelector::new(config.instance.variants.clone(), markers.clone());
    let instance = selector.should_start(&origin).await?;

    if !instance.is_active() {
        // Not an error state: another variant runs, this copy does not.
        tracing::info!(origin = %instance.origin(), "Another variant is active, exiting");
        return Ok(());
    }

    markers.mark_active(instance.origin()).await?;

    let runtime = Runtime::new(instance).await;
    tracing::info!(origin = %runtime.instance().origin(), "Castway runtime active");

    let mut backends: Vec<Arc<dyn DiscoveryBackend>> = Vec::new();
    if !config.discovery.sinks.is_empty() {
        let sinks = config.discovery.sinks.iter().map(Into::into).collect();
        backends.push(Arc::new(StaticSinkBackend::new(sinks)));
    }

    let started = runtime.start_backends(&backends).await;
    tracing::info!(
        started,
        total = backends.len(),
        "Discovery backends initialized"
    );

    tokio::signal::ctrl_c().await?;

    tracing::info!("Castway runtime shutting down");
    markers.clear(runtime.instance().origin()).await;
    Ok(())
}
