use crate::cli::Commands;
use crate::config::Config;
use crate::fetch::MetricsFetcher;
use crate::metrics::{node_metrics, pod_metrics};
use crate::server::{run_server, AppState};
use std::sync::Arc;
use tracing::info;

/// Listen port when `serve` is invoked without `--port`, and when no
/// subcommand is given at all.
pub const DEFAULT_PORT: u16 = 8000;

pub async fn handle_command(command: Option<Commands>) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    match command.unwrap_or(Commands::Serve { port: DEFAULT_PORT }) {
        Commands::Serve { port } => serve(config, port).await,
        Commands::Node { name } => print_node(&config, &name).await,
        Commands::Pod { name, namespace } => print_pod(&config, &name, &namespace).await,
    }
}

async fn serve(config: Config, port: u16) -> anyhow::Result<()> {
    info!("Scraping scheduler metrics at {}", config.metrics_url());

    let state = Arc::new(AppState {
        fetcher: MetricsFetcher::new(&config)?,
        scheduler_name: config.scheduler_name,
    });

    run_server(state, port).await
}

async fn print_node(config: &Config, name: &str) -> anyhow::Result<()> {
    let text = MetricsFetcher::new(config)?.fetch().await?;
    let metrics = node_metrics(&text, name)?;

    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}

async fn print_pod(config: &Config, name: &str, namespace: &str) -> anyhow::Result<()> {
    let text = MetricsFetcher::new(config)?.fetch().await?;
    let metrics = pod_metrics(&text, name, namespace, &config.scheduler_name)?;

    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
