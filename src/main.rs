use clap::Parser;
use schedscope::cli::{commands, Cli};
use std::process;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!("Starting schedscope v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = commands::handle_command(cli.command).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
