pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "schedscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scheduling diagnostics endpoint for Kubernetes custom schedulers", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Serve the diagnostics HTTP API")]
    Serve {
        #[arg(short, long, default_value_t = 8000, help = "Port to listen on")]
        port: u16,
    },
    #[command(about = "Print diagnostics for a single node")]
    Node {
        #[arg(help = "Node name")]
        name: String,
    },
    #[command(about = "Print diagnostics for a single pod")]
    Pod {
        #[arg(help = "Pod name")]
        name: String,

        #[arg(short, long, default_value = "default", help = "Kubernetes namespace")]
        namespace: String,
    },
}
