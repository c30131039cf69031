pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod server;

pub use error::{Result, SchedscopeError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
