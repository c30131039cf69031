use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedscopeError {
    #[error("Missing required query parameter: {0}")]
    MissingQueryParam(&'static str),

    #[error("Error contacting scheduler: {0}")]
    UpstreamError(String),

    #[error("Error matching {line} with pattern {pattern}")]
    LineMatchFailed { line: String, pattern: String },

    #[error("No node found with name {0}")]
    NodeNotFound(String),

    #[error("No pod found with name {name} under namespace {namespace}")]
    PodNotFound { name: String, namespace: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SchedscopeError>;
