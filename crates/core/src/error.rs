use thiserror::Error;

pub type AdScopeResult<T> = Result<T, AdScopeError>;

#[derive(Error, Debug)]
pub enum AdScopeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Completion provider credential not configured")]
    ConfigurationAbsent,

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Completion provider network error: {0}")]
    Network(String),

    #[error("Completion provider returned unparsable content: {0}")]
    MalformedResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
