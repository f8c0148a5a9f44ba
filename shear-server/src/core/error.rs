use thiserror::Error;

/// Startup and runtime errors outside the HTTP request path
///
/// Request-path errors are [`crate::utils::AppError`]; this type covers
/// everything before the router is serving.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bind failed: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
