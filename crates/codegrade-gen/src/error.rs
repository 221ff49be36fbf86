//! Error taxonomy for code generation.

/// Errors produced by generation and artifact persistence.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("no choices in model response")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
