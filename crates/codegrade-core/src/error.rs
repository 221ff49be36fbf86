//! Domain-level error taxonomy for the evaluation pipeline.

use std::path::PathBuf;

/// Errors produced by evaluation.
///
/// Toolchain invocation failures are deliberately absent from this
/// taxonomy: once an artifact is confirmed to exist, a broken compiler,
/// analyzer, or formatter is a finding folded into the result score,
/// never an error.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("artifact does not exist: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("at least one evaluator must be registered")]
    NoEvaluators,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;
