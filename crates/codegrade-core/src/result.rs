//! Shared result types and the evaluator capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Result of the quality evaluation strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityResult {
    /// Whether the artifact compiled.
    pub compiles: bool,

    /// Captured compiler output when compilation failed.
    pub compile_errors: Option<String>,

    /// Static-analysis issue lines, in analyzer output order.
    pub issues: Vec<String>,

    /// Score in [0, 100].
    pub score: u32,
}

/// Polymorphic evaluation result, one variant per evaluator kind.
///
/// A tagged sum type rather than a downcastable handle: the aggregator
/// only needs the common score accessor and never learns the concrete
/// kind behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationResult {
    /// Compilability, static-analysis cleanliness, and formatting drift.
    Quality(QualityResult),
}

impl EvaluationResult {
    /// Score in [0, 100].
    pub fn score(&self) -> u32 {
        match self {
            EvaluationResult::Quality(r) => r.score,
        }
    }
}

/// A pluggable evaluation strategy producing one scored result per artifact.
///
/// Every call is stateless: the result is a pure function of the
/// artifact's on-disk content and the toolchain outputs at that instant.
/// Results are created fresh per call and owned by the caller.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Strategy name, for logging and reports.
    fn name(&self) -> &'static str;

    /// Evaluate the artifact at the given path.
    ///
    /// The only fatal error is a missing artifact; toolchain failures are
    /// folded into the returned result as score penalties.
    async fn evaluate(&self, artifact: &Path) -> Result<EvaluationResult>;
}
