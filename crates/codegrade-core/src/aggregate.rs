//! Evaluator aggregation: ordered strategies composed into one grade.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{EvalError, Result};
use crate::result::{EvaluationResult, Evaluator};

/// Combined result across every registered evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveResult {
    /// Sub-results in evaluator registration order.
    #[serde(rename = "evaluationResults")]
    pub evaluation_results: Vec<EvaluationResult>,

    /// Floor of the arithmetic mean of the sub-result scores.
    pub score: u32,
}

/// Ordered set of evaluation strategies.
///
/// Adding a new evaluator kind means implementing [`Evaluator`] and
/// appending it to the registration list; the averaging here never looks
/// inside a sub-result beyond its score.
pub struct EvaluatorSet {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl EvaluatorSet {
    /// Create a set from registered evaluators.
    ///
    /// Zero evaluators is an invalid configuration, not a runtime input:
    /// the combined score divides by the evaluator count, so emptiness is
    /// rejected here rather than defaulted at evaluation time.
    pub fn new(evaluators: Vec<Box<dyn Evaluator>>) -> Result<Self> {
        if evaluators.is_empty() {
            return Err(EvalError::NoEvaluators);
        }
        Ok(Self { evaluators })
    }

    /// Number of registered evaluators.
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    /// Always false; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// Run every evaluator against the artifact, in registration order.
    ///
    /// Fail-fast composition: the first evaluator error aborts the whole
    /// aggregation and no partial result is returned. Evaluators fail only
    /// on infrastructural problems (missing artifact, unusable toolchain),
    /// which make every other evaluator's result meaningless too.
    pub async fn evaluate_artifact(&self, artifact: &Path) -> Result<ComprehensiveResult> {
        let mut results = Vec::with_capacity(self.evaluators.len());

        for evaluator in &self.evaluators {
            info!(
                evaluator = evaluator.name(),
                artifact = %artifact.display(),
                "running evaluator",
            );
            results.push(evaluator.evaluate(artifact).await?);
        }

        let total: u64 = results.iter().map(|r| u64::from(r.score())).sum();
        let score = (total / results.len() as u64) as u32;

        Ok(ComprehensiveResult {
            evaluation_results: results,
            score,
        })
    }
}
