//! Quality evaluation strategy: compile check, static-analysis issues,
//! and formatting-drift penalty.

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use crate::diff::{diff_size, FORMATTER_FAILURE_DIFF_SIZE};
use crate::error::{EvalError, Result};
use crate::result::{EvaluationResult, Evaluator, QualityResult};
use crate::toolchain::{run_tool, ToolchainConfig};

/// Points lost per static-analysis issue.
const ISSUE_PENALTY: i64 = 3;

/// Characters of formatting drift per point lost.
const DRIFT_PER_POINT: usize = 10;

/// Evaluation strategy that grades compilability, static-analysis
/// cleanliness, and formatting canonicality.
///
/// Only a missing artifact aborts evaluation. Every toolchain failure past
/// the existence check is absorbed into the result: a compiler that cannot
/// run means the artifact does not compile, an analyzer that cannot run
/// produces issue text, and a formatter that cannot run counts as maximal
/// formatting drift. The evaluator always yields a numeric verdict once
/// the artifact is confirmed to exist.
pub struct QualityEvaluator {
    toolchain: ToolchainConfig,
}

impl QualityEvaluator {
    /// Create a quality evaluator over the given toolchain.
    pub fn new(toolchain: ToolchainConfig) -> Self {
        Self { toolchain }
    }

    /// Score formula.
    ///
    /// Starts at 100. A non-compiling artifact scores 0 outright,
    /// independent of issues or drift. Otherwise one point is lost per
    /// full 10 characters of formatting drift and three per analyzer
    /// issue, floored at 0.
    pub fn calculate_score(compiles: bool, drift: usize, issue_count: usize) -> u32 {
        if !compiles {
            return 0;
        }

        let penalty = (drift / DRIFT_PER_POINT) as i64 + issue_count as i64 * ISSUE_PENALTY;
        (100 - penalty).max(0) as u32
    }
}

impl Default for QualityEvaluator {
    fn default() -> Self {
        Self::new(ToolchainConfig::default())
    }
}

#[async_trait]
impl Evaluator for QualityEvaluator {
    fn name(&self) -> &'static str {
        "quality"
    }

    async fn evaluate(&self, artifact: &Path) -> Result<EvaluationResult> {
        if tokio::fs::metadata(artifact).await.is_err() {
            return Err(EvalError::ArtifactNotFound(artifact.to_path_buf()));
        }

        let timeout = self.toolchain.timeout_secs;

        // The three steps read the same immutable artifact and do not
        // depend on each other's output, so they run concurrently.
        let (analyzer, compiler, formatter) = tokio::join!(
            run_tool(&self.toolchain.analyzer, artifact, timeout),
            run_tool(&self.toolchain.compiler, artifact, timeout),
            run_tool(&self.toolchain.formatter, artifact, timeout),
        );

        let issues: Vec<String> = match analyzer {
            Ok(out) => {
                let lines: Vec<String> = out
                    .combined
                    .lines()
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();

                // An analyzer that exits non-zero without printing anything
                // still counts as having produced an issue.
                if lines.is_empty() && !out.success {
                    vec![format!("analyzer exited with code {}", out.exit_code)]
                } else {
                    lines
                }
            }
            Err(e) => vec![format!("analyzer invocation failed: {e}")],
        };

        let (compiles, compile_errors) = match compiler {
            Ok(out) if out.success => (true, None),
            Ok(out) => (false, Some(out.combined)),
            Err(e) => (false, Some(format!("compiler invocation failed: {e}"))),
        };

        let drift = match formatter {
            Ok(out) if out.success => diff_size(&out.combined),
            _ => FORMATTER_FAILURE_DIFF_SIZE,
        };

        let score = Self::calculate_score(compiles, drift, issues.len());

        debug!(
            artifact = %artifact.display(),
            compiles,
            issue_count = issues.len(),
            drift,
            score,
            "quality evaluation complete",
        );

        Ok(EvaluationResult::Quality(QualityResult {
            compiles,
            compile_errors,
            issues,
            score,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::ToolSpec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn artifact_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp artifact");
        writeln!(file, "package main").expect("write artifact");
        file
    }

    /// Toolchain whose three tools all succeed silently.
    fn clean_toolchain() -> ToolchainConfig {
        ToolchainConfig {
            compiler: ToolSpec::new("true", &[]),
            analyzer: ToolSpec::new("true", &[]),
            formatter: ToolSpec::new("true", &[]),
            timeout_secs: 60,
        }
    }

    #[test]
    fn test_score_non_compiling_is_zero() {
        assert_eq!(QualityEvaluator::calculate_score(false, 0, 0), 0);
        assert_eq!(QualityEvaluator::calculate_score(false, 9999, 100), 0);
    }

    #[test]
    fn test_score_perfect_artifact() {
        assert_eq!(QualityEvaluator::calculate_score(true, 0, 0), 100);
    }

    #[test]
    fn test_score_three_points_per_issue() {
        for n in 0..5 {
            let with_n = QualityEvaluator::calculate_score(true, 0, n);
            let with_next = QualityEvaluator::calculate_score(true, 0, n + 1);
            assert_eq!(with_n - with_next, 3);
        }
    }

    #[test]
    fn test_score_drift_penalty_floors() {
        assert_eq!(
            QualityEvaluator::calculate_score(true, 9, 0),
            QualityEvaluator::calculate_score(true, 0, 0)
        );
        assert_eq!(QualityEvaluator::calculate_score(true, 10, 0), 99);
        assert_eq!(QualityEvaluator::calculate_score(true, 500, 0), 50);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        assert_eq!(QualityEvaluator::calculate_score(true, 2000, 0), 0);
        assert_eq!(QualityEvaluator::calculate_score(true, 0, 40), 0);
    }

    #[tokio::test]
    async fn test_missing_artifact_is_fatal() {
        let evaluator = QualityEvaluator::new(clean_toolchain());
        let err = evaluator
            .evaluate(Path::new("/nonexistent/artifact.go"))
            .await
            .expect_err("missing artifact should error");
        assert!(matches!(err, EvalError::ArtifactNotFound(_)));
    }

    #[tokio::test]
    async fn test_clean_artifact_scores_100() {
        let file = artifact_file();
        let evaluator = QualityEvaluator::new(clean_toolchain());

        let result = evaluator.evaluate(file.path()).await.expect("evaluate");
        let EvaluationResult::Quality(quality) = result;
        assert!(quality.compiles);
        assert!(quality.compile_errors.is_none());
        assert!(quality.issues.is_empty());
        assert_eq!(quality.score, 100);
    }

    #[tokio::test]
    async fn test_compile_failure_dominates() {
        let file = artifact_file();
        let toolchain = ToolchainConfig {
            compiler: ToolSpec::new("sh", &["-c", "echo 'undefined: foo' 1>&2; exit 1"]),
            ..clean_toolchain()
        };
        let evaluator = QualityEvaluator::new(toolchain);

        let result = evaluator.evaluate(file.path()).await.expect("evaluate");
        let EvaluationResult::Quality(quality) = result;
        assert!(!quality.compiles);
        assert!(quality
            .compile_errors
            .as_deref()
            .expect("compile errors captured")
            .contains("undefined: foo"));
        assert_eq!(quality.score, 0);
    }

    #[tokio::test]
    async fn test_analyzer_lines_become_issues() {
        let file = artifact_file();
        let toolchain = ToolchainConfig {
            analyzer: ToolSpec::new("sh", &["-c", "echo issue1; echo issue2"]),
            ..clean_toolchain()
        };
        let evaluator = QualityEvaluator::new(toolchain);

        let result = evaluator.evaluate(file.path()).await.expect("evaluate");
        let EvaluationResult::Quality(quality) = result;
        assert_eq!(quality.issues, vec!["issue1", "issue2"]);
        assert_eq!(quality.score, 94);
    }

    #[tokio::test]
    async fn test_silent_analyzer_failure_still_counts() {
        let file = artifact_file();
        let toolchain = ToolchainConfig {
            analyzer: ToolSpec::new("false", &[]),
            ..clean_toolchain()
        };
        let evaluator = QualityEvaluator::new(toolchain);

        let result = evaluator.evaluate(file.path()).await.expect("evaluate");
        let EvaluationResult::Quality(quality) = result;
        assert_eq!(quality.issues.len(), 1);
        assert_eq!(quality.score, 97);
    }

    #[tokio::test]
    async fn test_analyzer_spawn_failure_becomes_issue_text() {
        let file = artifact_file();
        let toolchain = ToolchainConfig {
            analyzer: ToolSpec::new("/nonexistent-analyzer", &[]),
            ..clean_toolchain()
        };
        let evaluator = QualityEvaluator::new(toolchain);

        let result = evaluator.evaluate(file.path()).await.expect("evaluate");
        let EvaluationResult::Quality(quality) = result;
        assert_eq!(quality.issues.len(), 1);
        assert!(quality.issues[0].contains("analyzer invocation failed"));
        assert!(quality.compiles, "analyzer failure must not abort evaluation");
    }

    #[tokio::test]
    async fn test_formatter_failure_is_worst_case_drift() {
        let file = artifact_file();
        let toolchain = ToolchainConfig {
            formatter: ToolSpec::new("false", &[]),
            ..clean_toolchain()
        };
        let evaluator = QualityEvaluator::new(toolchain);

        let result = evaluator.evaluate(file.path()).await.expect("evaluate");
        let EvaluationResult::Quality(quality) = result;
        // 100 - 500/10
        assert_eq!(quality.score, 50);
    }

    #[tokio::test]
    async fn test_formatter_diff_output_penalizes_drift() {
        let file = artifact_file();
        let toolchain = ToolchainConfig {
            // one added line of 30 characters, nothing removed
            formatter: ToolSpec::new("sh", &["-c", "echo '+aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa'"]),
            ..clean_toolchain()
        };
        let evaluator = QualityEvaluator::new(toolchain);

        let result = evaluator.evaluate(file.path()).await.expect("evaluate");
        let EvaluationResult::Quality(quality) = result;
        assert_eq!(quality.score, 97);
    }
}
