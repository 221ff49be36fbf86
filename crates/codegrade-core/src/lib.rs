//! Codegrade core - the evaluation pipeline.
//!
//! Grades a generated source artifact by composing pluggable evaluation
//! strategies into one deterministic numeric score:
//! - Toolchain adapters run a compiler, a static analyzer, and a
//!   canonical formatter against the artifact and capture exit status
//!   plus combined output
//! - The quality evaluator folds those outcomes into a 0-100 score
//! - The evaluator set averages every registered strategy's score into
//!   a single combined report

pub mod aggregate;
pub mod diff;
pub mod error;
pub mod quality;
pub mod result;
pub mod telemetry;
pub mod toolchain;

// Re-export key types
pub use aggregate::{ComprehensiveResult, EvaluatorSet};
pub use error::{EvalError, Result};
pub use quality::QualityEvaluator;
pub use result::{EvaluationResult, Evaluator, QualityResult};
pub use telemetry::init_tracing;
pub use toolchain::{ToolOutput, ToolSpec, ToolchainConfig};
