//! Code generation collaborator.
//!
//! Turns a problem description into a source artifact via a text-generation
//! provider, and persists the artifact for evaluation. The generation step
//! is plain network glue; all grading lives in `codegrade-core`.

pub mod error;
pub mod openai;
pub mod problem;
pub mod store;

// Re-export key types
pub use error::GenError;
pub use openai::{clean_generated_code, OpenAiGenerator};
pub use problem::{create_prompt, Problem, ProblemParameter};
pub use store::save_generated_code;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a code generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Provider name (e.g. "openai").
    pub provider: String,

    /// Model to use (e.g. "gpt-4o-mini").
    pub model: String,

    /// API key for the provider.
    pub api_key: String,

    /// Maximum tokens for a generation request.
    pub max_tokens: u32,
}

/// Capability for producing source code from a problem description.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate source code solving the given problem.
    async fn generate_code(&self, problem: &Problem) -> Result<String, GenError>;
}

/// Build a generator for the configured provider.
pub fn new_generator(config: GeneratorConfig) -> Result<Box<dyn Generator>, GenError> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(OpenAiGenerator::new(config))),
        other => Err(GenError::UnsupportedProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> GeneratorConfig {
        GeneratorConfig {
            provider: provider.to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: "test-key".to_string(),
            max_tokens: 2000,
        }
    }

    #[test]
    fn test_openai_provider_supported() {
        assert!(new_generator(config("openai")).is_ok());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = new_generator(config("acme"))
            .err()
            .expect("unknown provider");
        assert!(matches!(err, GenError::UnsupportedProvider(p) if p == "acme"));
    }
}
