//! Problem model and prompt construction.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The input for code generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    /// Problem title.
    pub title: String,

    /// Difficulty label (e.g. "Easy").
    pub difficulty: String,

    /// Full problem statement.
    pub statement: String,

    /// Input parameters with optional bounds.
    #[serde(default)]
    pub parameters: Vec<ProblemParameter>,
}

/// An input parameter for the problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemParameter {
    /// Parameter name.
    pub name: String,

    /// Parameter type in the target language.
    #[serde(rename = "type")]
    pub param_type: String,

    /// Lower bound, if constrained.
    #[serde(default)]
    pub lower_bound: Option<serde_json::Value>,

    /// Upper bound, if constrained.
    #[serde(default)]
    pub upper_bound: Option<serde_json::Value>,
}

/// Build the generation prompt for a problem.
pub fn create_prompt(problem: &Problem) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Generate a Go solution for LeetCode problem: {}\n",
        problem.title
    );
    let _ = writeln!(prompt, "Difficulty: {}\n", problem.difficulty);
    prompt.push_str("Problem Statement:\n");
    prompt.push_str(&problem.statement);
    prompt.push_str("\n\nParameters:\n");

    for param in &problem.parameters {
        let _ = write!(prompt, "- {} ({})", param.name, param.param_type);
        if let Some(lower) = &param.lower_bound {
            let _ = write!(prompt, ", Lower bound: {lower}");
        }
        if let Some(upper) = &param.upper_bound {
            let _ = write!(prompt, ", Upper bound: {upper}");
        }
        prompt.push('\n');
    }

    prompt
}
