//! OpenAI chat-completion adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenError;
use crate::problem::{create_prompt, Problem};
use crate::{Generator, GeneratorConfig};

const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Generator backed by the OpenAI chat completions API.
///
/// The HTTP client is constructed once here and reused for every request;
/// it is immutable after construction and safe for concurrent use.
pub struct OpenAiGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiGenerator {
    /// Create a generator with a fresh HTTP client.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            endpoint: OPENAI_ENDPOINT.to_string(),
        }
    }

    /// Override the API endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[async_trait]
impl Generator for OpenAiGenerator {
    async fn generate_code(&self, problem: &Problem) -> Result<String, GenError> {
        let prompt = create_prompt(problem);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %self.config.model, title = %problem.title, "requesting code generation");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GenError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(GenError::EmptyResponse)?;

        Ok(clean_generated_code(&choice.message.content))
    }
}

/// Strip markdown code fences and surrounding whitespace from generated code.
pub fn clean_generated_code(code: &str) -> String {
    let code = code.trim();
    let code = code.strip_prefix("```go").unwrap_or(code);
    let code = code.strip_prefix("```").unwrap_or(code);
    let code = code.strip_suffix("```").unwrap_or(code);
    code.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fenced_go_code() {
        let raw = "```go\npackage main\n\nfunc main() {}\n```";
        assert_eq!(clean_generated_code(raw), "package main\n\nfunc main() {}");
    }

    #[test]
    fn test_clean_plain_fence() {
        let raw = "```\nfunc solution() {}\n```";
        assert_eq!(clean_generated_code(raw), "func solution() {}");
    }

    #[test]
    fn test_clean_unfenced_code_untouched() {
        let raw = "  package main\n";
        assert_eq!(clean_generated_code(raw), "package main");
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "generate code",
            }],
            max_tokens: 2000,
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "generate code");
        assert_eq!(value["max_tokens"], 2000);
    }

    #[test]
    fn test_chat_response_parses_first_choice() {
        let body = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "package main"}}
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(body).expect("parse");
        assert_eq!(parsed.choices[0].message.content, "package main");
    }

    #[test]
    fn test_chat_response_empty_choices() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).expect("parse");
        assert!(parsed.choices.is_empty());
    }
}
