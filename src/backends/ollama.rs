//! Ollama chat backend.
//!
//! Talks to a local Ollama server over its `/api/chat` endpoint with a
//! blocking client; the harness is strictly sequential so there is
//! nothing to overlap. `format: "json"` is requested so the server
//! constrains the model to valid JSON output.

use super::Generator;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama base URL.
pub const DEFAULT_URL: &str = "http://localhost:11434";
/// Default model name.
pub const DEFAULT_MODEL: &str = "llama3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Blocking client for the Ollama chat API.
///
/// # Example
///
/// ```rust,no_run
/// use bpmn_eval::backends::{Generator, OllamaGenerator};
///
/// let generator = OllamaGenerator::new()
///     .with_model("llama3")
///     .with_url("http://localhost:11434");
/// let reply = generator.generate("Extract the tasks from: ...")?;
/// # Ok::<(), bpmn_eval::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct OllamaGenerator {
    client: reqwest::blocking::Client,
    url: String,
    model: String,
    force_json: bool,
}

impl Default for OllamaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaGenerator {
    /// Create a generator with default URL and model.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: DEFAULT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            force_json: true,
        }
    }

    /// Set the base URL (no trailing `/api/...` path).
    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Enable or disable server-side JSON output constraining.
    #[must_use]
    pub fn with_force_json(mut self, force_json: bool) -> Self {
        self.force_json = force_json;
        self
    }

    /// The model this generator targets.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Generator for OllamaGenerator {
    fn name(&self) -> &str {
        "ollama"
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
            format: self.force_json.then_some("json"),
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.url))
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::generation(format!(
                "ollama returned {status}: {}",
                body.trim()
            )));
        }

        let reply: ChatResponse = response
            .json()
            .map_err(|e| Error::generation(format!("malformed chat response: {e}")))?;
        Ok(reply.message.content)
    }
}
