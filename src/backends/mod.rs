//! Generation backends.
//!
//! The evaluation core only ever sees the [`Generator`] trait: prompt
//! in, raw text out. Keeping the seam this narrow means the harness can
//! be driven by a real model server or by a canned reply in tests.

pub mod ollama;

pub use ollama::OllamaGenerator;

use crate::Result;

/// A text-generation backend.
pub trait Generator {
    /// Backend name for logs and reports.
    fn name(&self) -> &str;

    /// Send one prompt, return the raw reply text.
    ///
    /// Blocking; may fail with [`crate::Error::Generation`] when the
    /// backend is unreachable or returns an error.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Generator returning a fixed reply, for deterministic tests.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    reply: String,
}

impl StaticGenerator {
    /// Create a generator that always returns `reply`.
    #[must_use]
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

impl Generator for StaticGenerator {
    fn name(&self) -> &str {
        "static"
    }

    fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

/// Generator that always fails, for exercising error recovery.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    /// Create a generator that always fails with `message`.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Generator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    fn generate(&self, _prompt: &str) -> Result<String> {
        Err(crate::Error::generation(self.message.clone()))
    }
}
