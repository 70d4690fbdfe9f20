//! Error types for bpmn-eval.

use thiserror::Error;

/// Result type for bpmn-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bpmn-eval operations.
///
/// Only the collaborator boundary produces errors: prompt rendering,
/// generation, and response parsing. The metric calculator itself is a
/// total function and never fails.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Prompt template is missing a required variable slot.
    #[error("Template error: {0}")]
    Template(String),

    /// The generation backend failed (unreachable, HTTP error, bad reply).
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Raw model output could not be parsed into structured elements.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a template error.
    pub fn template(msg: impl Into<String>) -> Self {
        Error::Template(msg.into())
    }

    /// Create a generation error.
    pub fn generation(msg: impl Into<String>) -> Self {
        Error::Generation(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Generation(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::generation("connection refused");
        assert_eq!(err.to_string(), "Generation failed: connection refused");

        let err = Error::parse("expected value at line 1");
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("not json");
        let err: Error = bad.unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
