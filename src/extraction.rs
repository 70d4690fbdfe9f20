//! Parsing model output into structured BPMN elements.
//!
//! Models rarely return clean JSON even when told to: replies arrive
//! wrapped in prose, markdown fences, or both. The parser scans for the
//! first `{...}` span; if none is found it falls back to stripping
//! ```` ```json ```` fences and trimming before deserializing.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// (?s) so the object may span lines; greedy so nested braces are kept.
static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Structured extraction output: one label list per BPMN element kind.
///
/// Missing keys deserialize to empty lists, so a model that returns only
/// `{"tasks": [...]}` still parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedElements {
    /// Task labels.
    #[serde(default)]
    pub tasks: Vec<String>,
    /// Gateway (decision point) labels.
    #[serde(default)]
    pub gateways: Vec<String>,
    /// Event labels.
    #[serde(default)]
    pub events: Vec<String>,
}

impl ExtractedElements {
    /// Flatten into a single label sequence: tasks, then gateways, then
    /// events. This order feeds the greedy matcher, so it is part of the
    /// evaluation contract.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        let mut labels =
            Vec::with_capacity(self.tasks.len() + self.gateways.len() + self.events.len());
        labels.extend(self.tasks.iter().cloned());
        labels.extend(self.gateways.iter().cloned());
        labels.extend(self.events.iter().cloned());
        labels
    }

    /// True when no labels were extracted at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.gateways.is_empty() && self.events.is_empty()
    }
}

/// Extract the element lists from raw model output.
///
/// Tolerates surrounding prose and markdown code fences. Fails with
/// [`Error::Parse`] when no JSON object can be recovered.
pub fn parse_extraction(raw: &str) -> Result<ExtractedElements> {
    let candidate = match JSON_OBJECT.find(raw) {
        Some(m) => m.as_str().to_string(),
        None => raw.replace("```json", "").replace("```", "").trim().to_string(),
    };

    if candidate.is_empty() {
        return Err(Error::parse("response contains no JSON object"));
    }

    let elements: ExtractedElements = serde_json::from_str(&candidate)?;
    Ok(elements)
}
