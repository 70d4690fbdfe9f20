//! Prompt construction for BPMN element extraction.
//!
//! Builds the instruction sent to the model: a template with `{{passage}}`
//! and `{{json_schema}}` slots, plus the JSON schema the model is asked
//! to follow. The template is validated up front so a typo in a slot name
//! fails loudly instead of silently sending a half-rendered prompt.

use crate::{Error, Result};
use serde_json::json;

/// Template slot for the process description.
pub const PASSAGE_VAR: &str = "{{passage}}";
/// Template slot for the output schema.
pub const SCHEMA_VAR: &str = "{{json_schema}}";

const DEFAULT_TEMPLATE: &str = "\
Extract all **task names**, **gateways** and **events** from the BPMN description \
provided in the passage: {{passage}}.

Return the extracted elements as a single JSON object that adheres strictly to the \
following schema:
{{json_schema}}

Only return the JSON. Do not include markdown formatting like ```json.";

/// Example-shaped JSON schema shown to the model.
///
/// Keys mirror what the extraction parser expects: `tasks`, `gateways`,
/// `events`, each a list of strings.
#[must_use]
pub fn element_schema() -> String {
    json!({
        "tasks": ["task_name_1", "task_name_2"],
        "gateways": ["gateway_name"],
        "events": ["event_name"],
    })
    .to_string()
}

/// Renders extraction prompts from a slotted template.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    template: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        // The built-in template always carries both slots.
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl PromptBuilder {
    /// Create a builder with a custom template.
    ///
    /// Fails with [`Error::Template`] if either required slot
    /// (`{{passage}}`, `{{json_schema}}`) is missing.
    pub fn with_template(template: &str) -> Result<Self> {
        for var in [PASSAGE_VAR, SCHEMA_VAR] {
            if !template.contains(var) {
                return Err(Error::template(format!(
                    "template is missing required variable {var}"
                )));
            }
        }
        Ok(Self {
            template: template.to_string(),
        })
    }

    /// Render the prompt for one passage.
    #[must_use]
    pub fn render(&self, passage: &str, json_schema: &str) -> String {
        self.template
            .replace(PASSAGE_VAR, passage)
            .replace(SCHEMA_VAR, json_schema)
    }
}
