//! Generator configuration.
//!
//! No option is recognized yet. The struct exists so that options added later
//! are typed fields, and so that a configuration document naming an unknown
//! key is rejected instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Options passed to `Printer::with_options`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorOptions {}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
