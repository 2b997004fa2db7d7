//! Document metadata
//!
//!     Supplied by the caller and carried unchanged into the syntax tree and the built
//!     tree. `context_type` decides which ontology row the builder applies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ontology::ContextType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Free-form document kind, e.g. `study_guide`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub context_type: ContextType,
}

impl Metadata {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_context(mut self, context_type: ContextType) -> Self {
        self.context_type = context_type;
        self
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}
