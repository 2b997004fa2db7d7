//! Structured serializations through serde

use super::registry::{FormatError, Formatter};
use crate::guide::ast::Tree;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &'static str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        serde_yaml::to_string(tree).map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &'static str {
        "YAML document"
    }
}
