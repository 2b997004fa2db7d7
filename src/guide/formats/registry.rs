//! Named output formats
//!
//!     A [Formatter] turns a finished [Tree] into text. The [FormatRegistry] keys them by
//!     the name used in `output.format`, keeps them in name order, and rejects an
//!     unknown name with the full catalog so a bad config value explains itself.

use std::collections::BTreeMap;

use crate::guide::ast::Tree;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown output format '{name}', available: {}", .available.join(", "))]
    UnknownFormat {
        name: String,
        /// `name (description)` for every registered format.
        available: Vec<String>,
    },

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

pub trait Formatter: Send + Sync {
    /// Value of `output.format` that selects this formatter.
    fn name(&self) -> &'static str;

    /// Short label shown when listing formats.
    fn description(&self) -> &'static str;

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError>;
}

pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// No formats at all. Mostly useful for tests and custom setups.
    pub fn empty() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// json, yaml and treeviz.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }

    /// A later formatter with the same name replaces the earlier one.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters.insert(formatter.name(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn resolve(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.get(name).ok_or_else(|| FormatError::UnknownFormat {
            name: name.to_string(),
            available: self
                .catalog()
                .into_iter()
                .map(|(name, description)| format!("{name} ({description})"))
                .collect(),
        })
    }

    pub fn serialize(&self, tree: &Tree, format: &str) -> Result<String, FormatError> {
        self.resolve(format)?.serialize(tree)
    }

    /// `(name, description)` pairs in name order.
    pub fn catalog(&self) -> Vec<(&'static str, &'static str)> {
        self.formatters
            .values()
            .map(|f| (f.name(), f.description()))
            .collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
