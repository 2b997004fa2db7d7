//! Root element

use serde::{Deserialize, Serialize};

use super::qa::QaResults;
use super::tag::Tag;

pub const DEFAULT_ROOT_TITLE: &str = "Root";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub title: String,
    #[serde(default)]
    pub qa_results: QaResults,
    #[serde(default)]
    pub child_tags: Vec<Tag>,
}

impl Root {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            qa_results: QaResults::default(),
            child_tags: Vec::new(),
        }
    }

    pub fn find_child(&self, title: &str) -> Option<&Tag> {
        self.child_tags.iter().find(|tag| tag.title == title)
    }
}

impl Default for Root {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_TITLE)
    }
}
