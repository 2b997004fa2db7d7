//! Tag element
//!
//!     A tag is one segment of a header path. `Science: Biology: Cells` produces three
//!     nested tags, and a later `Science: Biology: Genetics` reuses the first two.
//!     Children are matched by exact title.

use serde::{Deserialize, Serialize};

use super::passage::Passage;
use super::question::Question;
use crate::guide::ontology::{ContextType, TagType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    pub hash: String,
    #[serde(default)]
    pub tag_type: TagType,
    #[serde(rename = "context", default)]
    pub context_type: ContextType,
    pub insert_id: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub passages: Vec<Passage>,
    #[serde(default)]
    pub child_tags: Vec<Tag>,
}

impl Tag {
    pub fn new(
        title: impl Into<String>,
        hash: impl Into<String>,
        insert_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            hash: hash.into(),
            tag_type: TagType::None,
            context_type: ContextType::None,
            insert_id: insert_id.into(),
            questions: Vec::new(),
            passages: Vec::new(),
            child_tags: Vec::new(),
        }
    }

    pub fn find_child(&self, title: &str) -> Option<&Tag> {
        self.child_tags.iter().find(|tag| tag.title == title)
    }

    pub fn is_leaf(&self) -> bool {
        self.child_tags.is_empty()
    }

    /// Questions directly on the tag plus those inside its passages.
    pub fn question_count(&self) -> usize {
        self.questions.len() + self.passages.iter().map(|p| p.questions.len()).sum::<usize>()
    }
}
