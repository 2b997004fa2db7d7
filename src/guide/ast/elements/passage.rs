//! Passage element

use serde::{Deserialize, Serialize};

use super::question::Question;
use crate::guide::ids::IdGenerator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub title: String,
    /// Content lines joined with `\n`.
    pub content: String,
    /// digest(title)
    pub hash: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Passage {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        questions: Vec<Question>,
        ids: &dyn IdGenerator,
    ) -> Self {
        let title = title.into();
        Self {
            hash: ids.digest(&title),
            title,
            content: content.into(),
            questions,
        }
    }
}
