//! Question element

use serde::{Deserialize, Serialize};

use crate::guide::ids::IdGenerator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub insert_id: String,
    /// digest(prompt + answer)
    pub hash: String,
    pub prompt: String,
    pub answer: String,
    /// Wrong answers offered alongside the real one. Nothing in a guide fills these yet.
    #[serde(rename = "distractor", default)]
    pub distractors: Vec<String>,
    /// Empty when the question has no learn-more line.
    #[serde(default)]
    pub learn_more: String,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        learn_more: impl Into<String>,
        ids: &dyn IdGenerator,
    ) -> Self {
        let prompt = prompt.into();
        let answer = answer.into();
        Self {
            insert_id: ids.unique_id(),
            hash: ids.digest(&format!("{prompt}{answer}")),
            prompt,
            answer,
            distractors: Vec::new(),
            learn_more: learn_more.into(),
        }
    }
}
