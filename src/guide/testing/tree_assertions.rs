//! Fluent assertions over built trees

use crate::guide::ast::{Passage, Question, Tag, Tree};
use crate::guide::ontology::{ContextType, TagType};

pub struct TreeAssertion<'a> {
    pub(crate) tree: &'a Tree,
}

impl<'a> TreeAssertion<'a> {
    pub fn root_title(self, expected: &str) -> Self {
        assert_eq!(
            self.tree.root.title, expected,
            "root: Expected title '{}', found '{}'",
            expected, self.tree.root.title
        );
        self
    }

    pub fn tag_count(self, expected: usize) -> Self {
        let actual = self.tree.tag_count();
        assert_eq!(
            actual, expected,
            "root: Expected {} tags, found {} tags",
            expected, actual
        );
        self
    }

    pub fn top_level_count(self, expected: usize) -> Self {
        let actual = self.tree.root.child_tags.len();
        assert_eq!(
            actual, expected,
            "root: Expected {} top-level tags, found {}",
            expected, actual
        );
        self
    }

    pub fn max_depth(self, expected: usize) -> Self {
        let actual = self.tree.max_depth();
        assert_eq!(
            actual, expected,
            "root: Expected max depth {}, found {}",
            expected, actual
        );
        self
    }

    pub fn context_type(self, expected: ContextType) -> Self {
        assert_eq!(
            self.tree.metadata.context_type, expected,
            "metadata: Expected context {}, found {}",
            expected, self.tree.metadata.context_type
        );
        self
    }

    pub fn qa_passed(self, expected: bool) -> Self {
        let report = &self.tree.root.qa_results;
        assert_eq!(
            report.overall_passed, expected,
            "qa: Expected overall_passed={}, warnings: {:?}",
            expected,
            report
                .results
                .iter()
                .flat_map(|r| r.warnings.iter())
                .collect::<Vec<_>>()
        );
        self
    }

    pub fn qa_warning_count(self, expected: usize) -> Self {
        let actual = self.tree.root.qa_results.warning_count();
        assert_eq!(
            actual, expected,
            "qa: Expected {} warnings, found {}",
            expected, actual
        );
        self
    }

    /// Every tag in the tree carries a tag type.
    pub fn all_typed(self) -> Self {
        for (tag, depth) in self.tree.walk() {
            assert!(
                !tag.tag_type.is_none(),
                "tag '{}' at depth {}: Expected a tag type, found None",
                tag.title,
                depth
            );
        }
        self
    }

    /// Descend by tag titles from the root.
    pub fn tag<F>(self, path: &[&str], assertion: F) -> Self
    where
        F: FnOnce(TagAssertion<'a>),
    {
        let context = path.join(" > ");
        let tag = self
            .tree
            .find_path(path)
            .unwrap_or_else(|| panic!("{}: No tag at this path", context));
        assertion(TagAssertion { tag, context });
        self
    }

    pub fn no_tag(self, path: &[&str]) -> Self {
        assert!(
            self.tree.find_path(path).is_none(),
            "{}: Expected no tag at this path",
            path.join(" > ")
        );
        self
    }
}

pub struct TagAssertion<'a> {
    pub(crate) tag: &'a Tag,
    pub(crate) context: String,
}

impl<'a> TagAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.tag.title, expected,
            "{}: Expected title '{}', found '{}'",
            self.context, expected, self.tag.title
        );
        self
    }

    pub fn tag_type(self, expected: TagType) -> Self {
        assert_eq!(
            self.tag.tag_type, expected,
            "{}: Expected tag type {}, found {}",
            self.context, expected, self.tag.tag_type
        );
        self
    }

    pub fn context_type(self, expected: ContextType) -> Self {
        assert_eq!(
            self.tag.context_type, expected,
            "{}: Expected context {}, found {}",
            self.context, expected, self.tag.context_type
        );
        self
    }

    pub fn hash(self, expected: &str) -> Self {
        assert_eq!(
            self.tag.hash, expected,
            "{}: Expected hash {}, found {}",
            self.context, expected, self.tag.hash
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.tag.child_tags.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} child tags, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child_titles(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.tag.child_tags.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected child tags {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn question_count(self, expected: usize) -> Self {
        let actual = self.tag.questions.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} questions, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn passage_count(self, expected: usize) -> Self {
        let actual = self.tag.passages.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} passages, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn question<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(QuestionAssertion<'a>),
    {
        assert!(
            index < self.tag.questions.len(),
            "{}: Question index {} out of bounds (tag has {} questions)",
            self.context,
            index,
            self.tag.questions.len()
        );
        assertion(QuestionAssertion {
            question: &self.tag.questions[index],
            context: format!("{}:questions[{}]", self.context, index),
        });
        self
    }

    pub fn passage<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PassageAssertion<'a>),
    {
        assert!(
            index < self.tag.passages.len(),
            "{}: Passage index {} out of bounds (tag has {} passages)",
            self.context,
            index,
            self.tag.passages.len()
        );
        assertion(PassageAssertion {
            passage: &self.tag.passages[index],
            context: format!("{}:passages[{}]", self.context, index),
        });
        self
    }
}

pub struct QuestionAssertion<'a> {
    pub(crate) question: &'a Question,
    pub(crate) context: String,
}

impl QuestionAssertion<'_> {
    pub fn prompt(self, expected: &str) -> Self {
        assert_eq!(
            self.question.prompt, expected,
            "{}: Expected prompt '{}', found '{}'",
            self.context, expected, self.question.prompt
        );
        self
    }

    pub fn answer(self, expected: &str) -> Self {
        assert_eq!(
            self.question.answer, expected,
            "{}: Expected answer '{}', found '{}'",
            self.context, expected, self.question.answer
        );
        self
    }

    /// An empty string means no learn-more line.
    pub fn learn_more(self, expected: &str) -> Self {
        assert_eq!(
            self.question.learn_more, expected,
            "{}: Expected learn more '{}', found '{}'",
            self.context, expected, self.question.learn_more
        );
        self
    }
}

pub struct PassageAssertion<'a> {
    pub(crate) passage: &'a Passage,
    pub(crate) context: String,
}

impl<'a> PassageAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.passage.title, expected,
            "{}: Expected title '{}', found '{}'",
            self.context, expected, self.passage.title
        );
        self
    }

    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.passage.content, expected,
            "{}: Unexpected content",
            self.context
        );
        self
    }

    pub fn content_contains(self, needle: &str) -> Self {
        assert!(
            self.passage.content.contains(needle),
            "{}: Expected content to contain '{}', found '{}'",
            self.context,
            needle,
            self.passage.content
        );
        self
    }

    pub fn question_count(self, expected: usize) -> Self {
        let actual = self.passage.questions.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} questions, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn question<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(QuestionAssertion<'a>),
    {
        assert!(
            index < self.passage.questions.len(),
            "{}: Question index {} out of bounds (passage has {} questions)",
            self.context,
            index,
            self.passage.questions.len()
        );
        assertion(QuestionAssertion {
            question: &self.passage.questions[index],
            context: format!("{}:questions[{}]", self.context, index),
        });
        self
    }
}
