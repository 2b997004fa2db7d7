//! Tree builder
//!
//!     Walks the syntax tree depth-first carrying the current domain container (the
//!     root, or the tag a header resolved to):
//!
//!         file_header  titles the root, children built into the root
//!         header       prefix-merged into the container's tags; children built into the last tag
//!         question     becomes a Question on the container, with its learn-more text
//!         passage      becomes a Passage on the container, with its content and questions
//!         anything else: children built into the same container
//!
//!     Header merge: each header part looks up a child tag by title and reuses it, or
//!     creates it. A new tag's hash is digest(title) directly under the root and
//!     digest(parent title + title) under another tag.

use crate::guide::ast::{Passage, Question, Root, Tag, Tree};
use crate::guide::ids::IdGenerator;
use crate::guide::metadata::Metadata;
use crate::guide::parsing::{NodeId, SyntaxNode, SyntaxTree};
use crate::guide::preparsing::ParsedValue;
use crate::guide::token::TokenType;

/// Where built entities are attached.
enum Container<'a> {
    Root(&'a mut Root),
    Tag(&'a mut Tag),
}

impl Container<'_> {
    fn reborrow(&mut self) -> Container<'_> {
        match self {
            Container::Root(root) => Container::Root(root),
            Container::Tag(tag) => Container::Tag(tag),
        }
    }
}

pub struct TreeBuilder<'a> {
    ids: &'a dyn IdGenerator,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(ids: &'a dyn IdGenerator) -> Self {
        Self { ids }
    }

    pub fn build(&self, ast: &SyntaxTree, metadata: Metadata) -> Tree {
        let mut root = Root::default();
        self.build_node(ast, ast.root_id(), Container::Root(&mut root));
        let tree = Tree::new(root, metadata);
        tracing::debug!(
            tags = tree.tag_count(),
            depth = tree.max_depth(),
            "built domain tree"
        );
        tree
    }

    fn build_node(&self, ast: &SyntaxTree, id: NodeId, mut container: Container<'_>) {
        let node = ast.node(id);
        match &node.value {
            ParsedValue::FileHeader { title } => {
                if let Container::Root(root) = &mut container {
                    root.title = title.clone();
                }
                self.build_children(ast, node, container);
            }
            ParsedValue::Header { parts } => match self.merge_header(container, parts) {
                Some(tag) => self.build_children(ast, node, Container::Tag(tag)),
                None => tracing::warn!(line = node.line, "header without parts"),
            },
            ParsedValue::Question {
                question_text,
                answer_text,
            } => {
                let question = self.question(ast, id, question_text, answer_text);
                match container {
                    Container::Tag(tag) => tag.questions.push(question),
                    Container::Root(_) => {
                        tracing::warn!(line = node.line, "question outside of any tag dropped")
                    }
                }
            }
            ParsedValue::Passage { text } => {
                let passage = self.passage(ast, id, text);
                match container {
                    Container::Tag(tag) => tag.passages.push(passage),
                    Container::Root(_) => {
                        tracing::warn!(line = node.line, "passage outside of any tag dropped")
                    }
                }
            }
            _ => self.build_children(ast, node, container),
        }
    }

    fn build_children(&self, ast: &SyntaxTree, node: &SyntaxNode, mut container: Container<'_>) {
        for child in node.children() {
            self.build_node(ast, *child, container.reborrow());
        }
    }

    fn merge_header<'t>(&self, container: Container<'t>, parts: &[String]) -> Option<&'t mut Tag> {
        match container {
            Container::Root(root) => self.merge_path(&mut root.child_tags, None, parts),
            Container::Tag(tag) => {
                let Tag {
                    title, child_tags, ..
                } = tag;
                self.merge_path(child_tags, Some(title.as_str()), parts)
            }
        }
    }

    /// Resolve `parts` below `siblings`, creating missing tags, and return the last one.
    fn merge_path<'t>(
        &self,
        siblings: &'t mut Vec<Tag>,
        parent_title: Option<&str>,
        parts: &[String],
    ) -> Option<&'t mut Tag> {
        let (title, rest) = parts.split_first()?;
        let index = match siblings.iter().position(|tag| &tag.title == title) {
            Some(index) => index,
            None => {
                let hash = match parent_title {
                    Some(parent) => self.ids.digest(&format!("{parent}{title}")),
                    None => self.ids.digest(title),
                };
                tracing::trace!(title = %title, "new tag");
                siblings.push(Tag::new(title.clone(), hash, self.ids.unique_id()));
                siblings.len() - 1
            }
        };
        let tag = &mut siblings[index];
        if rest.is_empty() {
            return Some(tag);
        }
        let Tag {
            title, child_tags, ..
        } = tag;
        self.merge_path(child_tags, Some(title.as_str()), rest)
    }

    fn question(&self, ast: &SyntaxTree, id: NodeId, prompt: &str, answer: &str) -> Question {
        // A question may collect several learn-more lines; the last one wins.
        let learn_more = ast
            .children(id)
            .filter(|child| child.kind == TokenType::LearnMore)
            .filter_map(|child| match &child.value {
                ParsedValue::LearnMore { text } => Some(text.clone()),
                _ => None,
            })
            .last()
            .unwrap_or_default();
        Question::new(prompt, answer, learn_more, self.ids)
    }

    fn passage(&self, ast: &SyntaxTree, id: NodeId, title: &str) -> Passage {
        let mut content = Vec::new();
        let mut questions = Vec::new();
        for (child_id, child) in ast.node(id).children().iter().map(|c| (*c, ast.node(*c))) {
            match &child.value {
                ParsedValue::Content { text } => content.push(text.as_str()),
                ParsedValue::Question {
                    question_text,
                    answer_text,
                } => questions.push(self.question(ast, child_id, question_text, answer_text)),
                _ => {}
            }
        }
        Passage::new(title, content.join("\n"), questions, self.ids)
    }
}
