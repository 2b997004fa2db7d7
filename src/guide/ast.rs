//! Domain tree
//!
//!     The builder's output: a [Root] holding nested [Tag]s, each with questions and
//!     passages, plus the caller's [Metadata]. This is the structure that gets
//!     serialized and handed to downstream consumers, so field names here are a
//!     compatibility surface.
//!
//! Traversal
//!
//!     [Tree::walk] visits every tag in pre-order with its depth (top-level tags at 1).
//!     [Tree::walk_mut] does the same but exposes only the classification fields, which
//!     is all the ontology assigner is allowed to touch.

pub mod elements;
pub mod traversal;

pub use elements::{Passage, QaResult, QaResults, Question, Root, Tag};
pub use traversal::{TagSlot, TagSlots, Tags};

use serde::{Deserialize, Serialize};

use crate::guide::metadata::Metadata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub root: Root,
    pub metadata: Metadata,
}

impl Tree {
    pub fn new(root: Root, metadata: Metadata) -> Self {
        Self { root, metadata }
    }

    pub fn walk(&self) -> Tags<'_> {
        Tags::new(&self.root.child_tags)
    }

    pub fn walk_mut(&mut self) -> TagSlots<'_> {
        TagSlots::new(&mut self.root.child_tags)
    }

    /// Depth of the deepest tag; 0 for a tree without tags.
    pub fn max_depth(&self) -> usize {
        self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Tags without children, in pre-order.
    pub fn leaf_tags(&self) -> Vec<&Tag> {
        self.walk()
            .filter(|(tag, _)| tag.is_leaf())
            .map(|(tag, _)| tag)
            .collect()
    }

    pub fn tag_count(&self) -> usize {
        self.walk().count()
    }

    /// Follow a title path from the root, e.g. `["Science", "Biology"]`.
    pub fn find_path(&self, path: &[&str]) -> Option<&Tag> {
        let (first, rest) = path.split_first()?;
        let mut tag = self.root.find_child(first)?;
        for title in rest {
            tag = tag.find_child(title)?;
        }
        Some(tag)
    }
}
