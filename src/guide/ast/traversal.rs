//! Tag traversal
//!
//!     Pre-order walks over the tag hierarchy using an explicit stack of child
//!     iterators, so depth is bounded by heap memory rather than the call stack.
//!     Top-level tags are at depth 1.

use std::slice;

use super::elements::Tag;
use crate::guide::ontology::{ContextType, TagType};

/// Shared pre-order walk yielding `(tag, depth)`.
pub struct Tags<'a> {
    stack: Vec<(slice::Iter<'a, Tag>, usize)>,
}

impl<'a> Tags<'a> {
    pub(crate) fn new(top: &'a [Tag]) -> Self {
        Self {
            stack: vec![(top.iter(), 1)],
        }
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = (&'a Tag, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (iter, depth) = self.stack.last_mut()?;
            let depth = *depth;
            match iter.next() {
                Some(tag) => {
                    self.stack.push((tag.child_tags.iter(), depth + 1));
                    return Some((tag, depth));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Mutable view of the classification fields of one tag.
///
/// Only `tag_type` and `context_type` are writable; identity fields stay untouched.
pub struct TagSlot<'a> {
    pub title: &'a str,
    pub depth: usize,
    pub tag_type: &'a mut TagType,
    pub context_type: &'a mut ContextType,
}

/// Mutable pre-order walk yielding a [TagSlot] per tag.
pub struct TagSlots<'a> {
    stack: Vec<(slice::IterMut<'a, Tag>, usize)>,
}

impl<'a> TagSlots<'a> {
    pub(crate) fn new(top: &'a mut [Tag]) -> Self {
        Self {
            stack: vec![(top.iter_mut(), 1)],
        }
    }
}

impl<'a> Iterator for TagSlots<'a> {
    type Item = TagSlot<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (iter, depth) = self.stack.last_mut()?;
            let depth = *depth;
            match iter.next() {
                Some(tag) => {
                    let Tag {
                        title,
                        tag_type,
                        context_type,
                        child_tags,
                        ..
                    } = tag;
                    self.stack.push((child_tags.iter_mut(), depth + 1));
                    let title: &'a String = title;
                    return Some(TagSlot {
                        title: title.as_str(),
                        depth,
                        tag_type,
                        context_type,
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
