//! Syntax tree
//!
//!     An arena of [SyntaxNode]s addressed by [NodeId]. Children are owned by the arena;
//!     `parent` is a plain index used only for the parser's upward search, so there are
//!     no reference cycles and no interior mutability. The root is always node 0, the
//!     file header.
//!
//!     Serialization produces the nested `{type, data, children}` shape, with
//!     `children` omitted on leaves.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::guide::metadata::Metadata;
use crate::guide::preparsing::ParsedValue;
use crate::guide::token::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: TokenType,
    pub value: ParsedValue,
    /// Source line the node was built from.
    pub line: usize,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl SyntaxNode {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub metadata: Metadata,
    /// RFC 3339 UTC creation time.
    pub timestamp: String,
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// Start a tree whose root is the given file header node.
    pub(crate) fn with_root(
        metadata: Metadata,
        timestamp: String,
        value: ParsedValue,
        line: usize,
    ) -> Self {
        Self {
            metadata,
            timestamp,
            nodes: vec![SyntaxNode {
                kind: TokenType::FileHeader,
                value,
                line,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    pub(crate) fn attach(
        &mut self,
        parent: NodeId,
        kind: TokenType,
        value: ParsedValue,
        line: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SyntaxNode {
            kind,
            value,
            line,
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root_id(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.nodes[0]
    }

    /// Panics on an id from another tree.
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.node(id).children.iter().map(move |child| self.node(*child))
    }

    /// `id` itself followed by each parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| self.node(*current).parent)
    }

    /// Nearest node of `kind`, starting at `from` and walking up.
    pub fn nearest(&self, from: NodeId, kind: TokenType) -> Option<NodeId> {
        self.ancestors(from).find(|id| self.node(*id).kind == kind)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk yielding each node id with its depth (root at 0).
    pub fn walk(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        std::iter::from_fn(move || {
            let (id, depth) = stack.pop()?;
            let children = &self.node(id).children;
            stack.extend(children.iter().rev().map(|child| (*child, depth + 1)));
            Some((id, depth))
        })
    }

    fn view(&self, id: NodeId) -> NodeView<'_> {
        NodeView { tree: self, id }
    }
}

struct NodeView<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.tree.node(self.id);
        let has_children = !node.children.is_empty();
        let mut state =
            serializer.serialize_struct("SyntaxNode", if has_children { 3 } else { 2 })?;
        state.serialize_field("type", &node.kind)?;
        state.serialize_field("data", &node.value)?;
        if has_children {
            let children: Vec<NodeView<'_>> =
                node.children.iter().map(|child| self.tree.view(*child)).collect();
            state.serialize_field("children", &children)?;
        }
        state.end()
    }
}

impl Serialize for SyntaxTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SyntaxTree", 3)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.serialize_field("root", &self.view(NodeId::ROOT))?;
        state.end()
    }
}
