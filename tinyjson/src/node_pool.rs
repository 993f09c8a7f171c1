// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// The type of a parsed JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// A quoted string, stored unescaped.
    Text,
    /// `true` or `false`
    Boolean,
    /// A number without fraction or exponent that fits in `i64`.
    Integer,
    /// A number with a fraction and/or an exponent.
    Real,
    /// `null`
    Null,
}

impl NodeKind {
    /// Objects and arrays own children; everything else carries a literal.
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }

    /// Lower-case name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::Text => "text",
            NodeKind::Boolean => "boolean",
            NodeKind::Integer => "integer",
            NodeKind::Real => "real",
            NodeKind::Null => "null",
        }
    }
}

impl core::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open byte range into the parsed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Payload {
    /// First child of a container, if any.
    Children(Option<usize>),
    /// Literal text of a primitive.
    Literal(Span),
}

/// One slot of caller-provided node storage.
///
/// Nodes are opaque; declare storage as `[Node::EMPTY; N]` and read the
/// parsed tree through [`Json`](crate::Json).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) name: Option<Span>,
    pub(crate) payload: Payload,
    pub(crate) next_sibling: Option<usize>,
}

impl Node {
    /// An unused slot.
    pub const EMPTY: Node = Node {
        kind: NodeKind::Null,
        name: None,
        payload: Payload::Children(None),
        next_sibling: None,
    };

    pub(crate) fn container(kind: NodeKind, name: Option<Span>) -> Self {
        Self {
            kind,
            name,
            payload: Payload::Children(None),
            next_sibling: None,
        }
    }

    pub(crate) fn primitive(kind: NodeKind, name: Option<Span>, literal: Span) -> Self {
        Self {
            kind,
            name,
            payload: Payload::Literal(literal),
            next_sibling: None,
        }
    }

    pub(crate) fn first_child(&self) -> Option<usize> {
        match self.payload {
            Payload::Children(first) => first,
            Payload::Literal(_) => None,
        }
    }

    pub(crate) fn literal(&self) -> Option<Span> {
        match self.payload {
            Payload::Literal(span) => Some(span),
            Payload::Children(_) => None,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Bump allocator over a caller-supplied slice of nodes.
///
/// Slot 0 always holds the root object. Slots are handed out in order and
/// never reclaimed.
#[derive(Debug)]
pub(crate) struct NodePool<'n> {
    nodes: &'n mut [Node],
    next_free: usize,
}

impl<'n> NodePool<'n> {
    pub const ROOT: usize = 0;

    /// Reserves slot 0 for the root object.
    pub fn new(nodes: &'n mut [Node]) -> Result<Self, ParseError> {
        let root = nodes.first_mut().ok_or(ParseError::PoolExhausted)?;
        *root = Node::container(NodeKind::Object, None);
        Ok(Self {
            nodes,
            next_free: 1,
        })
    }

    /// Stores `node` in the next free slot and returns its index.
    pub fn allocate(&mut self, node: Node) -> Result<usize, ParseError> {
        let index = self.next_free;
        let slot = self
            .nodes
            .get_mut(index)
            .ok_or(ParseError::PoolExhausted)?;
        *slot = node;
        self.next_free = index.saturating_add(1);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Result<&Node, ParseError> {
        self.nodes
            .get(index)
            .ok_or(ParseError::UnexpectedState("Node index out of range"))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Node, ParseError> {
        self.nodes
            .get_mut(index)
            .ok_or(ParseError::UnexpectedState("Node index out of range"))
    }

    /// Links `child` after `last_child`, or as the first child of `parent`
    /// when the container is still empty.
    pub fn append_child(
        &mut self,
        parent: usize,
        last_child: Option<usize>,
        child: usize,
    ) -> Result<(), ParseError> {
        match last_child {
            Some(prev) => self.get_mut(prev)?.next_sibling = Some(child),
            None => self.get_mut(parent)?.payload = Payload::Children(Some(child)),
        }
        Ok(())
    }

    /// Number of slots handed out so far, root included.
    pub fn used(&self) -> usize {
        self.next_free
    }

    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Gives up write access and returns the occupied prefix.
    pub fn into_used(self) -> &'n [Node] {
        let used = self.next_free;
        let nodes: &'n [Node] = self.nodes;
        nodes.get(..used).unwrap_or(nodes)
    }
}
