// SPDX-License-Identifier: Apache-2.0

use crate::int_parser::from_ascii_i64;
use crate::node_pool::{Node, NodeKind, NodePool};
use crate::parse_error::ValueError;
use crate::shared::text_at;

/// A parsed JSON document.
///
/// Borrows the rewritten input buffer and the node storage; neither can be
/// touched while the tree is alive.
#[derive(Clone, Copy)]
pub struct Json<'a> {
    text: &'a [u8],
    nodes: &'a [Node],
    consumed: usize,
}

impl<'a> Json<'a> {
    pub(crate) fn new(text: &'a [u8], nodes: &'a [Node], consumed: usize) -> Self {
        Self {
            text,
            nodes,
            consumed,
        }
    }

    /// The top-level object. It has no name.
    pub fn root(&self) -> JsonValue<'a> {
        JsonValue {
            text: self.text,
            nodes: self.nodes,
            index: NodePool::ROOT,
        }
    }

    /// Number of pool slots the tree occupies, root included.
    ///
    /// This is the smallest pool that can hold the same document.
    pub fn nodes_used(&self) -> usize {
        self.nodes.len()
    }

    /// Bytes of input up to and including the root object's closing brace.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl core::fmt::Debug for Json<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Json")
            .field("nodes_used", &self.nodes_used())
            .field("consumed", &self.consumed)
            .finish()
    }
}

/// Handle to one node of a [`Json`] tree.
#[derive(Clone, Copy)]
pub struct JsonValue<'a> {
    text: &'a [u8],
    nodes: &'a [Node],
    index: usize,
}

impl<'a> JsonValue<'a> {
    fn node(&self) -> &'a Node {
        let nodes: &'a [Node] = self.nodes;
        // Handles are only created for indices inside the tree.
        nodes.get(self.index).unwrap_or(&Node::EMPTY)
    }

    fn at(&self, index: usize) -> JsonValue<'a> {
        JsonValue {
            text: self.text,
            nodes: self.nodes,
            index,
        }
    }

    fn expect_kind(&self, expected: NodeKind) -> Result<(), ValueError> {
        let found = self.kind();
        if found == expected {
            Ok(())
        } else {
            Err(ValueError::WrongKind { expected, found })
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind
    }

    /// The member name, for children of an object.
    pub fn name(&self) -> Option<&'a str> {
        self.node().name.map(|span| text_at(self.text, span))
    }

    /// The literal text of a primitive: the unescaped string for text
    /// values, the source spelling for numbers, booleans and null.
    ///
    /// `None` for objects and arrays.
    pub fn value(&self) -> Option<&'a str> {
        self.node().literal().map(|span| text_at(self.text, span))
    }

    /// First child of an object or array.
    pub fn first_child(&self) -> Option<JsonValue<'a>> {
        self.node().first_child().map(|index| self.at(index))
    }

    /// Next node in the same container.
    pub fn next_sibling(&self) -> Option<JsonValue<'a>> {
        self.node().next_sibling.map(|index| self.at(index))
    }

    /// Iterates over the children of an object or array in source order.
    pub fn children(&self) -> Children<'a> {
        Children {
            next: self.first_child(),
        }
    }

    /// Finds a direct member of an object by name.
    ///
    /// Comparison is exact and case-sensitive; with duplicate names the
    /// first one wins. Always `None` on anything but an object.
    pub fn property(&self, name: &str) -> Option<JsonValue<'a>> {
        if self.kind() != NodeKind::Object {
            return None;
        }
        self.children().find(|child| child.name() == Some(name))
    }

    /// Literal text of a named member; `None` if it is missing or a container.
    pub fn property_value(&self, name: &str) -> Option<&'a str> {
        self.property(name).and_then(|member| member.value())
    }

    pub fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }

    /// The unescaped content of a text value.
    pub fn as_str(&self) -> Result<&'a str, ValueError> {
        self.expect_kind(NodeKind::Text)?;
        Ok(self.value().unwrap_or(""))
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        self.expect_kind(NodeKind::Boolean)?;
        Ok(self.value() == Some("true"))
    }

    pub fn as_i64(&self) -> Result<i64, ValueError> {
        self.expect_kind(NodeKind::Integer)?;
        let literal = self.value().unwrap_or("");
        from_ascii_i64(literal.as_bytes()).map_err(|_| ValueError::InvalidNumber)
    }

    /// Reads a real or integer value as `f64`.
    ///
    /// Integers beyond 2^53 lose precision; use [`value`](Self::value) for the
    /// exact spelling.
    #[cfg(feature = "float")]
    pub fn as_f64(&self) -> Result<f64, ValueError> {
        match self.kind() {
            NodeKind::Real | NodeKind::Integer => self
                .value()
                .unwrap_or("")
                .parse::<f64>()
                .map_err(|_| ValueError::InvalidNumber),
            found => Err(ValueError::WrongKind {
                expected: NodeKind::Real,
                found,
            }),
        }
    }
}

impl core::fmt::Debug for JsonValue<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JsonValue")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

/// Two handles are equal when they refer to the same node of the same tree.
impl PartialEq for JsonValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.nodes, other.nodes) && self.index == other.index
    }
}

/// Iterator over the children of a container, see [`JsonValue::children`].
#[derive(Debug, Clone)]
pub struct Children<'a> {
    next: Option<JsonValue<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = JsonValue<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}
