// SPDX-License-Identifier: Apache-2.0

use crate::container_stack::{ContainerStack, Frame};
use crate::json_value::Json;
use crate::node_pool::{Node, NodeKind, NodePool, Span};
use crate::number_parser;
use crate::parse_error::ParseError;
use crate::scanner::Scanner;

/// Nesting depth allowed by [`Parser::new`] and [`parse`], root object included.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Builds a tree of [`Node`]s from a JSON object, in place.
///
/// The parser borrows the node storage for the lifetime of the resulting
/// tree. `MAX_DEPTH` bounds container nesting; the open containers are
/// tracked in an inline array of that size.
pub struct Parser<'n, const MAX_DEPTH: usize = DEFAULT_MAX_DEPTH> {
    nodes: &'n mut [Node],
}

impl<'n> Parser<'n, DEFAULT_MAX_DEPTH> {
    /// Creates a parser that allocates from `nodes`.
    ///
    /// The tree needs one slot per object, array and value, root included.
    ///
    /// # Example
    /// ```
    /// use tinyjson::{Node, Parser};
    /// let mut nodes = [Node::EMPTY; 8];
    /// let parser = Parser::new(&mut nodes);
    /// ```
    pub fn new(nodes: &'n mut [Node]) -> Self {
        Self::with_max_depth(nodes)
    }
}

impl<'n, const MAX_DEPTH: usize> Parser<'n, MAX_DEPTH> {
    /// Creates a parser with a custom nesting limit.
    ///
    /// # Example
    /// ```
    /// use tinyjson::{Node, Parser};
    /// let mut nodes = [Node::EMPTY; 8];
    /// let parser: Parser<'_, 4> = Parser::with_max_depth(&mut nodes);
    /// ```
    pub fn with_max_depth(nodes: &'n mut [Node]) -> Self {
        Self { nodes }
    }

    /// Parses `buffer`, which must hold a JSON object, into a tree.
    ///
    /// The buffer is consumed: string escapes are resolved in place and
    /// closing quotes and the separators after primitives are overwritten
    /// with NUL. Input ends at the end of the slice or at the first NUL
    /// byte. Anything after the root object's closing brace is ignored.
    pub fn parse<'r>(self, buffer: &'r mut [u8]) -> Result<Json<'r>, ParseError>
    where
        'n: 'r,
    {
        let mut builder = TreeBuilder {
            pool: NodePool::new(self.nodes)?,
            scanner: Scanner::new(buffer),
            stack: ContainerStack::<MAX_DEPTH>::new(),
        };
        match builder.run() {
            Ok(consumed) => {
                log::debug!(
                    "Parsed {} of {} nodes from {} bytes",
                    builder.pool.used(),
                    builder.pool.capacity(),
                    consumed
                );
                let text = builder.scanner.into_inner();
                let nodes = builder.pool.into_used();
                Ok(Json::new(text, nodes, consumed))
            }
            Err(err) => {
                log::debug!(
                    "Parse failed at byte {} with {} nodes used: {}",
                    builder.scanner.current_pos(),
                    builder.pool.used(),
                    err
                );
                Err(err)
            }
        }
    }
}

struct TreeBuilder<'a, 'n, const MAX_DEPTH: usize> {
    pool: NodePool<'n>,
    scanner: Scanner<'a>,
    stack: ContainerStack<MAX_DEPTH>,
}

impl<const MAX_DEPTH: usize> TreeBuilder<'_, '_, MAX_DEPTH> {
    /// Returns the position just past the root object's closing brace.
    fn run(&mut self) -> Result<usize, ParseError> {
        if self.scanner.skip_whitespace()? != b'{' {
            return Err(ParseError::NotAnObject);
        }
        self.scanner.advance();
        self.stack.push(Frame::new(NodePool::ROOT))?;

        loop {
            let byte = self.scanner.skip_whitespace()?;
            let container = self.stack.top_mut()?.container;
            let kind = self.pool.get(container)?.kind;
            match byte {
                b'}' | b']' => {
                    let expected = if kind == NodeKind::Object { b'}' } else { b']' };
                    if byte != expected {
                        return Err(ParseError::MismatchedCloser);
                    }
                    self.scanner.advance();
                    self.stack.pop();
                    log::trace!("Closed {} at depth {}", kind, self.stack.depth());
                    if self.stack.is_empty() {
                        return Ok(self.scanner.current_pos());
                    }
                }
                // Separators are optional and may repeat.
                b',' => self.scanner.advance(),
                _ => self.member(kind)?,
            }
        }
    }

    /// Parses one member of the open container and links it as the last child.
    fn member(&mut self, container_kind: NodeKind) -> Result<(), ParseError> {
        let name = if container_kind == NodeKind::Object {
            Some(self.key()?)
        } else {
            None
        };

        let (node, opens) = self.value(name)?;
        let index = self.pool.allocate(node)?;
        let frame = self.stack.top_mut()?;
        let (parent, last_child) = (frame.container, frame.last_child);
        frame.last_child = Some(index);
        self.pool.append_child(parent, last_child, index)?;
        log::trace!("Node {} is a {}", index, node.kind);

        if opens {
            self.stack.push(Frame::new(index))?;
        }
        Ok(())
    }

    /// Parses `"name" :` and leaves the cursor on the value.
    fn key(&mut self) -> Result<Span, ParseError> {
        if self.scanner.peek()? != b'"' {
            return Err(ParseError::UnexpectedCharacter);
        }
        self.scanner.advance();
        let name = self.scanner.unescape_string()?;
        if self.scanner.skip_whitespace()? != b':' {
            return Err(ParseError::UnexpectedCharacter);
        }
        self.scanner.advance();
        self.scanner.skip_whitespace()?;
        Ok(name)
    }

    /// Parses the value at the cursor.
    ///
    /// Containers are only opened here; the flag tells the caller to push
    /// the new node once it has a slot.
    fn value(&mut self, name: Option<Span>) -> Result<(Node, bool), ParseError> {
        let node = match self.scanner.peek()? {
            b'{' => {
                self.scanner.advance();
                return Ok((Node::container(NodeKind::Object, name), true));
            }
            b'[' => {
                self.scanner.advance();
                return Ok((Node::container(NodeKind::Array, name), true));
            }
            b'"' => {
                self.scanner.advance();
                let text = self.scanner.unescape_string()?;
                return Ok((Node::primitive(NodeKind::Text, name, text), false));
            }
            b't' => self.keyword(b"true", NodeKind::Boolean, name)?,
            b'f' => self.keyword(b"false", NodeKind::Boolean, name)?,
            b'n' => self.keyword(b"null", NodeKind::Null, name)?,
            _ => {
                let (kind, literal) = number_parser::scan_number(&mut self.scanner)?;
                Node::primitive(kind, name, literal)
            }
        };
        self.scanner.terminate_primitive()?;
        Ok((node, false))
    }

    fn keyword(
        &mut self,
        literal: &[u8],
        kind: NodeKind,
        name: Option<Span>,
    ) -> Result<Node, ParseError> {
        let start = self.scanner.current_pos();
        self.scanner.match_keyword(literal)?;
        let span = Span::new(start, self.scanner.current_pos());
        Ok(Node::primitive(kind, name, span))
    }
}

/// Parses a JSON object from `buffer` into `nodes` with the default nesting limit.
///
/// See [`Parser::parse`] for what happens to the buffer.
///
/// # Example
/// ```
/// use tinyjson::{parse, Node, NodeKind};
/// let mut text = *br#"{"name": "tiny", "size": 3}"#;
/// let mut nodes = [Node::EMPTY; 3];
/// let json = parse(&mut text, &mut nodes).unwrap();
/// let size = json.root().property("size").unwrap();
/// assert_eq!(size.kind(), NodeKind::Integer);
/// assert_eq!(size.as_i64(), Ok(3));
/// ```
pub fn parse<'r>(buffer: &'r mut [u8], nodes: &'r mut [Node]) -> Result<Json<'r>, ParseError> {
    Parser::new(nodes).parse(buffer)
}

/// Copies `source` into `scratch` and parses the copy, leaving `source` intact.
///
/// Fails with [`ParseError::ScratchBufferFull`] when `scratch` is shorter
/// than `source`.
pub fn parse_copy<'r>(
    source: &[u8],
    scratch: &'r mut [u8],
    nodes: &'r mut [Node],
) -> Result<Json<'r>, ParseError> {
    let target = scratch
        .get_mut(..source.len())
        .ok_or(ParseError::ScratchBufferFull)?;
    target.copy_from_slice(source);
    parse(target, nodes)
}
