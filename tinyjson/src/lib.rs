// SPDX-License-Identifier: Apache-2.0

//! A destructive, zero-allocation JSON parser.
//!
//! The input buffer is parsed in place: strings are unescaped where they
//! stand and literals are NUL-terminated inside the buffer. The resulting
//! tree lives in a node slice supplied by the caller, so the parser never
//! touches the heap and the worst-case memory use is fixed up front.
//!
//! ```
//! use tinyjson::{parse, Node, NodeKind};
//!
//! let mut text = *br#"{"name": "sensor", "readings": [1, 2, 3]}"#;
//! let mut nodes = [Node::EMPTY; 8];
//! let json = parse(&mut text, &mut nodes).unwrap();
//!
//! let root = json.root();
//! assert_eq!(root.property_value("name"), Some("sensor"));
//! let readings = root.property("readings").unwrap();
//! assert_eq!(readings.kind(), NodeKind::Array);
//! let sum: i64 = readings.children().filter_map(|r| r.as_i64().ok()).sum();
//! assert_eq!(sum, 6);
//! ```

#![cfg_attr(not(test), no_std)]

mod container_stack;

mod escape_processor;

mod int_parser;

mod json_value;
pub use json_value::{Children, Json, JsonValue};

mod node_pool;
pub use node_pool::{Node, NodeKind};

mod number_parser;

mod parse_error;
pub use parse_error::{ParseError, ValueError};

mod parser;
pub use parser::{parse, parse_copy, Parser, DEFAULT_MAX_DEPTH};

mod scanner;

mod shared;
