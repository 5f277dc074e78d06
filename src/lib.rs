//! # yamlnode
//!
//! An immutable YAML document tree in which every node carries the route from
//! the document root to itself, with a source location per step. Consumers use
//! it to report precise diagnostics ("at <root>.servers[2].port, line 4,
//! column 5") after the document has been parsed and transformed.
//!
//! The tree is built by an external parser, which threads a
//! [`YamlPath`](yamlpath::YamlPath) down while it constructs nodes. Once
//! built, nodes support:
//!
//! - content comparison that ignores provenance
//!   ([`YamlNode::equivalent_content_to`](document::YamlNode::equivalent_content_to)),
//! - re-rooting a subtree under a new path, e.g. when an alias is expanded
//!   at its reference site ([`YamlNode::with_path`](document::YamlNode::with_path)),
//! - a one-line content rendering and a multi-line debug dump.
//!
//! ## Example
//!
//! ```
//! use yamlnode::document::YamlNode;
//! use yamlnode::yamlpath::{Location, YamlPath};
//!
//! let root = YamlPath::root();
//! let list = YamlNode::list(
//!     vec![YamlNode::scalar("hello", root.with_list_entry(0, Location::new(1, 3)))],
//!     root,
//! );
//!
//! assert_eq!(
//!     list.to_string(),
//!     "list @ <root> (size: 1)\n- item 0:\n  scalar @ <root>[0] : hello"
//! );
//! ```

pub mod config;
pub mod document;
pub mod yamlpath;

pub use document::{ContentKey, YamlError, YamlList, YamlMap, YamlNode, YamlNull, YamlScalar};
pub use yamlpath::{Location, PathSegment, YamlPath};
