//! YAML node representation with provenance tracking.
//!
//! Every node owns the [`YamlPath`] that leads to it, and the path of each
//! child is its parent's path extended by exactly one step (two for map
//! values: key, then value). Nodes are immutable once built; operations that
//! "change" a node, such as [`YamlNode::with_path`], build a new tree.
//!
//! # Example
//!
//! ```
//! use yamlnode::document::node::YamlNode;
//! use yamlnode::yamlpath::{Location, YamlPath};
//!
//! let root = YamlPath::root();
//! let list = YamlNode::list(
//!     vec![
//!         YamlNode::scalar("hello", root.with_list_entry(0, Location::new(1, 3))),
//!         YamlNode::scalar("world", root.with_list_entry(1, Location::new(2, 3))),
//!     ],
//!     root.clone(),
//! );
//!
//! assert_eq!(list.content_to_string(), "['hello', 'world']");
//!
//! let moved = list.with_path(YamlPath::root().with_error(Location::new(9, 1)));
//! assert!(list.equivalent_content_to(&moved));
//! assert_ne!(list, moved);
//! ```

use std::ops::Index;

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::equivalence::ContentKey;
use super::error::{Result, YamlError};
use crate::yamlpath::{Location, YamlPath};

/// A node of a YAML document.
///
/// `PartialEq` compares content *and* paths. Use
/// [`equivalent_content_to`](YamlNode::equivalent_content_to) to compare
/// content alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlNode {
    Scalar(YamlScalar),
    List(YamlList),
    Map(YamlMap),
    Null(YamlNull),
}

/// A leaf holding the scalar's text exactly as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlScalar {
    pub(crate) content: String,
    pub(crate) path: YamlPath,
}

/// An ordered sequence of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlList {
    pub(crate) items: Vec<YamlNode>,
    pub(crate) path: YamlPath,
}

/// A mapping with keys unique by content, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlMap {
    pub(crate) entries: IndexMap<ContentKey, YamlMapEntry>,
    pub(crate) path: YamlPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct YamlMapEntry {
    pub(crate) key: YamlNode,
    pub(crate) value: YamlNode,
}

/// An explicit or implicit null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlNull {
    pub(crate) path: YamlPath,
}

impl YamlNode {
    pub fn scalar(content: impl Into<String>, path: YamlPath) -> Self {
        YamlNode::Scalar(YamlScalar::new(content, path))
    }

    pub fn list(items: Vec<YamlNode>, path: YamlPath) -> Self {
        YamlNode::List(YamlList::new(items, path))
    }

    /// Builds a map from `(key, value)` pairs, keeping their order.
    ///
    /// Fails with [`YamlError::DuplicateKey`] when two keys have equivalent
    /// content, whatever their paths.
    pub fn map(
        entries: impl IntoIterator<Item = (YamlNode, YamlNode)>,
        path: YamlPath,
    ) -> Result<Self> {
        YamlMap::new(entries, path).map(YamlNode::Map)
    }

    pub fn null(path: YamlPath) -> Self {
        YamlNode::Null(YamlNull::new(path))
    }

    pub fn path(&self) -> &YamlPath {
        match self {
            YamlNode::Scalar(scalar) => &scalar.path,
            YamlNode::List(list) => &list.path,
            YamlNode::Map(map) => &map.path,
            YamlNode::Null(null) => &null.path,
        }
    }

    /// Where this node starts in the source.
    pub fn location(&self) -> Location {
        self.path().end_location()
    }

    /// Lowercase variant name, as used by the tree rendering.
    pub fn variant_name(&self) -> &'static str {
        match self {
            YamlNode::Scalar(_) => "scalar",
            YamlNode::List(_) => "list",
            YamlNode::Map(_) => "map",
            YamlNode::Null(_) => "null",
        }
    }

    /// Returns a copy of this subtree re-rooted at `new_path`.
    ///
    /// Each descendant keeps the segments it had relative to `self` (list
    /// indices, keys, and their source locations); only the prefix changes.
    /// Content is untouched and the result shares nothing mutable with `self`.
    pub fn with_path(&self, new_path: YamlPath) -> Self {
        tracing::trace!(
            kind = self.variant_name(),
            from = %self.path(),
            to = %new_path,
            "rebasing node"
        );
        match self {
            YamlNode::Scalar(scalar) => YamlNode::Scalar(scalar.with_path(new_path)),
            YamlNode::List(list) => YamlNode::List(list.with_path(new_path)),
            YamlNode::Map(map) => YamlNode::Map(map.with_path(new_path)),
            YamlNode::Null(null) => YamlNode::Null(null.with_path(new_path)),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, YamlNode::Scalar(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, YamlNode::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, YamlNode::Map(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, YamlNode::Null(_))
    }

    pub fn as_scalar(&self) -> Option<&YamlScalar> {
        match self {
            YamlNode::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&YamlList> {
        match self {
            YamlNode::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&YamlMap> {
        match self {
            YamlNode::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_null(&self) -> Option<&YamlNull> {
        match self {
            YamlNode::Null(null) => Some(null),
            _ => None,
        }
    }
}

impl From<YamlScalar> for YamlNode {
    fn from(scalar: YamlScalar) -> Self {
        YamlNode::Scalar(scalar)
    }
}

impl From<YamlList> for YamlNode {
    fn from(list: YamlList) -> Self {
        YamlNode::List(list)
    }
}

impl From<YamlMap> for YamlNode {
    fn from(map: YamlMap) -> Self {
        YamlNode::Map(map)
    }
}

impl From<YamlNull> for YamlNode {
    fn from(null: YamlNull) -> Self {
        YamlNode::Null(null)
    }
}

impl YamlScalar {
    pub fn new(content: impl Into<String>, path: YamlPath) -> Self {
        Self {
            content: content.into(),
            path,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn path(&self) -> &YamlPath {
        &self.path
    }

    pub fn location(&self) -> Location {
        self.path.end_location()
    }

    pub fn with_path(&self, new_path: YamlPath) -> Self {
        Self::new(self.content.clone(), new_path)
    }
}

impl YamlList {
    /// `items[i]` is expected to sit at `path.with_list_entry(i, ..)`.
    pub fn new(items: Vec<YamlNode>, path: YamlPath) -> Self {
        Self { items, path }
    }

    pub fn items(&self) -> &[YamlNode] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YamlNode> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&YamlNode> {
        self.items.get(index)
    }

    /// Like [`get`](YamlList::get), but reports the index, size and path of
    /// the list when `index` is past the end.
    pub fn try_get(&self, index: usize) -> Result<&YamlNode> {
        self.items.get(index).ok_or_else(|| YamlError::IndexOutOfRange {
            index,
            len: self.items.len(),
            path: self.path.clone(),
        })
    }

    pub fn path(&self) -> &YamlPath {
        &self.path
    }

    pub fn location(&self) -> Location {
        self.path.end_location()
    }

    pub fn with_path(&self, new_path: YamlPath) -> Self {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let path = new_path.with_list_entry(index, item.location());
                item.with_path(path)
            })
            .collect();
        Self::new(items, new_path)
    }
}

impl Index<usize> for YamlList {
    type Output = YamlNode;

    /// Panics with the out-of-range diagnostic when `index >= len`.
    fn index(&self, index: usize) -> &YamlNode {
        match self.try_get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a> IntoIterator for &'a YamlList {
    type Item = &'a YamlNode;
    type IntoIter = std::slice::Iter<'a, YamlNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl YamlMap {
    /// See [`YamlNode::map`].
    pub fn new(
        entries: impl IntoIterator<Item = (YamlNode, YamlNode)>,
        path: YamlPath,
    ) -> Result<Self> {
        let mut map: IndexMap<ContentKey, YamlMapEntry> = IndexMap::new();
        for (key, value) in entries {
            match map.entry(key.content_key()) {
                Entry::Occupied(existing) => {
                    return Err(YamlError::DuplicateKey {
                        key: key.content_to_string(),
                        original_path: existing.get().key.path().clone(),
                        duplicate_path: key.path().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(YamlMapEntry { key, value });
                }
            }
        }
        Ok(Self { entries: map, path })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, value)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&YamlNode, &YamlNode)> {
        self.entries
            .values()
            .map(|entry| (&entry.key, &entry.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &YamlNode> {
        self.entries.values().map(|entry| &entry.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &YamlNode> {
        self.entries.values().map(|entry| &entry.value)
    }

    /// Looks up the value whose key has the same content as `key`.
    pub fn get(&self, key: &YamlNode) -> Option<&YamlNode> {
        self.entries
            .get(&key.content_key())
            .map(|entry| &entry.value)
    }

    /// Looks up the value of the scalar key `key`.
    pub fn get_by_str(&self, key: &str) -> Option<&YamlNode> {
        self.entries
            .get(&ContentKey::scalar(key))
            .map(|entry| &entry.value)
    }

    pub fn get_scalar(&self, key: &str) -> Option<&YamlScalar> {
        self.get_by_str(key).and_then(YamlNode::as_scalar)
    }

    /// The key node itself, e.g. to report an error at the key's location.
    pub fn get_key(&self, key: &str) -> Option<&YamlScalar> {
        self.entries
            .get(&ContentKey::scalar(key))
            .and_then(|entry| entry.key.as_scalar())
    }

    pub fn path(&self) -> &YamlPath {
        &self.path
    }

    pub fn location(&self) -> Location {
        self.path.end_location()
    }

    pub fn with_path(&self, new_path: YamlPath) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(content, entry)| {
                let key_path = entry.key.path().rebase(&self.path, &new_path);
                let value_path = entry.value.path().rebase(&self.path, &new_path);
                let key = entry.key.with_path(key_path);
                let value = entry.value.with_path(value_path);
                (content.clone(), YamlMapEntry { key, value })
            })
            .collect();
        Self {
            entries,
            path: new_path,
        }
    }
}

impl YamlNull {
    pub fn new(path: YamlPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &YamlPath {
        &self.path
    }

    pub fn location(&self) -> Location {
        self.path.end_location()
    }

    pub fn with_path(&self, new_path: YamlPath) -> Self {
        Self::new(new_path)
    }
}
