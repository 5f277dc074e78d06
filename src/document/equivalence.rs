//! Content comparison that ignores provenance.
//!
//! Two nodes are content-equivalent when they have the same shape and the same
//! scalar text at every position, regardless of the paths and locations they
//! carry. List order matters; map entry order does not.

use super::node::{YamlList, YamlMap, YamlNode};

/// A path-free structural fingerprint of a node's content.
///
/// `a.content_key() == b.content_key()` exactly when
/// `a.equivalent_content_to(&b)`. Map entries are sorted, so two maps with the
/// same entries in different orders produce the same key. Maps use it to keep
/// their keys unique by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKey {
    Null,
    Scalar(String),
    List(Vec<ContentKey>),
    Map(Vec<(ContentKey, ContentKey)>),
}

impl ContentKey {
    pub fn scalar(content: impl Into<String>) -> Self {
        ContentKey::Scalar(content.into())
    }
}

impl YamlNode {
    /// Structural equality of content, ignoring paths at every depth.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnode::document::node::YamlNode;
    /// use yamlnode::yamlpath::{Location, YamlPath};
    ///
    /// let here = YamlNode::scalar("x", YamlPath::root().with_list_entry(0, Location::new(1, 3)));
    /// let there = YamlNode::scalar("x", YamlPath::root().with_list_entry(7, Location::new(9, 3)));
    /// assert!(here.equivalent_content_to(&there));
    /// assert!(!here.equivalent_content_to(&YamlNode::null(YamlPath::root())));
    /// ```
    pub fn equivalent_content_to(&self, other: &YamlNode) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (YamlNode::Scalar(a), YamlNode::Scalar(b)) => a.content == b.content,
            (YamlNode::List(a), YamlNode::List(b)) => a.equivalent_content_to(b),
            (YamlNode::Map(a), YamlNode::Map(b)) => a.equivalent_content_to(b),
            (YamlNode::Null(_), YamlNode::Null(_)) => true,
            (YamlNode::Scalar(_), _)
            | (YamlNode::List(_), _)
            | (YamlNode::Map(_), _)
            | (YamlNode::Null(_), _) => false,
        }
    }

    pub fn content_key(&self) -> ContentKey {
        match self {
            YamlNode::Scalar(scalar) => ContentKey::Scalar(scalar.content.clone()),
            YamlNode::List(list) => {
                ContentKey::List(list.items.iter().map(YamlNode::content_key).collect())
            }
            YamlNode::Map(map) => {
                let mut entries: Vec<(ContentKey, ContentKey)> = map
                    .entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.value.content_key()))
                    .collect();
                entries.sort();
                ContentKey::Map(entries)
            }
            YamlNode::Null(_) => ContentKey::Null,
        }
    }
}

impl YamlList {
    /// Pairwise, in order.
    pub fn equivalent_content_to(&self, other: &YamlList) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.equivalent_content_to(b))
    }
}

impl YamlMap {
    /// Same keys by content, each mapped to an equivalent value.
    pub fn equivalent_content_to(&self, other: &YamlMap) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(key, entry)| {
                other
                    .entries
                    .get(key)
                    .is_some_and(|theirs| entry.value.equivalent_content_to(&theirs.value))
            })
    }
}
