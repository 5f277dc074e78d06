//! Persistent navigation routes from the document root to a node.
//!
//! A [`YamlPath`] is a singly-linked chain of segments that grows at the tail.
//! Extending a path allocates one link and shares the whole prefix with the
//! path it was extended from, so threading paths down a tree while it is
//! being built costs one allocation per node. Links are reference counted
//! with [`Arc`], which makes paths (and every node holding one) `Send + Sync`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::location::Location;
use super::segment::PathSegment;

/// The route from the document root to a node, with a source location per step.
///
/// Paths are immutable. Every `with_*` / `for_*` method returns a new path
/// one segment longer and leaves the receiver untouched.
///
/// # Example
///
/// ```
/// use yamlnode::yamlpath::{Location, YamlPath};
///
/// let items = YamlPath::root()
///     .with_map_element_key("items", Location::new(1, 1))
///     .with_map_element_value(Location::new(2, 3));
/// let first = items.with_list_entry(0, Location::new(2, 5));
///
/// assert_eq!(first.to_string(), "<root>.items[0]");
/// assert_eq!(first.end_location(), Location::new(2, 5));
/// assert_eq!(items.depth(), 3);
/// ```
#[derive(Clone)]
pub struct YamlPath {
    head: Arc<Link>,
}

struct Link {
    segment: PathSegment,
    parent: Option<Arc<Link>>,
    depth: usize,
}

impl YamlPath {
    /// The canonical single-segment path `[Root]`.
    pub fn root() -> Self {
        Self {
            head: Arc::new(Link {
                segment: PathSegment::Root,
                parent: None,
                depth: 1,
            }),
        }
    }

    fn push(&self, segment: PathSegment) -> Self {
        debug_assert!(!segment.is_root(), "Root may only start a path");
        Self {
            head: Arc::new(Link {
                segment,
                parent: Some(Arc::clone(&self.head)),
                depth: self.head.depth + 1,
            }),
        }
    }

    pub fn with_list_entry(&self, index: usize, location: Location) -> Self {
        self.push(PathSegment::ListEntry { index, location })
    }

    pub fn with_map_element_key(&self, key: impl Into<String>, location: Location) -> Self {
        self.push(PathSegment::MapElementKey {
            key: key.into(),
            location,
        })
    }

    pub fn with_map_element_value(&self, location: Location) -> Self {
        self.push(PathSegment::MapElementValue { location })
    }

    pub fn for_alias_definition(&self, name: impl Into<String>, location: Location) -> Self {
        self.push(PathSegment::AliasDefinition {
            name: name.into(),
            location,
        })
    }

    pub fn for_alias_reference(&self, name: impl Into<String>, location: Location) -> Self {
        self.push(PathSegment::AliasReference {
            name: name.into(),
            location,
        })
    }

    pub fn with_merge(&self, location: Location) -> Self {
        self.push(PathSegment::Merge { location })
    }

    pub fn with_error(&self, location: Location) -> Self {
        self.push(PathSegment::Error { location })
    }

    /// Number of segments, including the leading `Root`. Always at least 1.
    pub fn depth(&self) -> usize {
        self.head.depth
    }

    pub fn is_root(&self) -> bool {
        self.head.parent.is_none()
    }

    pub fn last_segment(&self) -> &PathSegment {
        &self.head.segment
    }

    /// The path with its last segment removed, or `None` for the root path.
    pub fn parent(&self) -> Option<YamlPath> {
        self.head.parent.as_ref().map(|parent| Self {
            head: Arc::clone(parent),
        })
    }

    /// All segments, root first.
    pub fn segments(&self) -> Vec<&PathSegment> {
        let mut segments: Vec<&PathSegment> = self.links().map(|link| &link.segment).collect();
        segments.reverse();
        segments
    }

    /// Where the node this path leads to starts in the source.
    ///
    /// The root path reports the start of the document.
    pub fn end_location(&self) -> Location {
        self.head.segment.location().unwrap_or_else(Location::start)
    }

    /// True when `prefix` is this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &YamlPath) -> bool {
        if prefix.depth() > self.depth() {
            return false;
        }
        let skip = self.depth() - prefix.depth();
        match self.links().nth(skip) {
            Some(link) => YamlPath::chain_eq(link, &prefix.head),
            None => false,
        }
    }

    /// Re-roots this path: the segments it has beyond `old_base` are appended
    /// to `new_base`.
    ///
    /// `old_base` must be a prefix of `self`.
    pub fn rebase(&self, old_base: &YamlPath, new_base: &YamlPath) -> YamlPath {
        debug_assert!(self.starts_with(old_base), "{self} is not under {old_base}");
        let relative = self.depth().saturating_sub(old_base.depth());
        let suffix: Vec<&Link> = self.links().take(relative).collect();
        let mut rebased = new_base.clone();
        for link in suffix.into_iter().rev() {
            rebased = rebased.push(link.segment.clone());
        }
        rebased
    }

    /// The navigation chain as shown in diagnostics, e.g. `<root>.items[0]`.
    pub fn to_human_readable_string(&self) -> String {
        let mut out = String::new();
        for segment in self.segments() {
            segment.write_human_readable(&mut out);
        }
        out
    }

    /// Links from the last segment back to the root.
    fn links(&self) -> impl Iterator<Item = &Link> {
        std::iter::successors(Some(self.head.as_ref()), |link| link.parent.as_deref())
    }

    fn chain_eq(a: &Link, b: &Arc<Link>) -> bool {
        let mut left = Some(a);
        let mut right = Some(b.as_ref());
        while let (Some(x), Some(y)) = (left, right) {
            if std::ptr::eq(x, y) {
                return true;
            }
            if x.depth != y.depth || x.segment != y.segment {
                return false;
            }
            left = x.parent.as_deref();
            right = y.parent.as_deref();
        }
        left.is_none() && right.is_none()
    }
}

impl Default for YamlPath {
    fn default() -> Self {
        Self::root()
    }
}

impl PartialEq for YamlPath {
    fn eq(&self, other: &Self) -> bool {
        YamlPath::chain_eq(&self.head, &other.head)
    }
}

impl Eq for YamlPath {}

impl Hash for YamlPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth().hash(state);
        for link in self.links() {
            link.segment.hash(state);
        }
    }
}

impl fmt::Debug for YamlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("YamlPath").field(&self.segments()).finish()
    }
}

impl fmt::Display for YamlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human_readable_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(line: usize, column: usize) -> Location {
        Location::new(line, column)
    }

    #[test]
    fn test_root_path() {
        let root = YamlPath::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 1);
        assert_eq!(root.segments(), vec![&PathSegment::Root]);
        assert_eq!(root.end_location(), Location::start());
        assert_eq!(root.parent(), None);
        assert_eq!(root.to_string(), "<root>");
    }

    #[test]
    fn test_extension_does_not_mutate_receiver() {
        let root = YamlPath::root();
        let child = root.with_list_entry(0, loc(1, 3));

        assert_eq!(root, YamlPath::root());
        assert_eq!(root.depth(), 1);
        assert_eq!(child.depth(), 2);
        assert_eq!(child.parent(), Some(root));
    }

    #[test]
    fn test_siblings_share_prefix_but_differ() {
        let base = YamlPath::root().with_map_element_key("a", loc(1, 1));
        let first = base.with_list_entry(0, loc(2, 3));
        let second = base.with_list_entry(1, loc(3, 3));

        assert_ne!(first, second);
        assert!(first.starts_with(&base));
        assert!(second.starts_with(&base));
        assert!(!first.starts_with(&second));
    }

    #[test]
    fn test_structural_equality_across_separately_built_paths() {
        let a = YamlPath::root()
            .with_map_element_key("k", loc(1, 1))
            .with_map_element_value(loc(1, 4));
        let b = YamlPath::root()
            .with_map_element_key("k", loc(1, 1))
            .with_map_element_value(loc(1, 4));
        let c = YamlPath::root()
            .with_map_element_key("k", loc(1, 1))
            .with_map_element_value(loc(1, 5));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_order_of_segments_matters() {
        let a = YamlPath::root()
            .with_list_entry(0, loc(1, 1))
            .with_list_entry(1, loc(1, 1));
        let b = YamlPath::root()
            .with_list_entry(1, loc(1, 1))
            .with_list_entry(0, loc(1, 1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_end_location_is_last_segment_location() {
        let path = YamlPath::root()
            .with_map_element_key("key", loc(3, 1))
            .with_map_element_value(loc(3, 6));
        assert_eq!(path.end_location(), loc(3, 6));
    }

    #[test]
    fn test_human_readable_grammar() {
        let path = YamlPath::root()
            .with_map_element_key("servers", loc(1, 1))
            .with_map_element_value(loc(2, 3))
            .with_list_entry(2, loc(4, 3))
            .with_map_element_key("host", loc(4, 5))
            .with_map_element_value(loc(4, 11));
        assert_eq!(path.to_human_readable_string(), "<root>.servers[2].host");
    }

    #[test]
    fn test_human_readable_aliases() {
        let path = YamlPath::root()
            .with_map_element_key("derived", loc(5, 1))
            .with_map_element_value(loc(5, 10))
            .for_alias_reference("base", loc(5, 10))
            .for_alias_definition("base", loc(1, 7))
            .with_map_element_key("name", loc(2, 3));
        assert_eq!(path.to_string(), "<root>.derived->*base.name");
    }

    #[test]
    fn test_rebase_keeps_relative_segments() {
        let old_base = YamlPath::root().with_list_entry(0, loc(1, 3));
        let node = old_base
            .with_map_element_key("x", loc(1, 5))
            .with_map_element_value(loc(1, 8));
        let new_base = YamlPath::root()
            .with_map_element_key("copy", loc(9, 1))
            .with_map_element_value(loc(9, 7));

        let rebased = node.rebase(&old_base, &new_base);

        assert_eq!(
            rebased,
            new_base
                .with_map_element_key("x", loc(1, 5))
                .with_map_element_value(loc(1, 8))
        );
        assert!(rebased.starts_with(&new_base));
    }

    #[test]
    fn test_rebase_of_base_itself_is_new_base() {
        let old_base = YamlPath::root().with_list_entry(3, loc(4, 1));
        let new_base = YamlPath::root().with_error(loc(7, 7));
        assert_eq!(old_base.rebase(&old_base, &new_base), new_base);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        use std::collections::HashSet;

        let same = YamlPath::root().with_list_entry(0, loc(1, 1));
        let moved = YamlPath::root().with_list_entry(0, loc(1, 2));
        let mut set = HashSet::new();
        set.insert(YamlPath::root().with_list_entry(0, loc(1, 1)));
        assert!(set.contains(&same));
        assert!(!set.contains(&moved));
    }

    #[test]
    fn test_paths_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<YamlPath>();
    }
}
