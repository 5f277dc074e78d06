//! Individual navigation steps of a [`YamlPath`](super::YamlPath).

use super::location::Location;

/// One step from a parent node into a child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// The document root. Only ever the first segment of a path.
    Root,
    /// The `index`-th element of the enclosing list.
    ListEntry { index: usize, location: Location },
    /// The key position of a map entry.
    MapElementKey { key: String, location: Location },
    /// The value position of a map entry. Follows a `MapElementKey`.
    MapElementValue { location: Location },
    /// The point where an anchor (`&name`) is defined.
    AliasDefinition { name: String, location: Location },
    /// The point where an alias (`*name`) refers back to an anchor.
    AliasReference { name: String, location: Location },
    /// A `<<` merge key whose mapping is spliced into the enclosing map.
    Merge { location: Location },
    /// A synthetic position used to point a diagnostic somewhere precise.
    Error { location: Location },
}

impl PathSegment {
    /// Source location of this step. `Root` has none.
    pub fn location(&self) -> Option<Location> {
        match self {
            PathSegment::Root => None,
            PathSegment::ListEntry { location, .. }
            | PathSegment::MapElementKey { location, .. }
            | PathSegment::MapElementValue { location }
            | PathSegment::AliasDefinition { location, .. }
            | PathSegment::AliasReference { location, .. }
            | PathSegment::Merge { location }
            | PathSegment::Error { location } => Some(*location),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, PathSegment::Root)
    }

    /// Text this step contributes to the human-readable form of a path.
    pub(crate) fn write_human_readable(&self, out: &mut String) {
        match self {
            PathSegment::Root => out.push_str("<root>"),
            PathSegment::ListEntry { index, .. } => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
            PathSegment::MapElementKey { key, .. } => {
                out.push('.');
                if needs_quoting(key) {
                    out.push('\'');
                    out.push_str(&key.replace('\'', "''"));
                    out.push('\'');
                } else {
                    out.push_str(key);
                }
            }
            PathSegment::AliasReference { name, .. } => {
                out.push_str("->*");
                out.push_str(name);
            }
            PathSegment::MapElementValue { .. }
            | PathSegment::AliasDefinition { .. }
            | PathSegment::Merge { .. }
            | PathSegment::Error { .. } => {}
        }
    }
}

/// Keys that would otherwise read as several steps are single-quoted, with
/// embedded quotes doubled: `<root>.'a.b'` is one key, `<root>.a.b` is two.
fn needs_quoting(key: &str) -> bool {
    key.contains(['.', '[', '\'']) || key.contains("->")
}
