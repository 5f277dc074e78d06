//! Provenance for YAML nodes: where in the source, and by which route from the
//! document root, a node was reached.
//!
//! # Human-readable form
//!
//! - `<root>` - the document root
//! - `.key` - the key (or value) of a map entry
//! - `[index]` - a list entry
//! - `->*name` - an alias that was followed to its anchor
//!
//! Map values, anchor definitions, merge keys and error markers contribute no
//! text; their locations are still part of the path.
//!
//! A key containing `.`, `[`, `->` or `'` is written single-quoted, with any
//! `'` doubled, so it cannot be read as several steps: `.'a.b'` is the one key
//! `a.b`, while `.a.b` is the key `b` inside the key `a`.
//!
//! # Examples
//!
//! ```
//! // <root>.items[0]          - first entry of the `items` list
//! // <root>.derived->*base.id - `id` reached through the alias `*base`
//! // <root>.'x.y'[1]          - second entry under the key `x.y`
//! ```

pub mod location;
pub mod path;
pub mod segment;

pub use location::Location;
pub use path::YamlPath;
pub use segment::PathSegment;
