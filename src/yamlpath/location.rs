//! Source positions attached to every path segment.

use std::fmt;

use yaml_rust2::scanner::Marker;

/// A point in the source text, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    line: usize,
    column: usize,
}

impl Location {
    /// Creates a location. Both `line` and `column` start at 1.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnode::yamlpath::Location;
    ///
    /// let loc = Location::new(4, 5);
    /// assert_eq!(loc.to_string(), "line 4, column 5");
    /// ```
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line >= 1, "line numbers start at 1");
        debug_assert!(column >= 1, "column numbers start at 1");
        Self { line, column }
    }

    /// The position of the first character of a document.
    pub fn start() -> Self {
        Self::new(1, 1)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// yaml-rust2 reports 1-based lines and 0-based columns.
impl From<&Marker> for Location {
    fn from(marker: &Marker) -> Self {
        Self::new(marker.line(), marker.col() + 1)
    }
}

impl From<Marker> for Location {
    fn from(marker: Marker) -> Self {
        Self::from(&marker)
    }
}
