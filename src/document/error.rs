//! Error types for node access, construction and scalar conversion.

use thiserror::Error;

use crate::yamlpath::{Location, YamlPath};

/// Result type alias for yamlnode operations.
pub type Result<T> = std::result::Result<T, YamlError>;

/// Errors that carry the path of the node they are about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YamlError {
    /// A list was indexed past its end.
    #[error("index {index} is out of range for list of size {len} at {path} ({})", .path.end_location())]
    IndexOutOfRange {
        index: usize,
        len: usize,
        path: YamlPath,
    },

    /// A scalar could not be read as the requested type.
    #[error("{message} at {path} ({})", .path.end_location())]
    ScalarFormat {
        message: String,
        value: String,
        path: YamlPath,
    },

    /// Two keys of one map have the same content.
    #[error(
        "duplicate key {key} at {duplicate_path} ({}), previously declared at {original_path} ({})",
        .duplicate_path.end_location(),
        .original_path.end_location()
    )]
    DuplicateKey {
        key: String,
        original_path: YamlPath,
        duplicate_path: YamlPath,
    },
}

impl YamlError {
    /// Path of the node the error should be reported against.
    pub fn path(&self) -> &YamlPath {
        match self {
            YamlError::IndexOutOfRange { path, .. } | YamlError::ScalarFormat { path, .. } => path,
            YamlError::DuplicateKey { duplicate_path, .. } => duplicate_path,
        }
    }

    pub fn location(&self) -> Location {
        self.path().end_location()
    }
}
