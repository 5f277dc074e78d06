//! The document tree: nodes, content comparison, scalar conversion and rendering.

pub mod equivalence;
pub mod error;
pub mod node;
pub mod render;
pub mod scalar;

pub use equivalence::ContentKey;
pub use error::{Result, YamlError};
pub use node::{YamlList, YamlMap, YamlNode, YamlNull, YamlScalar};
pub use render::render_tree;
