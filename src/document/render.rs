//! Text forms of a node tree.
//!
//! - [`YamlNode::content_to_string`] is a single line of content only, e.g.
//!   `['hello', {'k': null}]`.
//! - `Display` (and [`render_tree`]) is a multi-line dump with one header per
//!   node, e.g.
//!
//! ```text
//! list @ <root> (size: 1)
//! - item 0:
//!   scalar @ <root>[0] : hello
//! ```
//!
//! The dump is compared literally by tests and tooling, so its layout is fixed:
//! labels sit at the parent's indentation and each child is indented one level
//! further, line by line. No line ends in whitespace, so an empty scalar ends
//! its header at `:` and blank lines inside a scalar stay empty.

use std::fmt;

use super::node::{YamlList, YamlMap, YamlNode, YamlNull, YamlScalar};
use crate::config::RenderConfig;
use crate::yamlpath::YamlPath;

impl YamlNode {
    /// Content only, on one line. Scalars are single-quoted.
    pub fn content_to_string(&self) -> String {
        let mut out = String::new();
        write_content(self, &mut out);
        out
    }
}

fn write_content(node: &YamlNode, out: &mut String) {
    match node {
        YamlNode::Scalar(scalar) => {
            out.push('\'');
            out.push_str(&scalar.content);
            out.push('\'');
        }
        YamlNode::List(list) => {
            out.push('[');
            for (i, item) in list.items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_content(item, out);
            }
            out.push(']');
        }
        YamlNode::Map(map) => {
            out.push('{');
            for (i, (key, value)) in map.entries().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_content(key, out);
                out.push_str(": ");
                write_content(value, out);
            }
            out.push('}');
        }
        YamlNode::Null(_) => out.push_str("null"),
    }
}

/// Renders the multi-line tree dump of `node` with `config`.
///
/// With [`RenderConfig::default`] this is exactly `node.to_string()`.
pub fn render_tree(node: &YamlNode, config: &RenderConfig) -> String {
    let mut lines = TreeWriter::new(config);
    lines.node(node, 0);
    lines.finish()
}

struct TreeWriter<'a> {
    config: &'a RenderConfig,
    out: String,
}

impl<'a> TreeWriter<'a> {
    fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    /// Writes `text` at `depth`, indenting every non-blank line it contains.
    fn line(&mut self, depth: usize, text: &str) {
        let indent = " ".repeat(depth * self.config.indent_size);
        for line in text.split('\n') {
            if !self.out.is_empty() {
                self.out.push('\n');
            }
            let line = line.trim_end();
            if !line.is_empty() {
                self.out.push_str(&indent);
                self.out.push_str(line);
            }
        }
    }

    fn path(&self, path: &YamlPath) -> String {
        if self.config.show_locations {
            format!("{} ({})", path, path.end_location())
        } else {
            path.to_string()
        }
    }

    fn node(&mut self, node: &YamlNode, depth: usize) {
        match node {
            YamlNode::Scalar(scalar) => self.scalar(scalar, depth),
            YamlNode::List(list) => self.list(list, depth),
            YamlNode::Map(map) => self.map(map, depth),
            YamlNode::Null(null) => self.null(null, depth),
        }
    }

    fn scalar(&mut self, scalar: &YamlScalar, depth: usize) {
        let path = self.path(&scalar.path);
        let header = format!("scalar @ {path} : {}", scalar.content);
        self.line(depth, &header);
    }

    fn null(&mut self, null: &YamlNull, depth: usize) {
        let header = format!("null @ {}", self.path(&null.path));
        self.line(depth, &header);
    }

    fn list(&mut self, list: &YamlList, depth: usize) {
        let header = format!("list @ {} (size: {})", self.path(&list.path), list.len());
        self.line(depth, &header);
        for (index, item) in list.items.iter().enumerate() {
            self.line(depth, &format!("- item {}:", index));
            self.node(item, depth + 1);
        }
    }

    fn map(&mut self, map: &YamlMap, depth: usize) {
        let header = format!("map @ {} (size: {})", self.path(&map.path), map.len());
        self.line(depth, &header);
        for (key, value) in map.entries() {
            self.line(depth, "- key:");
            self.node(key, depth + 1);
            self.line(depth, "- value:");
            self.node(value, depth + 1);
        }
    }
}

fn write_default<F>(f: &mut fmt::Formatter<'_>, render: F) -> fmt::Result
where
    F: FnOnce(&mut TreeWriter<'_>),
{
    let config = RenderConfig::default();
    let mut writer = TreeWriter::new(&config);
    render(&mut writer);
    f.write_str(&writer.finish())
}

impl fmt::Display for YamlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_default(f, |w| w.node(self, 0))
    }
}

impl fmt::Display for YamlScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_default(f, |w| w.scalar(self, 0))
    }
}

impl fmt::Display for YamlList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_default(f, |w| w.list(self, 0))
    }
}

impl fmt::Display for YamlMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_default(f, |w| w.map(self, 0))
    }
}

impl fmt::Display for YamlNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_default(f, |w| w.null(self, 0))
    }
}
