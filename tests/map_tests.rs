// tests/map_tests.rs
use yamlnode::document::node::{YamlMap, YamlNode, YamlScalar};
use yamlnode::document::YamlError;
use yamlnode::yamlpath::{Location, YamlPath};

fn loc(line: usize, column: usize) -> Location {
    Location::new(line, column)
}

/// `key: value` on `line`, under `parent`.
fn entry(
    parent: &YamlPath,
    key: &str,
    value: ValueKind,
    line: usize,
) -> (YamlNode, YamlNode) {
    let key_path = parent.with_map_element_key(key, loc(line, 1));
    let value_path = key_path.with_map_element_value(loc(line, key.len() + 3));
    let value = match value {
        ValueKind::Scalar(text) => YamlNode::scalar(text, value_path),
        ValueKind::Null => YamlNode::null(value_path),
    };
    (YamlNode::scalar(key, key_path), value)
}

enum ValueKind {
    Scalar(&'static str),
    Null,
}

use ValueKind::{Null, Scalar};

fn server_map(parent: &YamlPath, first_line: usize) -> YamlNode {
    YamlNode::map(
        vec![
            entry(parent, "host", Scalar("localhost"), first_line),
            entry(parent, "port", Scalar("8080"), first_line + 1),
            entry(parent, "tls", Null, first_line + 2),
        ],
        parent.clone(),
    )
    .unwrap()
}

fn as_map(node: &YamlNode) -> &YamlMap {
    node.as_map().expect("node should be a map")
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_map_entries_in_insertion_order() {
    let node = server_map(&YamlPath::root(), 1);
    let map = as_map(&node);

    assert_eq!(map.len(), 3);
    let keys: Vec<String> = map.keys().map(YamlNode::content_to_string).collect();
    assert_eq!(keys, vec!["'host'", "'port'", "'tls'"]);
}

#[test]
fn test_duplicate_keys_are_rejected_even_with_different_paths() {
    let root = YamlPath::root();
    let result = YamlNode::map(
        vec![
            entry(&root, "name", Scalar("a"), 1),
            entry(&root, "other", Scalar("b"), 2),
            entry(&root, "name", Scalar("c"), 3),
        ],
        root,
    );

    match result {
        Err(YamlError::DuplicateKey {
            key,
            original_path,
            duplicate_path,
        }) => {
            assert_eq!(key, "'name'");
            assert_eq!(original_path.end_location(), loc(1, 1));
            assert_eq!(duplicate_path.end_location(), loc(3, 1));
        }
        other => panic!("expected DuplicateKey, got {:?}", other),
    }
}

#[test]
fn test_non_scalar_keys_are_compared_by_content() {
    let root = YamlPath::root();
    let key_a = root.with_map_element_key("[a]", loc(1, 1));
    let key_b = root.with_map_element_key("[a]", loc(2, 1));
    let list_key = |path: &YamlPath| {
        let item_path = path.with_list_entry(0, loc(path.end_location().line(), 2));
        YamlNode::list(vec![YamlNode::scalar("a", item_path)], path.clone())
    };
    let value_a = YamlNode::null(key_a.with_map_element_value(loc(1, 6)));
    let value_b = YamlNode::null(key_b.with_map_element_value(loc(2, 6)));

    let result = YamlNode::map(
        vec![(list_key(&key_a), value_a), (list_key(&key_b), value_b)],
        root,
    );
    assert!(matches!(result, Err(YamlError::DuplicateKey { .. })));
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_lookup_by_key_text() {
    let node = server_map(&YamlPath::root(), 1);
    let map = as_map(&node);

    assert_eq!(
        map.get_scalar("host").map(YamlScalar::content),
        Some("localhost")
    );
    assert_eq!(map.get_scalar("port").unwrap().to_i64().unwrap(), 8080);
    assert!(map.get_by_str("tls").unwrap().is_null());
    assert!(map.get_scalar("tls").is_none());
    assert!(map.get_by_str("missing").is_none());
}

#[test]
fn test_get_key_reports_key_location() {
    let node = server_map(&YamlPath::root(), 4);
    let map = as_map(&node);

    let key = map.get_key("port").unwrap();
    assert_eq!(key.location(), loc(5, 1));
    assert_eq!(map.get_scalar("port").unwrap().location(), loc(5, 7));
}

// ============================================================================
// Content equivalence
// ============================================================================

#[test]
fn test_maps_equivalent_regardless_of_order_and_path() {
    let root = YamlPath::root();
    let a = server_map(&root, 1);
    let elsewhere = root.with_list_entry(3, loc(20, 3));
    let b = YamlNode::map(
        vec![
            entry(&elsewhere, "tls", Null, 20),
            entry(&elsewhere, "port", Scalar("8080"), 21),
            entry(&elsewhere, "host", Scalar("localhost"), 22),
        ],
        elsewhere.clone(),
    )
    .unwrap();

    assert!(a.equivalent_content_to(&b));
    assert!(b.equivalent_content_to(&a));
}

#[test]
fn test_maps_with_different_values_are_not_equivalent() {
    let root = YamlPath::root();
    let a = server_map(&root, 1);
    let b = YamlNode::map(
        vec![
            entry(&root, "host", Scalar("localhost"), 1),
            entry(&root, "port", Scalar("9090"), 2),
            entry(&root, "tls", Null, 3),
        ],
        root.clone(),
    )
    .unwrap();

    assert!(!a.equivalent_content_to(&b));
}

#[test]
fn test_maps_with_subset_of_keys_are_not_equivalent() {
    let root = YamlPath::root();
    let a = server_map(&root, 1);
    let b = YamlNode::map(
        vec![
            entry(&root, "host", Scalar("localhost"), 1),
            entry(&root, "port", Scalar("8080"), 2),
        ],
        root.clone(),
    )
    .unwrap();

    assert!(!a.equivalent_content_to(&b));
    assert!(!b.equivalent_content_to(&a));
}

// ============================================================================
// Path substitution
// ============================================================================

#[test]
fn test_alias_expansion_rebases_anchor_subtree() {
    // base: &base {host: localhost, port: 8080, tls: ~}
    // copy: *base
    let root = YamlPath::root();
    let anchor_site = root
        .with_map_element_key("base", loc(1, 1))
        .with_map_element_value(loc(1, 7))
        .for_alias_definition("base", loc(1, 7));
    let anchored = server_map(&anchor_site, 2);

    let reference_site = root
        .with_map_element_key("copy", loc(5, 1))
        .with_map_element_value(loc(5, 7))
        .for_alias_reference("base", loc(5, 7));
    let expanded = anchored.with_path(reference_site.clone());

    assert!(expanded.equivalent_content_to(&anchored));
    assert_eq!(expanded.path(), &reference_site);

    let map = as_map(&expanded);
    let port = map.get_scalar("port").unwrap();
    assert_eq!(
        port.path(),
        &reference_site
            .with_map_element_key("port", loc(3, 1))
            .with_map_element_value(loc(3, 7))
    );
    assert_eq!(port.path().to_string(), "<root>.copy->*base.port");
    assert!(port.path().starts_with(&reference_site));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_map_content_to_string() {
    let node = server_map(&YamlPath::root(), 1);
    assert_eq!(
        node.content_to_string(),
        "{'host': 'localhost', 'port': '8080', 'tls': null}"
    );
}

#[test]
fn test_map_to_string() {
    let root = YamlPath::root();
    let node = YamlNode::map(vec![entry(&root, "name", Scalar("yamlnode"), 1)], root).unwrap();

    let expected = [
        "map @ <root> (size: 1)",
        "- key:",
        "  scalar @ <root>.name : name",
        "- value:",
        "  scalar @ <root>.name : yamlnode",
    ]
    .join("\n");
    assert_eq!(node.to_string(), expected);
}

#[test]
fn test_map_inside_list_to_string() {
    let root = YamlPath::root();
    let item_path = root.with_list_entry(0, loc(1, 3));
    let item = YamlNode::map(vec![entry(&item_path, "k", Null, 1)], item_path.clone()).unwrap();
    let list = YamlNode::list(vec![item], root);

    let expected = [
        "list @ <root> (size: 1)",
        "- item 0:",
        "  map @ <root>[0] (size: 1)",
        "  - key:",
        "    scalar @ <root>[0].k : k",
        "  - value:",
        "    null @ <root>[0].k",
    ]
    .join("\n");
    assert_eq!(list.to_string(), expected);
}
