//! Variable definition lookup inside a YAML test specification.
//!
//! HttpRunner defines variables as mapping keys under one of a fixed set of
//! container keys (`variables`, `extract`, `parameters`), at any nesting
//! depth. The document is parsed with `marked-yaml` so that every scalar
//! carries its source position, and walked in pre-order document order; the
//! earliest matching definition wins.

use marked_yaml::parse_yaml;
use marked_yaml::types::{MarkedScalarNode, Node};
use tower_lsp::lsp_types::{Position, Range};
use tracing::debug;

use crate::text_pos::utf16_len;

/// Mapping keys under which a scalar key counts as a variable definition.
pub const CONTAINER_KEYS: &[&str] = &["variables", "extract", "parameters"];

/// Find the source range of the definition of `variable_name`.
///
/// Returns the span of the defining key scalar itself, not of its value.
/// Unparsable YAML is a normal `None` outcome.
pub fn resolve_variable(
    document_text: &str,
    variable_name: &str,
) -> Option<Range> {
    let root = match parse_yaml(0, document_text) {
        Ok(root) => root,
        Err(err) => {
            debug!("YAML parse failed during variable resolution: {err}");
            return None;
        },
    };
    find_definition(&root, variable_name, false)
}

/// Pre-order walk. `inside_container` is true once any ancestor mapping pair
/// carries a recognized container key, which is exactly the ancestor-chain
/// condition for a key scalar to be a definition site.
fn find_definition(
    node: &Node,
    variable_name: &str,
    inside_container: bool,
) -> Option<Range> {
    match node {
        Node::Mapping(mapping) => {
            for (key, value) in mapping.iter() {
                // `MarkedScalarNode` derefs to the scalar text.
                let key_text: &str = key;
                if inside_container
                    && key_text == variable_name
                    && let Some(range) = key_range(key)
                {
                    return Some(range);
                }
                let descend_inside = inside_container || CONTAINER_KEYS.contains(&key_text);
                if let Some(found) = find_definition(value, variable_name, descend_inside) {
                    return Some(found);
                }
            }
            None
        },
        Node::Sequence(items) => {
            items.iter().find_map(|item| find_definition(item, variable_name, inside_container))
        },
        Node::Scalar(_) => None,
    }
}

/// Range covering a key scalar token.
///
/// Scalar markers are start-anchored; the end column is derived from the
/// key's own UTF-16 length.
fn key_range(key: &MarkedScalarNode) -> Option<Range> {
    let key_text: &str = key;
    let start = key.span().start()?;
    let line = start.line().saturating_sub(1) as u32;
    let character = start.column().saturating_sub(1) as u32;
    Some(Range {
        start: Position {
            line,
            character,
        },
        end: Position {
            line,
            character: character + utf16_len(key_text),
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src/yaml/variables_tests.rs"]
mod tests;
