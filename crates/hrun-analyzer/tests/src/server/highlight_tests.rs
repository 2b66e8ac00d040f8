use tower_lsp::lsp_types::Url;

use super::*;

fn yaml_doc(text: &str) -> Document {
    Document::new(
        Url::parse("file:///testcases/demo.yml").unwrap(),
        "yaml".to_string(),
        text.to_string(),
        1,
    )
}

#[test]
fn highlights_full_api_path_under_cursor() {
    let doc = yaml_doc("steps:\n  - api: api/org/getUser.yml\n    name: one\n");
    let highlights = api_path_highlights(
        &doc,
        Position {
            line: 1,
            character: 12,
        },
    );

    assert_eq!(highlights.len(), 1);
    let range = highlights[0].range;
    assert_eq!(range.start, Position::new(1, 4));
    assert_eq!(range.end, Position::new(1, 28));
    assert_eq!(highlights[0].kind, Some(DocumentHighlightKind::TEXT));
}

#[test]
fn cursor_outside_reference_highlights_nothing() {
    let doc = yaml_doc("steps:\n  - api: api/org/getUser.yml\n    name: one\n");
    let highlights = api_path_highlights(
        &doc,
        Position {
            line: 2,
            character: 6,
        },
    );
    assert!(highlights.is_empty());
}

#[test]
fn url_references_are_not_highlighted() {
    let doc = yaml_doc("  - url: api/org/getUser.yml\n");
    let highlights = api_path_highlights(
        &doc,
        Position {
            line: 0,
            character: 12,
        },
    );
    assert!(highlights.is_empty());
}
