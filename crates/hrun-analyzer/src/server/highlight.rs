use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{DocumentHighlight, DocumentHighlightKind, Position, Range};

use crate::document::Document;

/// Complete `api: <path>.yml` reference, highlighted as one span.
static API_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"api:\s*[^\s]+\.yml").unwrap());

/// Highlight the full api path reference containing the cursor, if any.
///
/// At most one highlight is returned; matches are scanned in document order
/// and the first span containing the cursor wins.
pub(crate) fn api_path_highlights(
    document: &Document,
    position: Position,
) -> Vec<DocumentHighlight> {
    let Some(offset) = document.offset_of(position) else {
        return Vec::new();
    };

    for m in API_PATH.find_iter(&document.text) {
        if m.start() <= offset && offset <= m.end() {
            return vec![DocumentHighlight {
                range: Range {
                    start: document.position_of(m.start()),
                    end: document.position_of(m.end()),
                },
                kind: Some(DocumentHighlightKind::TEXT),
            }];
        }
    }

    Vec::new()
}

#[cfg(test)]
#[path = "../../tests/src/server/highlight_tests.rs"]
mod tests;
