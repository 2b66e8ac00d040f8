use std::sync::Arc;

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};
use tracing::debug;

use crate::{
    definition::{TokenClassification, classify},
    document::{Document, DocumentKind},
    index::DebugtalkIndex,
};

/// Provides hover information for `${function(...)}` interpolations.
///
/// The content is assembled from the companion index entry: the function's
/// leading comment block (when present) and its signature in a fenced
/// Python block, separated by a horizontal rule.
pub struct HoverProvider {
    index: Arc<DebugtalkIndex>,
}

impl HoverProvider {
    pub fn new(index: Arc<DebugtalkIndex>) -> Self {
        Self {
            index,
        }
    }

    pub fn provide(
        &self,
        document: &Document,
        position: Position,
    ) -> Option<Hover> {
        if document.kind() != DocumentKind::Yaml {
            return None;
        }

        let line_text = document.line_text(position.line as usize)?;
        let TokenClassification::FunctionCall { name } = classify(line_text, position.character)? else {
            return None;
        };

        let entry = self.index.lookup(&name)?;
        debug!("Hover for companion function {name}");

        let mut sections = Vec::new();
        if !entry.comments.is_empty() {
            sections.push(entry.comments.clone());
        }
        sections.push(format!("```python\n{}\n```", entry.signature));

        Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: sections.join("\n---\n"),
            }),
            range: None,
        })
    }
}
