//! Definition orchestrator.

use std::{panic::AssertUnwindSafe, sync::Arc};

use tower_lsp::lsp_types::{Location, Position};
use tracing::{debug, warn};

use crate::{
    definition::{
        path_ref::{path_reference_at, resolve_path_reference},
        token::{TokenClassification, classify},
    },
    document::{Document, DocumentKind},
    index::DebugtalkIndex,
    yaml::resolve_variable,
};

/// Resolves definition requests by trying strategies in a fixed order.
///
/// For YAML documents: cross-file path reference, then variable definition,
/// then companion function lookup; the first success wins. Companion-script
/// and env documents always resolve to nothing.
pub struct DefinitionProvider {
    index: Arc<DebugtalkIndex>,
}

impl DefinitionProvider {
    pub fn new(index: Arc<DebugtalkIndex>) -> Self {
        Self {
            index,
        }
    }

    /// Resolve the definition for a cursor position.
    ///
    /// This is the error boundary of the resolution core: anything that
    /// panics below degrades to "no definition found" and a warning log.
    pub fn provide(
        &self,
        document: &Document,
        position: Position,
    ) -> Option<Location> {
        match std::panic::catch_unwind(AssertUnwindSafe(|| self.provide_inner(document, position))) {
            Ok(result) => result,
            Err(_) => {
                warn!("Definition resolution panicked for {} at {}:{}", document.uri, position.line, position.character);
                None
            },
        }
    }

    fn provide_inner(
        &self,
        document: &Document,
        position: Position,
    ) -> Option<Location> {
        match document.kind() {
            DocumentKind::Yaml => self.provide_yaml(document, position),
            // Jumps within the companion script and env files are out of
            // scope; the document kinds are dispatched so a client asking
            // for them gets a clean empty answer.
            DocumentKind::Debugtalk | DocumentKind::Env | DocumentKind::Other => None,
        }
    }

    fn provide_yaml(
        &self,
        document: &Document,
        position: Position,
    ) -> Option<Location> {
        let line_text = document.line_text(position.line as usize)?;

        if let Some(raw_path) = path_reference_at(line_text, position.character)
            && let Some(location) = resolve_path_reference(&document.uri, &raw_path)
        {
            debug!("Resolved path reference {raw_path} -> {}", location.uri);
            return Some(location);
        }

        match classify(line_text, position.character)? {
            TokenClassification::VariableReference { name } => {
                let range = resolve_variable(&document.text, &name)?;
                debug!("Resolved variable ${name} at {}:{}", range.start.line, range.start.character);
                Some(Location {
                    uri: document.uri.clone(),
                    range,
                })
            },
            TokenClassification::FunctionCall { name } => {
                let entry = self.index.lookup(&name)?;
                debug!("Resolved companion function {name} via index");
                Some(entry.location)
            },
            // A path reference that classified here already failed the
            // existence check above.
            TokenClassification::PathReference { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/definition/provider_tests.rs"]
mod tests;
