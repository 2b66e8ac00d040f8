use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::Client;

use crate::{
    config::WorkspaceConfig, definition::DefinitionProvider, document::DocumentStore, hover::HoverProvider,
    index::DebugtalkIndex,
};

/// The hrun-analyzer backend that implements the Language Server Protocol.
pub struct HrunLanguageServer {
    /// The LSP client handle, used to send notifications back.
    pub(crate) client: Client,

    /// Thread-safe store of all open documents.
    pub(crate) document_store: Arc<DocumentStore>,

    /// Function index over the companion script.
    pub(crate) index: Arc<DebugtalkIndex>,

    /// Resolves go-to-definition requests.
    pub(crate) definition_provider: Arc<DefinitionProvider>,

    /// Assembles hover content for companion function calls.
    pub(crate) hover_provider: Arc<HoverProvider>,

    /// Workspace configuration, populated during `initialize`.
    pub(crate) config: RwLock<Option<WorkspaceConfig>>,

    /// Whether informational messages are forwarded to the client console.
    pub(crate) log_messages: bool,
}

impl HrunLanguageServer {
    /// Create a new `HrunLanguageServer` wired to the given LSP client.
    pub fn new(
        client: Client,
        log_messages: bool,
    ) -> Self {
        let document_store = Arc::new(DocumentStore::new());
        let index = Arc::new(DebugtalkIndex::new());
        let definition_provider = Arc::new(DefinitionProvider::new(Arc::clone(&index)));
        let hover_provider = Arc::new(HoverProvider::new(Arc::clone(&index)));

        Self {
            client,
            document_store,
            index,
            definition_provider,
            hover_provider,
            config: RwLock::new(None),
            log_messages,
        }
    }

    /// Whether `path` is the configured companion script.
    pub(crate) fn is_companion_path(
        &self,
        path: &std::path::Path,
    ) -> bool {
        self.index.companion_path().is_some_and(|companion| companion == path)
    }
}
