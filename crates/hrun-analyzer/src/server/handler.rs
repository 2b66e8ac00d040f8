use tower_lsp::{LanguageServer, jsonrpc::Result, lsp_types::*};
use tracing::{debug, info};

use crate::{
    config::WorkspaceConfig,
    server::{highlight::api_path_highlights, state::HrunLanguageServer},
};

const CLIENT_NOTIFICATION_PREFIX: &str = "hrun-analyzer:";

#[tower_lsp::async_trait]
impl LanguageServer for HrunLanguageServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing hrun-analyzer...");

        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .map(|folder| folder.uri.clone())
            .or(params.root_uri)
            .and_then(|uri| uri.to_file_path().ok());

        if let Some(root) = workspace_root {
            let config = WorkspaceConfig::load(&root);
            info!("Companion script: {}", config.debugtalk_path.display());
            self.index.set_companion_path(config.debugtalk_path.clone());
            self.index.rebuild();
            *self.config.write().await = Some(config);
        } else {
            info!("No workspace root; companion index stays empty");
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::INCREMENTAL)),
                definition_provider: Some(OneOf::Left(true)),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                document_highlight_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "hrun-analyzer".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        info!("hrun-analyzer initialized");
        if self.log_messages {
            self.client
                .log_message(MessageType::INFO, prefixed_client_message("Ready."))
                .await;
        }
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down hrun-analyzer");
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let filename = short_name(&uri);
        info!("Opened {filename} (v{}, {} bytes)", params.text_document.version, params.text_document.text.len());

        self.document_store.open(
            uri,
            params.text_document.language_id,
            params.text_document.text,
            params.text_document.version,
        );
    }

    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        self.document_store.apply_changes(
            &params.text_document.uri,
            params.content_changes,
            params.text_document.version,
        );
    }

    async fn did_save(
        &self,
        params: DidSaveTextDocumentParams,
    ) {
        let uri = params.text_document.uri;

        if let Some(text) = params.text
            && let Some(doc) = self.document_store.get(&uri)
        {
            self.document_store.update(&uri, text, doc.version);
        }

        // A saved companion script is the external rebuild trigger for the
        // function index.
        if let Ok(path) = uri.to_file_path()
            && self.is_companion_path(&path)
        {
            info!("Companion script saved; rebuilding index");
            self.index.rebuild();
        }
    }

    async fn did_close(
        &self,
        params: DidCloseTextDocumentParams,
    ) {
        debug!("Closed {}", short_name(&params.text_document.uri));
        self.document_store.close(&params.text_document.uri);
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        debug!("Definition request for {} at {}:{}", short_name(&uri), position.line, position.character);

        let Some(document) = self.document_store.get(&uri) else {
            return Ok(None);
        };

        Ok(self
            .definition_provider
            .provide(&document, position)
            .map(GotoDefinitionResponse::Scalar))
    }

    async fn hover(
        &self,
        params: HoverParams,
    ) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(document) = self.document_store.get(&uri) else {
            return Ok(None);
        };

        Ok(self.hover_provider.provide(&document, position))
    }

    async fn document_highlight(
        &self,
        params: DocumentHighlightParams,
    ) -> Result<Option<Vec<DocumentHighlight>>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(document) = self.document_store.get(&uri) else {
            return Ok(None);
        };

        let highlights = api_path_highlights(&document, position);
        if highlights.is_empty() {
            Ok(None)
        } else {
            Ok(Some(highlights))
        }
    }
}

fn short_name(uri: &Url) -> String {
    uri.path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("<unknown>")
        .to_string()
}

fn prefixed_client_message(message: impl AsRef<str>) -> String {
    format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref())
}
