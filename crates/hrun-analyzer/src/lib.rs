pub mod config;
pub mod definition;
pub mod document;
pub mod hover;
pub mod index;
pub mod server;
pub mod text_pos;
pub mod yaml;

pub use config::WorkspaceConfig;
pub use definition::{DefinitionProvider, TokenClassification, classify, resolve_path_reference};
pub use document::{Document, DocumentKind, DocumentStore};
pub use hover::HoverProvider;
pub use index::{DebugtalkIndex, FunctionEntry};
pub use server::HrunLanguageServer;
pub use yaml::resolve_variable;
