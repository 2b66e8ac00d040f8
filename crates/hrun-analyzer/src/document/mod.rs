pub mod document_store;
pub mod text_document;

pub use document_store::DocumentStore;
pub use text_document::{Document, DocumentKind};
