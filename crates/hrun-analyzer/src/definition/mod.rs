//! Definition resolution for HttpRunner YAML test specifications.
//!
//! Three strategies are tried in a fixed order per request: cross-file path
//! references, `$variable` placeholders and `${function(...)}` interpolations
//! into the companion script.

pub mod path_ref;
pub mod provider;
pub mod token;

pub use path_ref::{path_reference_at, resolve_path_reference};
pub use provider::DefinitionProvider;
pub use token::{TokenClassification, classify};
