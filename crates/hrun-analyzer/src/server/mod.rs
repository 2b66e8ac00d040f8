pub(crate) mod handler;
pub(crate) mod highlight;
pub(crate) mod state;

pub use state::HrunLanguageServer;
