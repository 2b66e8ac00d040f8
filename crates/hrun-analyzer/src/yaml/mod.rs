pub mod variables;

pub use variables::{CONTAINER_KEYS, resolve_variable};
