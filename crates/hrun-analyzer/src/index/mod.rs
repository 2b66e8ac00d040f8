pub mod debugtalk;

pub use debugtalk::{DebugtalkIndex, FunctionEntry};
