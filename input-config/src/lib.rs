pub mod defaults;
pub mod error;
pub mod line;
pub mod section;
pub mod writer;

pub use defaults::{DefaultConfigDocument, DEFAULT_DOCUMENT, DEFAULT_KEYS};
pub use error::ConfigError;
