// Engine library root: the locale number field core plus its settings,
// locale table, validation layer and gRPC service.

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod services;
pub mod validation;

pub use error::EngineError;
pub use format::{get_separators, SeparatorResolver};
