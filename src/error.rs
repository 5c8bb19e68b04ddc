//! Top-level error type for term-todo.

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::store::StoreError;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure that ends the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
