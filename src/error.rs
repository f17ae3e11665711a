//! Error types for tsxmend
//!
//! Provider paths never construct errors: an inapplicable request degrades
//! to an empty result. These types cover the outer seams only (parsing,
//! configuration, file IO at the CLI boundary).

use thiserror::Error;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Ast(#[from] AstError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AstError {
    #[error("Failed to load TSX grammar: {0}")]
    Grammar(String),

    #[error("Failed to parse {0}")]
    Parse(String),

    #[error("No document loaded for: {0}")]
    UnknownDocument(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
