//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised around the engine.
///
/// The classification and extraction operations themselves never fail; every
/// no-match case resolves to a default value. These errors only come from
/// loading input documents and compiling configured rule tables.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The input document did not contain a post sequence.
    #[error("no posts supplied")]
    MissingInput,

    /// The input document is not valid JSON or has the wrong shape.
    #[error("invalid post document: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured boilerplate pattern or brand failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The configured brand name is empty.
    #[error("brand name must not be empty")]
    EmptyBrand,
}
