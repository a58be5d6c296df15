//! Error types for deck request handling.
//!
//! Parsing itself never fails; these cover the caller layer around it.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a request into a build payload.
#[derive(Error, Debug)]
pub enum Error {
    /// The request carried no outline text, or only whitespace.
    #[error("Missing outline text")]
    MissingOutline,

    /// Neither the request nor the configuration named a template.
    #[error("No slide template selected and no default template configured")]
    MissingTemplate,

    /// The request body could not be understood.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
