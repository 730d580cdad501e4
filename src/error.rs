//! Error types and error handling

use thiserror::Error;

/// Library error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The requested backend identifier is not in the supported set.
    ///
    /// Raised at configuration time, before any markup is parsed.
    #[error("Unsupported backend type: {0}")]
    UnsupportedBackend(String),

    /// Template rendering error
    #[error("Template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),
}
