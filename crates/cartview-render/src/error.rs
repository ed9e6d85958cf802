//! # Render Error Types

use thiserror::Error;

/// Rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An askama template failed while rendering.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Convenience type alias for Results with RenderError.
pub type RenderResult<T> = Result<T, RenderError>;
