//! Error types for rendering.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors from drawing or saving an image.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The plotting backend failed.
    #[error("drawing failed: {0}")]
    Draw(String),
    /// The image could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(err.to_string())
    }
}
