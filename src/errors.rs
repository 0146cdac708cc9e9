/// Error types for the editor
///
/// Every error here is recoverable: the shell reports it in the status
/// line and keeps the previous image/frame on screen. A dismissed file
/// picker is not an error at all - update() simply does nothing.
use thiserror::Error;

/// Errors surfaced to the user via the status line
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    /// The selected file could not be decoded as an image
    #[error("Not a valid image: {0}")]
    InvalidImage(String),

    /// The render task could not complete; the previous frame stays displayed
    #[error("Preview could not be rendered: {0}")]
    RenderUnavailable(String),

    /// PNG encoding or writing the output file failed
    #[error("Export failed: {0}")]
    ExportFailed(String),
}
