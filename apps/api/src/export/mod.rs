// Exports of a finished RPM: clipboard payload and PDF bytes, plus the PDF's raster assets.
// Export failures are reported as ExportError, never as generation errors.

pub mod assets;
pub mod clipboard;
pub mod handlers;
pub mod pdf;

use thiserror::Error;

use crate::layout::Margins;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid PDF margins: {0:?}")]
    InvalidMargins(Margins),

    #[error("PDF writer failed: {0}")]
    Pdf(String),

    #[error("PDF asset unreadable: {0}")]
    Asset(String),

    #[error("export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
