//! Error types for the extraction shim.
//!
//! Uses [`thiserror`] for the two failure kinds a single invocation can hit.
//! Neither ever escapes the process: both are folded into an
//! [`ExtractionResult`](crate::ExtractionResult) before output.

use thiserror::Error;

/// Fixed message reported when a document yields no usable text.
pub const NO_TEXT_MESSAGE: &str = "No text content found in PDF";

/// Failure of one shim invocation.
#[derive(Debug, Error)]
pub enum ShimError {
    /// The program was invoked with the wrong number of arguments.
    #[error("Usage: extract-pdf-text <pdf_file_path>")]
    Usage,

    /// The extraction library failed or produced nothing usable.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Failure of the external extraction step.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The library raised an error (missing file, malformed PDF, unreadable page, ...).
    #[error("PDF extraction failed: {0}")]
    Failed(String),

    /// The document was read, but no page carried any non-whitespace text.
    #[error("No text content found in PDF")]
    NoText,
}

impl From<pdfplumber_core::PdfError> for ExtractionError {
    fn from(err: pdfplumber_core::PdfError) -> Self {
        ExtractionError::Failed(err.to_string())
    }
}
