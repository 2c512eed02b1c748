//! pdf-text-extract: plain text from a PDF, reported as one JSON record.
//!
//! Parsing and layout reconstruction are delegated to `pdfplumber`; this crate
//! only fixes the layout-analysis profile, applies the empty-result policy,
//! and shapes every outcome into an [`ExtractionResult`].
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = pdf_text_extract::extract_pdf_text(Path::new("paper.pdf"));
//! println!("{}", result.to_json_line());
//! std::process::exit(result.exit_code());
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod logging;
pub mod profile;
pub mod result;

pub use error::{ExtractionError, NO_TEXT_MESSAGE, ShimError};
pub use extract::{PAGE_SEPARATOR, extract_pdf_text, extract_text, extract_with_profile};
pub use profile::{LayoutProfile, Thresholds};
pub use result::ExtractionResult;
