//! The extraction pass: open the document, run layout analysis page by page,
//! and fold the outcome into an [`ExtractionResult`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use pdfplumber::{Page, Pdf};
use pdfplumber_core::{
    blocks_to_text, cluster_lines_into_blocks, cluster_words_into_lines,
    sort_blocks_reading_order, split_lines_at_columns,
};
use tracing::{debug, warn};

use crate::error::{ExtractionError, ShimError};
use crate::profile::LayoutProfile;
use crate::result::ExtractionResult;

/// Separator written between pages, as layout text converters do.
pub const PAGE_SEPARATOR: &str = "\x0c";

/// Extract the text of `path` with the fixed prose profile.
///
/// Never fails: every error, including a panic inside the parser, is
/// reported through the returned record.
pub fn extract_pdf_text(path: &Path) -> ExtractionResult {
    extract_with_profile(path, &LayoutProfile::default())
}

/// Extract the text of `path` with an explicit profile.
pub fn extract_with_profile(path: &Path, profile: &LayoutProfile) -> ExtractionResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| extract_text(path, profile)))
        .unwrap_or_else(|payload| {
            Err(ExtractionError::Failed(format!(
                "panic: {}",
                panic_message(payload.as_ref())
            )))
        });

    outcome
        .and_then(clean_text)
        .map_err(ShimError::from)
        .into()
}

/// Raw text of every page, pages joined by [`PAGE_SEPARATOR`].
pub fn extract_text(path: &Path, profile: &LayoutProfile) -> Result<String, ExtractionError> {
    let pdf = Pdf::open_file(path, None)?;
    debug!(path = %path.display(), pages = pdf.page_count(), "opened PDF");

    let mut pages = Vec::with_capacity(pdf.page_count());
    for (index, page) in pdf.pages_iter().enumerate() {
        let page = page.map_err(|e| {
            warn!(page = index + 1, error = %e, "failed to read page");
            ExtractionError::from(e)
        })?;
        pages.push(page_text(&page, profile));
    }

    Ok(pages.join(PAGE_SEPARATOR))
}

/// Layout-aware text of one page.
fn page_text(page: &Page, profile: &LayoutProfile) -> String {
    let thresholds = profile.thresholds(page.chars());
    let words = page.extract_words(&profile.word_options(&thresholds));

    let lines = cluster_words_into_lines(&words, thresholds.y_tolerance);
    let split = split_lines_at_columns(lines, thresholds.x_density);
    let mut blocks = cluster_lines_into_blocks(split, thresholds.y_density);
    if profile.detects_flow() {
        sort_blocks_reading_order(&mut blocks, thresholds.x_density);
    }

    debug!(words = words.len(), blocks = blocks.len(), "page analysed");
    blocks_to_text(&blocks)
}

/// Trim surrounding whitespace; whitespace-only text counts as no text.
fn clean_text(text: String) -> Result<String, ExtractionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(trimmed.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}
