//! Layout-analysis tuning handed to the extraction library.
//!
//! Margins are expressed relative to the text size of a page, so one profile
//! behaves the same on 9pt footnotes and 14pt body text. [`LayoutProfile::thresholds`]
//! turns them into the absolute point values `pdfplumber` expects.
//!
//! There is no switch for non-text elements: words are grouped from the
//! page's glyphs only, so rects, curves and images never reach the text.

use pdfplumber_core::{Char, WordOptions};

/// Glyph size assumed for pages that carry no characters at all.
pub const FALLBACK_GLYPH_SIZE: f64 = 12.0;

/// Relative merge thresholds and filters for layout analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProfile {
    /// Lines closer than this (times glyph size) merge into one block.
    pub line_margin: f64,
    /// Characters closer than this (times glyph size) merge into one word.
    pub word_margin: f64,
    /// Horizontal gap (times glyph size) that still belongs to the same line.
    /// Wider gaps split a line into column segments.
    pub char_margin: f64,
    /// Vertical overlap (times glyph size) for words to share a line.
    pub line_overlap: f64,
    /// Text-flow detection factor. `None` keeps content-stream order;
    /// `Some` sorts blocks into reading order.
    pub boxes_flow: Option<f64>,
}

impl Default for LayoutProfile {
    /// Generous line and word merging, suited to prose-like documents.
    fn default() -> Self {
        Self {
            line_margin: 0.5,
            word_margin: 0.1,
            char_margin: 2.0,
            line_overlap: 0.5,
            boxes_flow: Some(0.5),
        }
    }
}

/// Absolute thresholds (in points) for one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Maximum horizontal gap between characters of one word.
    pub x_tolerance: f64,
    /// Maximum vertical midpoint offset between words of one line.
    pub y_tolerance: f64,
    /// Minimum horizontal gap that splits a line into column segments.
    pub x_density: f64,
    /// Maximum vertical gap between lines of one block.
    pub y_density: f64,
}

impl LayoutProfile {
    /// Scale the relative margins by the page's typical glyph size.
    pub fn thresholds(&self, chars: &[Char]) -> Thresholds {
        self.thresholds_for_size(median_glyph_size(chars.iter().map(|c| c.size)))
    }

    fn thresholds_for_size(&self, size: f64) -> Thresholds {
        Thresholds {
            x_tolerance: self.word_margin * size,
            y_tolerance: self.line_overlap * size,
            x_density: self.char_margin * size,
            y_density: self.line_margin * size,
        }
    }

    /// Word grouping options for a page with the given thresholds.
    pub fn word_options(&self, thresholds: &Thresholds) -> WordOptions {
        WordOptions {
            x_tolerance: thresholds.x_tolerance,
            y_tolerance: thresholds.y_tolerance,
            ..WordOptions::default()
        }
    }

    /// Whether blocks are re-sorted into reading order.
    pub fn detects_flow(&self) -> bool {
        self.boxes_flow.is_some()
    }
}

/// Median of the given font sizes, ignoring degenerate ones.
fn median_glyph_size(sizes: impl IntoIterator<Item = f64>) -> f64 {
    let mut sizes: Vec<f64> = sizes
        .into_iter()
        .filter(|s| s.is_finite() && *s > 0.0)
        .collect();
    if sizes.is_empty() {
        return FALLBACK_GLYPH_SIZE;
    }
    sizes.sort_by(f64::total_cmp);
    let mid = sizes.len() / 2;
    if sizes.len() % 2 == 0 {
        (sizes[mid - 1] + sizes[mid]) / 2.0
    } else {
        sizes[mid]
    }
}
