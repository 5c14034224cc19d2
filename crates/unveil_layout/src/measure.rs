//! Headless text measurement
//!
//! There is no font stack in this workspace, so text size is estimated from
//! character count with an average-advance heuristic. That is accurate enough
//! for viewport intersection and section layout, which only need plausible
//! block heights, and it keeps layout fully deterministic under test.

/// Average glyph advance as a fraction of font size
const AVG_ADVANCE: f32 = 0.52;

/// Measured text dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    pub line_count: usize,
}

/// Measurement context stored with text nodes
///
/// Taffy calls back with the actual available width during layout, which is
/// what makes wrapped text contribute a real multi-line height.
#[derive(Clone, Debug)]
pub struct TextMeasureContext {
    pub content: String,
    pub font_size: f32,
    pub line_height: f32,
    pub wrap: bool,
}

/// Estimate the size of `content` at `font_size`, wrapping at `max_width`
pub fn measure_text(
    content: &str,
    font_size: f32,
    line_height: f32,
    max_width: Option<f32>,
) -> TextMetrics {
    if content.is_empty() {
        return TextMetrics {
            width: 0.0,
            height: font_size * line_height,
            line_count: 1,
        };
    }

    let advance = font_size * AVG_ADVANCE;
    let line_px = font_size * line_height;

    let Some(max_width) = max_width else {
        let width = content.chars().count() as f32 * advance;
        return TextMetrics {
            width,
            height: line_px,
            line_count: 1,
        };
    };

    // Greedy word wrap on the estimated advance
    let chars_per_line = ((max_width / advance).floor() as usize).max(1);
    let mut line_count = 0usize;
    let mut widest = 0usize;

    for paragraph in content.split('\n') {
        let mut current = 0usize;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let needed = if current == 0 { word_len } else { word_len + 1 };

            if current + needed <= chars_per_line {
                current += needed;
            } else {
                if current > 0 {
                    line_count += 1;
                    widest = widest.max(current);
                }
                current = word_len.min(chars_per_line);
            }
        }
        line_count += 1;
        widest = widest.max(current);
    }

    TextMetrics {
        width: widest as f32 * advance,
        height: line_count as f32 * line_px,
        line_count,
    }
}
