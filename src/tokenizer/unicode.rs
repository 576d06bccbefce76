//! Unicode word boundary tokenizer.
use itertools::Itertools;
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

/// Splits text on UAX#29 word boundaries, dropping whitespace segments.
///
/// Punctuation is kept as separate tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWords;

impl Tokenizer for UnicodeWords {
    fn tokenize(&self, text: &str) -> String {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .join(" ")
    }
}
