//! Token count filtering.
use super::gate::TokenizedLine;
use super::Filter;

/// Minimum token count filter.
/// Returns `false` if provided line has less than [MinTokens::min_tokens] tokens
/// (end of sequence token included).
///
/// [MinTokens::min_tokens] is 10 by default.
#[derive(Debug, Clone)]
pub struct MinTokens {
    min_tokens: u64,
}

impl MinTokens {
    /// specify a minimum number of tokens
    pub fn with_min_tokens(min_tokens: u64) -> Self {
        Self { min_tokens }
    }

    /// Get the minimum number of tokens.
    pub fn min_tokens(&self) -> u64 {
        self.min_tokens
    }
}

impl Filter<&TokenizedLine> for MinTokens {
    fn detect(&self, line: &TokenizedLine) -> bool {
        line.nb_tokens() >= self.min_tokens
    }
}

impl Default for MinTokens {
    fn default() -> Self {
        MinTokens { min_tokens: 10 }
    }
}
