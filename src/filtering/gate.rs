//! Tokenization gate.
use crate::tokenizer::Tokenizer;

use super::{Filter, MinTokens};

/// Implicit end of sequence token, counted in [TokenizedLine::nb_tokens].
pub const EOS_TOKENS: u64 = 1;

/// A tokenized tweet: non-empty tokens joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine {
    line: String,
    nb_tokens: u64,
}

impl TokenizedLine {
    /// Build from tokenizer output, dropping empty tokens.
    pub fn from_tokenized(tokenized: &str) -> Self {
        let tokens: Vec<&str> = tokenized.split(' ').filter(|t| !t.is_empty()).collect();
        Self {
            nb_tokens: tokens.len() as u64 + EOS_TOKENS,
            line: tokens.join(" "),
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// Number of tokens, end of sequence included.
    pub fn nb_tokens(&self) -> u64 {
        self.nb_tokens
    }
}

/// Tokenizes cleaned text and rejects lines that are too short.
pub struct TokenGate<T> {
    tokenizer: T,
    filter: MinTokens,
}

impl<T: Tokenizer> TokenGate<T> {
    pub fn new(tokenizer: T, min_tokens: u64) -> Self {
        Self {
            tokenizer,
            filter: MinTokens::with_min_tokens(min_tokens),
        }
    }

    /// Tokenize `text`, returning `None` if it has too few tokens.
    pub fn admit(&self, text: &str) -> Option<TokenizedLine> {
        let line = TokenizedLine::from_tokenized(&self.tokenizer.tokenize(text.trim()));
        if self.filter.detect(&line) {
            Some(line)
        } else {
            None
        }
    }

    pub fn min_tokens(&self) -> u64 {
        self.filter.min_tokens()
    }
}
