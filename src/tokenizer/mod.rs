/*! Tokenizers

Tokenization is pluggable through the [Tokenizer] trait.

Two implementations are provided:
- [Moses]: rule-based, language aware (apostrophes, non-breaking prefixes), escapes XML special characters.
- [UnicodeWords]: splits on Unicode word boundaries (UAX#29), useful for languages without Moses rules.
!*/
mod moses;
mod prefixes;
mod unicode;

use std::str::FromStr;

pub use moses::Moses;
pub use unicode::UnicodeWords;

use crate::lang::Lang;

/// Turns cleaned text into a space-joined token sequence.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> String;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> String {
        (**self).tokenize(text)
    }
}

/// Available tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerKind {
    #[default]
    Moses,
    Unicode,
}

impl TokenizerKind {
    /// Build a tokenizer for `lang`.
    pub fn build(self, lang: &Lang) -> Box<dyn Tokenizer> {
        match self {
            Self::Moses => Box::new(Moses::new(lang)),
            Self::Unicode => Box::new(UnicodeWords),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moses" => Ok(Self::Moses),
            "unicode" => Ok(Self::Unicode),
            other => Err(format!(
                "unknown tokenizer {:?} (expected moses or unicode)",
                other
            )),
        }
    }
}
