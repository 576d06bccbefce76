/*! Filtering utilities

Tokenized tweets go through a [TokenGate], which tokenizes text and keeps it only if it passes a [MinTokens] filter.

Filters implement [filter::Filter] and are stateless (2 successive equal inputs -> 2 equal outputs).
! */
mod filter;
mod gate;
mod tokens;

pub use filter::Filter;
pub use gate::{TokenGate, TokenizedLine, EOS_TOKENS};
pub use tokens::MinTokens;
