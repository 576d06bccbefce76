/*! Tweet text cleaning

Strips platform noise (retweet marker, links, mentions, hashtags, dot runs) from raw tweet text
while keeping the linguistic content.

Use [normalize] for the default behaviour, or build a [Normalizer] to change how mentions and emoji are handled.
!*/
mod normalizer;

pub use normalizer::{normalize, MentionStyle, Normalizer};
