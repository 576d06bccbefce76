/*! Corpus processing

Writes budgeted splits ([split]), assembles them into size tiers ([assemble]) and packages tiers with checksums ([package]).
!*/
pub mod assemble;
pub mod package;
pub mod split;

pub use assemble::{Budgets, CorpusBuilder, CorpusConfig, CorpusReport, Split, Tier};
