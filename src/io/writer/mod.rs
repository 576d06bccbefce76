/*!
# Split file writing

A [SplitTarget] owns an output file for the duration of a single write (or append) pass,
and counts records and tokens written during that pass.
!*/
mod split_target;

pub use split_target::{SplitSummary, SplitTarget, WriteMode};
