/*! Record reading utilities

Tweets are read from a folder of newline-delimited JSON files (optionally gzipped) through a [RecordCursor].
!*/
mod records;

pub use records::{MalformedPolicy, RecordCursor};
