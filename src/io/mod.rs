/*!
# IO utilities

Record reading ([reader]) and tokenized split writing ([writer]).
!*/
pub mod reader;
pub mod writer;
