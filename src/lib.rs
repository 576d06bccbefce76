/*! # tweetcorpus

Builds tokenized language-modeling corpora from bulk Twitter exports.

Tweets are read from newline-delimited JSON files ([io::reader]), cleaned ([cleaning]),
tokenized and filtered by length ([filtering], [tokenizer]), then written into
train/valid/test splits of three size tiers ([processing]).

```no_run
use std::path::PathBuf;
use tweetcorpus::{lang::Lang, processing::{CorpusBuilder, CorpusConfig}};

let config = CorpusConfig::new(
    PathBuf::from("tweets/"),
    PathBuf::from("corpus/"),
    Lang::parse("en").unwrap(),
);
let report = CorpusBuilder::new(config).run().unwrap();
println!("{} passes", report.passes.len());
```
!*/
pub mod cleaning;
pub mod error;
pub mod filtering;
pub mod io;
pub mod lang;
pub mod processing;
pub mod tokenizer;
pub mod tweet;
