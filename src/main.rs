//! # tweetcorpus
//!
//! Builds tokenized language-modeling corpora from bulk Twitter exports.
//!
//! ## Getting started
//!
//! ```sh
//! tweetcorpus 0.1.0
//! tokenized corpus generation from tweets.
//!
//! USAGE:
//!     tweetcorpus <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     build       Build small/large/all corpora from a folder of tweets
//!     checksum    Write a sha384 checksum file for a built tier
//!     clean       Print cleaned text of tweet files, one tweet per line
//!     help        Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::io::Write;

use structopt::StructOpt;
use tweetcorpus::{
    cleaning::Normalizer,
    error::Error,
    io::reader::{MalformedPolicy, RecordCursor},
    processing::{package::gen_checksum_file, CorpusBuilder},
};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Tweetcorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Tweetcorpus::Build(b) => {
            let builder = CorpusBuilder::new(b.into_config()?);
            let report = builder.run()?;
            info!(
                "done: {} passes, {} skipped records",
                report.passes.len(),
                report.skipped_records
            );
        }

        cli::Tweetcorpus::Checksum(c) => {
            let path = gen_checksum_file(&c.dir, &c.name)?;
            info!("checksums written to {:?}", path);
        }

        cli::Tweetcorpus::Clean(c) => {
            let normalizer = Normalizer::new(c.mentions, c.strip_emoji);
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for text in RecordCursor::from_files(c.files, MalformedPolicy::Abort) {
                writeln!(out, "{}", normalizer.normalize(&text?))?;
            }
        }
    };
    Ok(())
}
