//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use tweetcorpus::{
    cleaning::{MentionStyle, Normalizer},
    error::Error,
    io::reader::MalformedPolicy,
    lang::Lang,
    processing::{Budgets, CorpusConfig},
    tokenizer::TokenizerKind,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "tweetcorpus", about = "tokenized corpus generation from tweets.")]
/// Holds every command that is callable by the `tweetcorpus` command.
pub enum Tweetcorpus {
    #[structopt(about = "Build small/large/all corpora from a folder of tweets")]
    Build(Build),
    #[structopt(about = "Write a sha384 checksum file for a built tier")]
    Checksum(Checksum),
    #[structopt(about = "Print cleaned text of tweet files, one tweet per line")]
    Clean(Clean),
}

#[derive(Debug, StructOpt)]
/// Build command and parameters.
///
/// ```sh
/// tweetcorpus-build 0.1.0
/// Build small/large/all corpora from a folder of tweets
///
/// USAGE:
///     tweetcorpus build [FLAGS] [OPTIONS] --input <input> --lang <lang> --output <output>
///
/// FLAGS:
///         --checksum          write a sha384 checksum file in each tier folder
///         --skip-malformed    skip (instead of aborting on) lines that are not valid tweets
///         --strip-emoji       remove emoji
/// ```
pub struct Build {
    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        help = "the directory where the Twitter jsonlines files exist"
    )]
    pub input: PathBuf,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "the output directory where the corpora should be saved"
    )]
    pub output: PathBuf,
    #[structopt(
        short = "l",
        long = "lang",
        help = "the iso code of the language of the tweets, e.g. en, fr, de, etc."
    )]
    pub lang: String,
    #[structopt(
        short = "t",
        long = "tokens_min",
        default_value = "10",
        help = "the minimal number of tokens in a tweet"
    )]
    pub tokens_min: u64,
    #[structopt(
        long = "tokenizer",
        default_value = "moses",
        help = "tokenizer to use (moses or unicode)"
    )]
    pub tokenizer: TokenizerKind,
    #[structopt(
        long = "mentions",
        default_value = "handle",
        help = "how mentions are kept (handle or letters)"
    )]
    pub mentions: MentionStyle,
    #[structopt(long = "strip-emoji", help = "remove emoji")]
    pub strip_emoji: bool,
    #[structopt(
        long = "skip-malformed",
        help = "skip (instead of aborting on) lines that are not valid tweets"
    )]
    pub skip_malformed: bool,
    #[structopt(
        long = "checksum",
        help = "write a sha384 checksum file in each tier folder"
    )]
    pub checksum: bool,
    #[structopt(long = "train-tokens", default_value = "2000000")]
    pub train_tokens: u64,
    #[structopt(long = "valid-tokens", default_value = "200000")]
    pub valid_tokens: u64,
    #[structopt(long = "test-tokens", default_value = "200000")]
    pub test_tokens: u64,
    #[structopt(
        long = "large-train-tokens",
        default_value = "98000000",
        help = "number of tokens added to the small train split to get the large one"
    )]
    pub large_train_tokens: u64,
}

impl Build {
    pub fn into_config(self) -> Result<CorpusConfig, Error> {
        let lang = Lang::parse(&self.lang)?;
        let mut config = CorpusConfig::new(self.input, self.output, lang);
        config.min_tokens = self.tokens_min;
        config.budgets = Budgets {
            train: self.train_tokens,
            valid: self.valid_tokens,
            test: self.test_tokens,
            large_train: self.large_train_tokens,
        };
        config.tokenizer = self.tokenizer;
        config.normalizer = Normalizer::new(self.mentions, self.strip_emoji);
        config.policy = if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        };
        config.checksum = self.checksum;
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
pub struct Checksum {
    #[structopt(parse(from_os_str), help = "tier folder")]
    pub dir: PathBuf,
    #[structopt(help = "checksum file name prefix (usually the folder name)")]
    pub name: String,
}

#[derive(Debug, StructOpt)]
pub struct Clean {
    #[structopt(parse(from_os_str), help = "tweet files (jsonl or jsonl.gz)")]
    pub files: Vec<PathBuf>,
    #[structopt(
        long = "mentions",
        default_value = "handle",
        help = "how mentions are kept (handle or letters)"
    )]
    pub mentions: MentionStyle,
    #[structopt(long = "strip-emoji", help = "remove emoji")]
    pub strip_emoji: bool,
}
