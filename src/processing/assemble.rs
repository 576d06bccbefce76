/*! Corpus assembly

Builds three corpus tiers from a single pass over the source tweets:

| tier  | folder        | content                                                            |
|-------|---------------|--------------------------------------------------------------------|
| small | `<lang>-2`    | train (2M tokens), valid (200k), test (200k)                       |
| large | `<lang>-100`  | small valid/test, small train + 98M more tokens                    |
| all   | `<lang>-all`  | small valid/test, large train + every remaining tweet              |

Each folder holds `<lang>.tweets.{train,valid,test}.tokens`.

Small splits are written first, then copied to the other tiers so that valid/test sets are identical across tiers.
The large train file is then extended, copied to the all tier, and the all train file gets the rest.
Tweets are never read twice: every write pass continues from where the previous one stopped.
!*/
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::{
    cleaning::Normalizer,
    error::Error,
    filtering::TokenGate,
    io::{
        reader::{MalformedPolicy, RecordCursor},
        writer::{SplitSummary, WriteMode},
    },
    lang::Lang,
    tokenizer::{Tokenizer, TokenizerKind},
};

use super::package::gen_checksum_file;
use super::split::write_split;

/// Corpus size tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Small,
    Large,
    All,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Small, Tier::Large, Tier::All];

    /// Folder name of the tier for `lang`.
    pub fn dir_name(&self, lang: &str) -> String {
        match self {
            Tier::Small => format!("{}-2", lang),
            Tier::Large => format!("{}-100", lang),
            Tier::All => format!("{}-all", lang),
        }
    }
}

/// Corpus splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Valid,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Valid, Split::Test];

    pub fn name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Valid => "valid",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Filename of a split for `lang`.
pub fn split_filename(lang: &str, split: Split) -> String {
    format!("{}.tweets.{}.tokens", lang, split)
}

/// Token budgets of the write passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budgets {
    pub train: u64,
    pub valid: u64,
    pub test: u64,
    /// tokens appended to the large train split
    pub large_train: u64,
}

impl Budgets {
    /// Budget of a small tier split.
    pub fn small(&self, split: Split) -> u64 {
        match split {
            Split::Train => self.train,
            Split::Valid => self.valid,
            Split::Test => self.test,
        }
    }
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            train: 2_000_000,
            valid: 200_000,
            test: 200_000,
            large_train: 98_000_000,
        }
    }
}

/// Everything needed to build a corpus.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub lang: Lang,
    pub min_tokens: u64,
    pub budgets: Budgets,
    pub tokenizer: TokenizerKind,
    pub normalizer: Normalizer,
    pub policy: MalformedPolicy,
    pub checksum: bool,
}

impl CorpusConfig {
    /// Config with default settings.
    pub fn new(src: PathBuf, dst: PathBuf, lang: Lang) -> Self {
        Self {
            src,
            dst,
            lang,
            min_tokens: 10,
            budgets: Budgets::default(),
            tokenizer: TokenizerKind::default(),
            normalizer: Normalizer::default(),
            policy: MalformedPolicy::default(),
            checksum: false,
        }
    }
}

/// Outcome of a corpus build, also saved as `<lang>.tweets.report.json`.
#[derive(Debug, Serialize)]
pub struct CorpusReport {
    pub lang: String,
    pub passes: Vec<SplitSummary>,
    pub skipped_records: usize,
}

/// Builds the three tiers of a corpus.
pub struct CorpusBuilder {
    config: CorpusConfig,
}

impl CorpusBuilder {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    pub fn tier_dir(&self, tier: Tier) -> PathBuf {
        self.config.dst.join(tier.dir_name(self.config.lang.code()))
    }

    pub fn split_path(&self, tier: Tier, split: Split) -> PathBuf {
        self.tier_dir(tier)
            .join(split_filename(self.config.lang.code(), split))
    }

    pub fn report_path(&self) -> PathBuf {
        self.config
            .dst
            .join(format!("{}.tweets.report.json", self.config.lang.code()))
    }

    /// Run the whole build: read, clean, tokenize and write every tier.
    pub fn run(&self) -> Result<CorpusReport, Error> {
        let mut cursor = RecordCursor::open(&self.config.src, self.config.policy)?;
        self.create_dirs()?;

        let gate = TokenGate::new(
            self.config.tokenizer.build(&self.config.lang),
            self.config.min_tokens,
        );
        let normalizer = &self.config.normalizer;

        let passes = {
            let mut texts = cursor
                .by_ref()
                .map(|text| text.map(|text| normalizer.normalize(&text)));
            self.assemble(&mut texts, &gate)?
        };

        let report = CorpusReport {
            lang: self.config.lang.code().to_string(),
            passes,
            skipped_records: cursor.skipped(),
        };
        self.write_report(&report)?;

        if self.config.checksum {
            for tier in Tier::ALL.iter() {
                gen_checksum_file(&self.tier_dir(*tier), &tier.dir_name(self.config.lang.code()))?;
            }
        }

        Ok(report)
    }

    /// Write every tier from already cleaned `texts`.
    ///
    /// Tier folders have to exist.
    pub fn assemble<I, T>(
        &self,
        texts: &mut I,
        gate: &TokenGate<T>,
    ) -> Result<Vec<SplitSummary>, Error>
    where
        I: Iterator<Item = Result<String, Error>>,
        T: Tokenizer,
    {
        let budgets = &self.config.budgets;
        let mut passes = Vec::with_capacity(Split::ALL.len() + 2);

        for split in Split::ALL.iter() {
            let small = self.split_path(Tier::Small, *split);
            passes.push(write_split(
                &small,
                texts,
                gate,
                Some(budgets.small(*split)),
                WriteMode::Create,
            )?);

            let large = self.split_path(Tier::Large, *split);
            let all = self.split_path(Tier::All, *split);
            info!("Copying {:?} to {:?} & {:?}.", small, large, all);
            copy_file(&small, &large)?;
            copy_file(&small, &all)?;
        }

        // add the new tweets to the existing ones
        let large_train = self.split_path(Tier::Large, Split::Train);
        passes.push(write_split(
            &large_train,
            texts,
            gate,
            Some(budgets.large_train),
            WriteMode::Append,
        )?);

        let all_train = self.split_path(Tier::All, Split::Train);
        copy_file(&large_train, &all_train)?;
        passes.push(write_split(
            &all_train,
            texts,
            gate,
            None,
            WriteMode::Append,
        )?);

        Ok(passes)
    }

    fn create_dirs(&self) -> Result<(), Error> {
        for tier in Tier::ALL.iter() {
            let dir = self.tier_dir(*tier);
            std::fs::create_dir_all(&dir).map_err(Error::file(&dir))?;
        }
        Ok(())
    }

    fn write_report(&self, report: &CorpusReport) -> Result<(), Error> {
        let path = self.report_path();
        let file = File::create(&path).map_err(Error::file(&path))?;
        serde_json::to_writer_pretty(file, report)?;
        info!("report written to {:?}", path);
        Ok(())
    }
}

/// Byte-exact copy, overwriting `to`.
fn copy_file(from: &Path, to: &Path) -> Result<(), Error> {
    std::fs::copy(from, to).map_err(Error::file(to))?;
    Ok(())
}
