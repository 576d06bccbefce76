//! Split file writer.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::Error;

/// How the destination file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// create, truncating existing content
    Create,
    /// create if missing, append to existing content
    Append,
}

/// Records and tokens written during one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub path: PathBuf,
    pub nb_records: u64,
    pub nb_tokens: u64,
}

/// Output file for a single write pass.
///
/// Counters start at zero on each pass, even in [WriteMode::Append].
/// The file is flushed on [SplitTarget::close], or on drop if the pass is interrupted by an error.
pub struct SplitTarget {
    path: PathBuf,
    file: BufWriter<File>,
    nb_records: u64,
    nb_tokens: u64,
}

impl SplitTarget {
    pub fn open(path: &Path, mode: WriteMode) -> Result<Self, Error> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        match mode {
            WriteMode::Create => options.truncate(true),
            WriteMode::Append => options.append(true),
        };

        debug!("opening {:?} ({:?})", path, mode);
        let file = options.open(path).map_err(Error::file(path))?;

        Ok(Self {
            path: path.to_path_buf(),
            file: BufWriter::new(file),
            nb_records: 0,
            nb_tokens: 0,
        })
    }

    /// Write a line followed by `\n`, accounting for `nb_tokens` tokens.
    pub fn write_line(&mut self, line: &str, nb_tokens: u64) -> Result<(), Error> {
        writeln!(self.file, "{}", line).map_err(Error::file(&self.path))?;
        self.nb_records += 1;
        self.nb_tokens += nb_tokens;
        Ok(())
    }

    pub fn nb_records(&self) -> u64 {
        self.nb_records
    }

    pub fn nb_tokens(&self) -> u64 {
        self.nb_tokens
    }

    /// Flush and close the file.
    pub fn close(mut self) -> Result<SplitSummary, Error> {
        self.file.flush().map_err(Error::file(&self.path))?;
        Ok(SplitSummary {
            path: self.path,
            nb_records: self.nb_records,
            nb_tokens: self.nb_tokens,
        })
    }
}
