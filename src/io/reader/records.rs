/*! Tweet record cursor

Reads every file of a folder (sorted by name), line by line, and yields the text of each tweet.

Files ending in `.gz` are decompressed on the fly. Blank lines are ignored.

The cursor is forward-only: it cannot be cloned or rewound, and once it has returned `None` (or an aborting error)
it keeps returning `None`.
Successive consumers borrowing it mutably continue where the previous one stopped.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    iter::FusedIterator,
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use log::{debug, warn};

use crate::error::Error;
use crate::tweet::Tweet;

/// What to do with a line that is not a valid tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// stop reading and yield the error
    #[default]
    Abort,
    /// log and go to the next line
    Skip,
}

/// File being read.
struct OpenFile {
    path: PathBuf,
    lines: Lines<Box<dyn BufRead>>,
    line_nb: usize,
}

/// Forward-only reader over the tweets of a folder.
pub struct RecordCursor {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<OpenFile>,
    policy: MalformedPolicy,
    nb_skipped: usize,
    done: bool,
}

impl RecordCursor {
    /// Open a cursor on every file in `src`.
    ///
    /// Fails if `src` does not exist or is not a readable folder.
    pub fn open(src: &Path, policy: MalformedPolicy) -> Result<Self, Error> {
        if !src.exists() {
            return Err(Error::MissingInput(src.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(src).map_err(Error::file(src))? {
            let path = entry.map_err(Error::file(src))?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        debug!("{} record files in {:?}", files.len(), src);

        Ok(Self::from_files(files, policy))
    }

    /// Open a cursor on an explicit list of files, read in the provided order.
    pub fn from_files(files: Vec<PathBuf>, policy: MalformedPolicy) -> Self {
        Self {
            files: files.into_iter(),
            current: None,
            policy,
            nb_skipped: 0,
            done: false,
        }
    }

    /// Number of malformed lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.nb_skipped
    }

    fn open_file(path: &Path) -> Result<Box<dyn BufRead>, Error> {
        let file = File::open(path).map_err(Error::file(path))?;
        let is_gzip = path.extension().map_or(false, |ext| ext == "gz");
        debug!("reading {:?} (gzip: {})", path, is_gzip);
        if is_gzip {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
        } else {
            Ok(Box::new(BufReader::new(file)))
        }
    }

    /// Get next non-blank line, opening the next file when needed.
    ///
    /// A line that is not valid UTF-8 is returned as `Err(reason)` with its position.
    fn next_line(&mut self) -> Option<Result<(PathBuf, usize, Result<String, String>), Error>> {
        loop {
            if self.current.is_none() {
                let path = self.files.next()?;
                match Self::open_file(&path) {
                    Ok(reader) => {
                        self.current = Some(OpenFile {
                            path,
                            lines: reader.lines(),
                            line_nb: 0,
                        })
                    }
                    Err(e) => return Some(Err(e)),
                }
            }

            let file = self.current.as_mut()?;
            match file.lines.next() {
                None => self.current = None,
                Some(Err(e)) if e.kind() == ErrorKind::InvalidData => {
                    file.line_nb += 1;
                    return Some(Ok((file.path.clone(), file.line_nb, Err(e.to_string()))));
                }
                Some(Err(e)) => return Some(Err(Error::File(file.path.clone(), e))),
                Some(Ok(line)) => {
                    file.line_nb += 1;
                    if !line.trim().is_empty() {
                        return Some(Ok((file.path.clone(), file.line_nb, Ok(line))));
                    }
                }
            }
        }
    }
}

/// Parse a line and extract its text.
fn extract(line: &str) -> Result<String, String> {
    let tweet: Tweet = serde_json::from_str(line).map_err(|e| e.to_string())?;
    tweet.text().map(str::to_string)
}

impl Iterator for RecordCursor {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let (path, line_nb, line) = match self.next_line() {
                None => break,
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            match line.and_then(|line| extract(&line)) {
                Ok(text) => return Some(Ok(text)),
                Err(reason) => {
                    let e = Error::MalformedRecord {
                        path,
                        line: line_nb,
                        reason,
                    };
                    match self.policy {
                        MalformedPolicy::Abort => {
                            self.done = true;
                            return Some(Err(e));
                        }
                        MalformedPolicy::Skip => {
                            warn!("skipping record: {}", e);
                            self.nb_skipped += 1;
                        }
                    }
                }
            }
        }

        self.done = true;
        None
    }
}

impl FusedIterator for RecordCursor {}
