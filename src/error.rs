//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// IO error on a known file or folder.
    File(PathBuf, std::io::Error),
    /// Input folder does not exist.
    MissingInput(PathBuf),
    /// A record line could not be read as a tweet.
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    InvalidLang(String),
    Serde(serde_json::Error),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::File(path, e) => write!(f, "{}: {}", path.display(), e),
            Error::MissingInput(path) => write!(f, "Error: {} does not exist.", path.display()),
            Error::MalformedRecord { path, line, reason } => {
                write!(f, "{}:{}: malformed record: {}", path.display(), line, reason)
            }
            Error::InvalidLang(lang) => write!(f, "invalid language code: {:?}", lang),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) | Error::File(_, e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl Error {
    /// Attach a path to an io error.
    pub fn file(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |e| Error::File(path, e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
