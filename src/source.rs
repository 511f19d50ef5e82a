//! Input sources for record streams: a file path or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;

/// Marker argument meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

/// Where to read routing records from.
///
/// A file can be opened again for a validation pre-pass; standard input
/// is consumed by whichever pass reads it first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Interprets a CLI argument: `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }

    /// True when the source can be read from the start more than once.
    pub fn is_rereadable(&self) -> bool {
        matches!(self, Input::File(_))
    }

    /// Opens a fresh buffered reader over the source. For a file this
    /// starts at the beginning every time; the handle is released when the
    /// reader is dropped, including on early exits.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            Input::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Input::File(path) => {
                let file = File::open(path).map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}
