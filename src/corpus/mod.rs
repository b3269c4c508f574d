//! Oracle corpus verification.
//!
//! A corpus file holds one vector per line followed by the scores a
//! reference calculator produced for it:
//!
//! ```text
//! AV:N/AC:L/Au:N/C:P/I:P/A:P - (7.5, None, None)
//! AV:L/AC:M/Au:S/C:P/I:C/A:N/E:U - (5.0, 4.3, None)
//! ```
//!
//! Entries are checked in parallel, either directly or through the Red Hat
//! `<score>/<vector>` path with the expected base score as the prefix.

mod parse;
mod verify;

pub use parse::{load_corpus, parse_corpus, parse_line, CorpusEntry};
pub use verify::{verify_entries, CorpusFailure, CorpusMode, CorpusReport, FailureKind};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a corpus file
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read corpus file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {message}")]
    InvalidLine { line: usize, message: String },
}

impl CorpusError {
    pub(crate) fn invalid_line(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidLine {
            line,
            message: message.into(),
        }
    }
}
