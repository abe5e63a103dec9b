//! Error types for INI file I/O.
//!
//! Parsing INI text never fails in this crate: malformed lines are skipped
//! and a missing source file leaves the document unchanged. The errors here
//! cover the remaining surface: actually touching the file system (or an
//! arbitrary reader/writer) and decoding raw bytes.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::{IniDocument, Error};
//!
//! // A directory is readable as a path but not as a file, so this is a
//! // genuine read failure rather than the tolerated "not found" case.
//! let result = IniDocument::new("/").parse();
//! assert!(matches!(result, Err(Error::Read { .. })));
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors that can occur while loading or persisting
/// an INI document.
///
/// "File not found" on parse is deliberately *not* represented here; it is
/// treated as an empty source and the document is returned unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the backing file failed for a reason other than not-found
    /// (permissions, hardware, the path naming a directory, ...).
    #[error("failed to read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the rendered document to disk failed.
    #[error("failed to write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error from a caller-supplied reader or writer.
    #[error("I/O error")]
    Io(#[from] io::Error),

    /// Input bytes were not valid UTF-8.
    #[error("input is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// Creates a read error carrying the offending path.
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error carrying the offending path.
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
