//! Flat-file persistence for users and tasks.
//!
//! # Responsibility
//! - Encode/decode the legacy pipe-delimited record format.
//! - Read and rewrite the backing files without corrupting them.
//!
//! # Invariants
//! - The record layout is byte-compatible with the legacy files: one record
//!   per `\n`-terminated line, fields joined by `|`, no escaping. A title,
//!   category, or username containing `|` or a newline therefore cannot
//!   round-trip; this limitation is preserved deliberately for
//!   compatibility with existing data files.
//! - Saves are full rewrites, staged through a sibling temp file and
//!   renamed into place so a failed write never truncates the previous
//!   file.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod codec;

pub use codec::{decode_task, decode_user, encode_task, encode_user};

pub type RecordResult<T> = Result<T, RecordError>;

/// Decode failure for one persisted line.
///
/// A bad line is skipped with a logged warning at load time; it never aborts
/// the load of the remaining lines.
#[derive(Debug, PartialEq, Eq)]
pub enum RecordError {
    MissingFields { expected: usize, found: usize },
    InvalidInt { field: &'static str, value: String },
    InvalidFlag { field: &'static str, value: String },
    InvalidPriority { value: i64 },
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { expected, found } => {
                write!(f, "expected at least {expected} fields, found {found}")
            }
            Self::InvalidInt { field, value } => {
                write!(f, "field `{field}` is not an integer: `{value}`")
            }
            Self::InvalidFlag { field, value } => {
                write!(f, "field `{field}` must be 0 or 1, found `{value}`")
            }
            Self::InvalidPriority { value } => {
                write!(f, "priority value {value} is outside 1..=3")
            }
        }
    }
}

impl Error for RecordError {}

/// Reads all lines of a record file.
///
/// Returns `Ok(None)` when the file does not exist; the stores treat an
/// absent file as a first run, not an error. Any other I/O failure
/// propagates.
pub fn read_lines(path: &Path) -> io::Result<Option<Vec<String>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    Ok(Some(contents.lines().map(str::to_owned).collect()))
}

/// Rewrites a record file with the given lines.
///
/// The new contents are written to a sibling `.tmp` file first and renamed
/// over the target, so readers never observe a half-written file.
pub fn write_lines(path: &Path, records: &[String]) -> io::Result<()> {
    let staging = staging_path(path);
    {
        let mut file = fs::File::create(&staging)?;
        for record in records {
            file.write_all(record.as_bytes())?;
            file.write_all(b"\n")?;
        }
        file.sync_all()?;
    }
    fs::rename(&staging, path)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
