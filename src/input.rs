//! Key-file reading and (optionally) generation.
//!
//! Input files hold whitespace-separated signed integers, possibly spread
//! over several lines. On a line with a bad token, the valid prefix is kept
//! and the rest of the line is skipped with a warning; this matches the
//! harness these files were originally produced for.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

/// Errors from the input-file layer.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Asked to sample more distinct values than the range holds.
    #[cfg(feature = "rand")]
    #[error("cannot sample {amount} distinct values from 1..{range}")]
    SampleTooLarge {
        /// Requested number of values.
        amount: usize,
        /// Exclusive upper bound of the value range.
        range: i64,
    },
}

/// Read every integer key from a text file.
///
/// Tokens are split on whitespace and parsed one at a time. When a token
/// fails to parse as `i64`, the tokens already parsed on that line are kept
/// and the rest of the line is skipped (a `warn!` records the line number);
/// blank lines are ignored silently.
pub fn read_keys(path: impl AsRef<Path>) -> Result<Vec<i64>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut keys = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            match token.parse::<i64>() {
                Ok(number) => keys.push(number),
                Err(_) => {
                    warn!(
                        "{}: skipping rest of line {} (non-numeric token {:?})",
                        path.display(),
                        lineno + 1,
                        token
                    );
                    break;
                }
            }
        }
    }
    Ok(keys)
}

/// Write `amount` distinct random integers from `1..range` to `path`,
/// space-separated on a single line.
#[cfg(feature = "rand")]
pub fn generate_file(
    path: impl AsRef<Path>,
    amount: usize,
    range: i64,
) -> Result<(), InputError> {
    let path = path.as_ref();
    if range < 2 || amount as i64 >= range {
        return Err(InputError::SampleTooLarge { amount, range });
    }

    let mut rng = rand::thread_rng();
    let values: Vec<String> = rand::seq::index::sample(&mut rng, (range - 1) as usize, amount)
        .into_iter()
        .map(|i| (i as i64 + 1).to_string())
        .collect();

    fs::write(path, values.join(" ")).map_err(|source| InputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
