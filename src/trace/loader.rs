//! Trace Loader - reads page reference files.
//!
//! A trace file is plain text holding whitespace- or newline-separated
//! non-negative integers, one per page reference, in program order.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{InputErrorKind, PageId, Result};
use crate::trace::Trace;

/// Reads trace files into a [`Trace`].
///
/// Loading is deterministic: identical file contents always produce an
/// identical trace. The only side effect is the read itself.
///
/// # Example
/// ```no_run
/// use vmsim::trace::TraceLoader;
///
/// let trace = TraceLoader::new().allow_empty(false).load("trace.txt").unwrap();
/// println!("{} references", trace.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TraceLoader {
    allow_empty: bool,
}

impl TraceLoader {
    /// A loader that accepts empty traces.
    pub fn new() -> Self {
        Self { allow_empty: true }
    }

    /// Whether a file with no references is accepted.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    /// - `InputErrorKind::Unreadable` if the file cannot be opened or is not text
    /// - `InputErrorKind::BadToken` on the first token that is not a
    ///   non-negative integer
    /// - `InputErrorKind::Empty` if the file has no tokens and empty traces
    ///   are disallowed
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Trace> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| InputErrorKind::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let trace = self.parse(&contents)?;
        debug!("loaded {} references from {}", trace.len(), path.display());
        Ok(trace)
    }

    /// Parse trace text that is already in memory.
    pub fn parse(&self, contents: &str) -> Result<Trace> {
        let pages = contents
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| parse_token(index + 1, token))
            .collect::<Result<Vec<_>>>()?;

        if pages.is_empty() && !self.allow_empty {
            return Err(InputErrorKind::Empty.into());
        }
        Ok(Trace::new(pages))
    }
}

impl Default for TraceLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one token. Only ASCII digits are accepted, so signs, decimals and
/// exponents are all rejected. Width is unbounded.
fn parse_token(position: usize, token: &str) -> Result<PageId> {
    PageId::from_digits(token).ok_or_else(|| {
        InputErrorKind::BadToken {
            position,
            token: token.to_string(),
        }
        .into()
    })
}
