// src/error.rs
//
// Failure taxonomy. Fetch/extract failures stay below the collector; export
// failures are fatal to a scrape run; load failures become a viewer message.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("transport error for {url}: {msg}")]
    Transport { url: String, msg: String },

    #[error("gave up on {url} after {attempts} attempt(s): {last}")]
    Exhausted { url: String, attempts: u32, last: String },
}

impl FetchError {
    /// Worth another attempt? Every single-attempt failure is, 404 included.
    pub fn is_transient(&self) -> bool {
        !matches!(self, FetchError::Exhausted { .. })
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("not a dataset page: {url}")]
    NotAnEntry { url: String },

    #[error("no dataset name on {url}")]
    MissingName { url: String },
}

/// What the collector logs when it skips an entry.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {msg}")]
    Header { path: PathBuf, msg: String },

    #[error("no data file could be loaded (tried: {tried})")]
    NoCandidate { tried: String },
}
