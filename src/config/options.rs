// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;

use super::consts::*;
use crate::specs::Source;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Everything the Fetcher needs; no ambient state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Rotated round-robin, one per request.
    pub user_agents: Vec<String>,
    /// Total attempts per URL (first try included).
    pub max_retries: u32,
    /// Base delay; attempt `n` sleeps `n * retry_delay` before retrying.
    pub retry_delay: Duration,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agents: USER_AGENTS.iter().map(|s| s!(*s)).collect(),
            max_retries: MAX_RETRIES,
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Traversal order = output order (before dedup).
    pub sources: Vec<Source>,
    /// Listing pages to walk on paginated sources.
    pub max_listing_pages: u32,
    /// 0 = unlimited.
    pub max_entries_per_source: usize,
    pub request_pause: Duration,
    pub jitter_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            sources: vec![Source::PapersWithCode, Source::HuggingFace],
            max_listing_pages: HF_LISTING_PAGES,
            max_entries_per_source: 0,
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
            jitter_ms: JITTER_MS,
        }
    }
}

impl ScrapeOptions {
    /// No pauses; for offline runs against canned pages.
    pub fn without_pauses(mut self) -> Self {
        self.request_pause = Duration::ZERO;
        self.jitter_ms = 0;
        self
    }

    /// Pause after a request: base + random 0..jitter_ms.
    pub fn pause(&self) -> Duration {
        let jitter = if self.jitter_ms == 0 { 0 } else { rand::thread_rng().gen_range(0..self.jitter_ms) };
        self.request_pause + Duration::from_millis(jitter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE) }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Accepts a file path, or a directory (existing, or written with a
    /// trailing separator) in which case the default file name is appended.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        self.out_path = if crate::file::looks_like_dir_hint(Path::new(s)) || p.is_dir() {
            p.join(DEFAULT_FILE)
        } else {
            p
        };
    }
}
