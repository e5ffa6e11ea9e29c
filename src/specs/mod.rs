// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction rules, one file per source. Each spec knows
//! *where the ground truth lives in the HTML* of that source and how to read
//! it into a [`Record`] or a list of [`Link`]s to follow.
//!
//! ## What lives here
//! - **Pure HTML parsing** over `scraper` via `core::html` helpers.
//! - **Selector precedence** (e.g. the `h4 Modalities` block before
//!   `span.badge-modality` badges).
//! - **Inference** of fields the page doesn't state (`infer`).
//!
//! ## What does **not** live here
//! - **Networking, pacing, dedup** – that's `scrape`.
//! - **Persistence** – that's `file` / `store`.
//!
//! ## Conventions & invariants
//! - `extract` never panics and never returns a half-built record: it's a
//!   full `Record` (absent fields = "") or `None`.
//! - List fields are stored comma-joined (`csv_list!`).
//! - Specs are testable **offline** against inline fixtures.
//!
//! [`Link`]: crate::core::html::Link

pub mod hf;
pub mod infer;
pub mod pwc;

use std::fmt;
use std::str::FromStr;

use crate::error::ExtractError;
use crate::record::Record;

/// Supported sources, in default traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    PapersWithCode,
    HuggingFace,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::PapersWithCode, Source::HuggingFace];
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::PapersWithCode => "Papers with Code",
            Source::HuggingFace => "Hugging Face",
        })
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pwc" | "paperswithcode" => Ok(Source::PapersWithCode),
            "hf" | "huggingface" => Ok(Source::HuggingFace),
            other => Err(format!("Unknown source: {} (expected pwc or hf)", other)),
        }
    }
}

/// One candidate dataset page plus the taxonomy path it was reached through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryRef {
    pub url: String,
    pub name: String,
    pub area: String,
    pub subtask: String,
    pub task: String,
}

impl EntryRef {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self { url: url.into(), name: name.into(), ..Self::default() }
    }
}

/// Extract one record, or `None` if the page isn't a dataset entry.
pub fn extract(raw: &str, source: Source, entry: &EntryRef) -> Option<Record> {
    match try_extract(raw, source, entry) {
        Ok(rec) => Some(rec),
        Err(e) => {
            logd!("Extract: {}", e);
            None
        }
    }
}

/// Like [`extract`] but says why a page was rejected.
pub fn try_extract(raw: &str, source: Source, entry: &EntryRef) -> Result<Record, ExtractError> {
    match source {
        Source::PapersWithCode => pwc::parse_dataset(raw, entry),
        Source::HuggingFace => hf::parse_dataset(raw, entry),
    }
}
