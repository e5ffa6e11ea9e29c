// src/scrape/collect.rs
use std::{collections::HashSet, thread};

use crate::{
    config::options::ScrapeOptions,
    core::Fetch,
    error::{FetchError, ScrapeError},
    progress::Progress,
    record::Record,
    specs::{self, EntryRef, Source},
};

use super::{hf, pwc};

/// Outcome of one collector run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Deduped, first-seen order.
    pub records: Vec<Record>,
    /// Pages fetched successfully (listings + entries).
    pub fetched: usize,
    /// Entries dropped on fetch or extract failure.
    pub skipped: usize,
    /// Entries whose `dataset_id` was already collected.
    pub duplicates: usize,
}

/// Walk every configured source, extract what parses, drop the rest.
/// Never fails: per-entry problems are logged and counted.
pub fn collect<'a>(
    fetcher: &'a mut dyn Fetch,
    opts: &'a ScrapeOptions,
    progress: Option<&'a mut dyn Progress>,
) -> CollectSummary {
    let mut c = Collector::new(fetcher, opts, progress);

    // 0 = unknown: no budget, or one too large to add up.
    let total = opts
        .max_entries_per_source
        .checked_mul(opts.sources.len())
        .unwrap_or(0);
    if let Some(p) = c.progress.as_deref_mut() {
        p.begin(total);
    }

    for &source in &opts.sources {
        c.start_source(source);
        match source {
            Source::PapersWithCode => pwc::walk(&mut c),
            Source::HuggingFace => hf::walk(&mut c),
        }
        logf!(
            "Collect: {} done ({} entries visited, {} records so far)",
            source, c.entries_in_source, c.summary.records.len()
        );
    }

    if let Some(p) = c.progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Collect: {} record(s), {} fetched, {} skipped, {} duplicate(s)",
        c.summary.records.len(), c.summary.fetched, c.summary.skipped, c.summary.duplicates
    );
    c.summary
}

/// Run state threaded through the source walkers.
pub(super) struct Collector<'a> {
    fetcher: &'a mut dyn Fetch,
    opts: &'a ScrapeOptions,
    progress: Option<&'a mut dyn Progress>,
    seen_ids: HashSet<String>,
    seen_urls: HashSet<String>,
    source: Source,
    entries_in_source: usize,
    summary: CollectSummary,
}

impl<'a> Collector<'a> {
    fn new(fetcher: &'a mut dyn Fetch, opts: &'a ScrapeOptions, progress: Option<&'a mut dyn Progress>) -> Self {
        Self {
            fetcher,
            opts,
            progress,
            seen_ids: HashSet::new(),
            seen_urls: HashSet::new(),
            source: Source::PapersWithCode,
            entries_in_source: 0,
            summary: CollectSummary::default(),
        }
    }

    fn start_source(&mut self, source: Source) {
        self.source = source;
        self.entries_in_source = 0;
        self.log(&format!("Collecting from {source}…"));
    }

    pub(super) fn opts(&self) -> &ScrapeOptions {
        self.opts
    }

    /// Per-source entry budget used up?
    pub(super) fn exhausted(&self) -> bool {
        let max = self.opts.max_entries_per_source;
        max > 0 && self.entries_in_source >= max
    }

    pub(super) fn log(&mut self, msg: &str) {
        logf!("{}", msg);
        if let Some(p) = self.progress.as_deref_mut() {
            p.log(msg);
        }
    }

    /// Fetch one page; pause after a success.
    pub(super) fn get(&mut self, url: &str) -> Result<String, FetchError> {
        let body = self.fetcher.fetch(url)?;
        self.summary.fetched += 1;

        let pause = self.opts.pause();
        if !pause.is_zero() {
            thread::sleep(pause);
        }
        Ok(body)
    }

    /// Listing fetch: failures are logged, never fatal.
    pub(super) fn get_listing(&mut self, url: &str) -> Option<String> {
        match self.get(url) {
            Ok(body) => Some(body),
            Err(e) => {
                logw!("Collect: listing unavailable: {}", e);
                None
            }
        }
    }

    /// Fetch + extract one entry. Re-visits of the same URL are ignored.
    pub(super) fn visit(&mut self, entry: EntryRef) {
        if self.exhausted() || !self.seen_urls.insert(entry.url.clone()) {
            return;
        }
        self.entries_in_source += 1;

        let raw = match self.get(&entry.url) {
            Ok(raw) => raw,
            Err(e) => return self.skip(&entry, e.into()),
        };
        match specs::try_extract(&raw, self.source, &entry) {
            Ok(rec) => self.accept(rec),
            Err(e) => self.skip(&entry, e.into()),
        }
    }

    fn accept(&mut self, rec: Record) {
        if !self.seen_ids.insert(rec.dataset_id.clone()) {
            logd!("Collect: duplicate {:?} dropped", rec.dataset_id);
            self.summary.duplicates += 1;
            return;
        }
        if let Some(p) = self.progress.as_deref_mut() {
            p.item_done(&rec.dataset_id);
        }
        self.summary.records.push(rec);
    }

    fn skip(&mut self, entry: &EntryRef, err: ScrapeError) {
        logw!("Collect: skipping {}: {}", entry.url, err);
        self.summary.skipped += 1;
        if let Some(p) = self.progress.as_deref_mut() {
            p.item_failed(&entry.name, &err.to_string());
        }
    }
}
