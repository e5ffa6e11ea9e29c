// tests/collector.rs
use std::collections::HashMap;

use bench_scrape::config::options::ScrapeOptions;
use bench_scrape::core::Fetch;
use bench_scrape::error::FetchError;
use bench_scrape::file::export;
use bench_scrape::progress::Progress;
use bench_scrape::scrape::collect;
use bench_scrape::specs::Source;
use bench_scrape::store::load;

/// Canned pages. Unknown URLs are 404s; URLs containing "broken" exhaust retries.
struct Pages {
    pages: HashMap<String, String>,
    requested: Vec<String>,
}

impl Pages {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages.iter().map(|(u, p)| (u.to_string(), p.to_string())).collect(),
            requested: Vec::new(),
        }
    }
}

impl Fetch for Pages {
    fn fetch(&mut self, url: &str) -> Result<String, FetchError> {
        self.requested.push(url.to_string());
        if url.contains("broken") {
            return Err(FetchError::Exhausted { url: url.into(), attempts: 3, last: "timeout".into() });
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { url: url.into() })
    }
}

#[derive(Default)]
struct Recorder {
    total: Option<usize>,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn item_done(&mut self, name: &str) {
        self.done.push(name.to_string());
    }
    fn item_failed(&mut self, name: &str, _reason: &str) {
        self.failed.push(name.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

fn site() -> Pages {
    Pages::new(&[
        (
            "https://paperswithcode.com/sota",
            r#"<div><h4 class="task-section-title">Medical</h4><a href="/area/medical">See all</a></div>"#,
        ),
        (
            "https://paperswithcode.com/area/medical",
            r#"<div class="sota-all-tasks"><a href="/sota/medical-vqa">Medical VQA</a></div>"#,
        ),
        (
            "https://paperswithcode.com/sota/medical-vqa",
            r#"<div class="card-content"><a href="/task/medical-visual-question-answering">Medical Visual Question Answering</a></div>"#,
        ),
        (
            "https://paperswithcode.com/task/medical-visual-question-answering",
            r#"<a href="/dataset/vqa-rad">VQA-RAD</a>
               <a href="/dataset/vqa-v2">VQA v2</a>
               <a href="/dataset/broken">Broken</a>"#,
        ),
        (
            "https://paperswithcode.com/dataset/vqa-rad",
            r#"<html><head><title>VQA-RAD | Papers With Code</title></head>
               <body><div class="dataset-header"><h1>VQA-RAD</h1></div></body></html>"#,
        ),
        (
            "https://paperswithcode.com/dataset/vqa-v2",
            r#"<html><head><title>VQA-v2 | Papers With Code</title></head>
               <body><div class="dataset-header"><h1>VQA-v2</h1></div></body></html>"#,
        ),
        (
            "https://huggingface.co/datasets?p=1",
            r#"<article><a href="/datasets/HuggingFaceM4/VQAv2">VQAv2</a></article>
               <article><a href="/datasets/rajpurkar/squad">squad</a></article>"#,
        ),
        ("https://huggingface.co/datasets/HuggingFaceM4/VQAv2", "<h1>VQA-v2</h1>"),
        ("https://huggingface.co/datasets/rajpurkar/squad", "<h1>squad</h1>"),
        ("https://huggingface.co/datasets/squad", "<h1>squad</h1>"),
    ])
}

fn opts(sources: Vec<Source>) -> ScrapeOptions {
    ScrapeOptions { sources, max_listing_pages: 1, ..ScrapeOptions::default() }.without_pauses()
}

fn ids(records: &[bench_scrape::record::Record]) -> Vec<&str> {
    records.iter().map(|r| r.dataset_id.as_str()).collect()
}

#[test]
fn both_sources_dedup_first_seen_and_skip_failures() {
    let mut pages = site();
    let mut rec = Recorder::default();
    let summary = collect(&mut pages, &opts(vec![Source::PapersWithCode, Source::HuggingFace]), Some(&mut rec));

    assert_eq!(ids(&summary.records), vec!["VQA-RAD", "VQA-v2", "squad"]);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.fetched, 9);

    // First-seen copy is the Papers with Code one.
    assert_eq!(summary.records[1].pwc_url, "https://paperswithcode.com/dataset/vqa-v2");
    assert_eq!(summary.records[0].area, "Medical");
    assert_eq!(summary.records[0].subtask, "Medical VQA");

    assert_eq!(rec.done, vec!["VQA-RAD", "VQA-v2", "squad"]);
    assert_eq!(rec.failed, vec!["Broken"]);
    assert!(rec.finished);

    // The failed entry is tried once per run, never revisited.
    let broken = pages.requested.iter().filter(|u| u.contains("broken")).count();
    assert_eq!(broken, 1);
}

#[test]
fn failed_entry_does_not_stop_export() {
    let mut pages = site();
    let summary = collect(&mut pages, &opts(vec![Source::PapersWithCode]), None);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("benchmarks.csv");
    export(&summary.records, &path).unwrap();

    let back = load(&path).unwrap();
    assert_eq!(ids(&back), vec!["VQA-RAD", "VQA-v2"]);
    assert_eq!(back[1].sno, 2);
}

#[test]
fn entry_budget_is_per_source() {
    let mut pages = site();
    let mut o = opts(vec![Source::PapersWithCode, Source::HuggingFace]);
    o.max_entries_per_source = 1;
    let summary = collect(&mut pages, &o, None);

    // One from each source; the hub's first entry duplicates nothing yet.
    assert_eq!(ids(&summary.records), vec!["VQA-RAD", "VQA-v2"]);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.duplicates, 0);
}

#[test]
fn hub_falls_back_to_popular_list_without_a_listing() {
    let mut pages = site();
    pages.pages.remove("https://huggingface.co/datasets?p=1");
    let summary = collect(&mut pages, &opts(vec![Source::HuggingFace]), None);

    assert_eq!(ids(&summary.records), vec!["squad"]);
    assert!(summary.skipped > 0);
    assert_eq!(pages.requested[1], "https://huggingface.co/datasets/squad");
}

#[test]
fn nothing_reachable_yields_empty_summary() {
    let mut pages = Pages::new(&[]);
    let mut o = opts(vec![Source::PapersWithCode]);
    o.max_entries_per_source = 3;
    let summary = collect(&mut pages, &o, None);
    assert!(summary.records.is_empty());
    assert_eq!(summary.fetched, 0);
}

#[test]
fn huge_entry_budget_is_unlimited_and_total_unknown() {
    let mut pages = site();
    let mut rec = Recorder::default();
    let mut o = opts(vec![Source::PapersWithCode, Source::HuggingFace]);
    o.max_entries_per_source = usize::MAX;
    let summary = collect(&mut pages, &o, Some(&mut rec));

    assert_eq!(rec.total, Some(0));
    assert_eq!(ids(&summary.records), vec!["VQA-RAD", "VQA-v2", "squad"]);
}

#[test]
fn finite_budget_reports_total() {
    let mut pages = site();
    let mut rec = Recorder::default();
    let mut o = opts(vec![Source::PapersWithCode, Source::HuggingFace]);
    o.max_entries_per_source = 4;
    collect(&mut pages, &o, Some(&mut rec));
    assert_eq!(rec.total, Some(8));
}

#[test]
fn zero_listing_pages_visits_nothing_on_the_hub() {
    let mut pages = site();
    let mut o = opts(vec![Source::HuggingFace]);
    o.max_listing_pages = 0;
    let summary = collect(&mut pages, &o, None);

    assert!(summary.records.is_empty());
    assert!(pages.requested.is_empty());
}
