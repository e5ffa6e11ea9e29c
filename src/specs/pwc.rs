// src/specs/pwc.rs
//! Scraping *spec* for Papers with Code.
//!
//! Purpose:
//! - Read a **dataset page** (`/dataset/<slug>`) into a [`Record`].
//! - Read the **listing pages** that lead there: SOTA index → areas →
//!   subtasks → tasks → datasets.
//!
//! Selector precedence per field is documented inline. Anything the page
//! doesn't carry is left "" except modalities, which fall back to
//! inference from the task names.
//!
//! Non-Responsibilities:
//! - **No fetching.** Callers hand in page text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{PWC_BASE, PWC_FALLBACK_AREAS};
use crate::core::html::{self, Link};
use crate::core::sanitize::{strip_label, strip_suffix_ci};
use crate::error::ExtractError;
use crate::record::Record;
use crate::specs::EntryRef;
use crate::specs::infer::{first_year, modalities_from_tasks};

const TITLE_SUFFIX: &str = " | Papers With Code";

static SIZE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\d+[KkMmBb]?\s+(?:images|examples|samples|instances|records|rows|documents|sentences|paragraphs|texts)",
    )
    .ok()
});

static SPLITS_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:train|training|validation|val|test|testing|split)\b.*?(?:\d+[KkMm]?|[\d,]+).*?(?:samples|examples|images)",
    )
    .ok()
});

static CLASSES_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+(?:classes|categories|labels)").ok());

/// Dataset page → record.
pub fn parse_dataset(raw: &str, entry: &EntryRef) -> Result<Record, ExtractError> {
    let doc = html::parse(raw);
    let title = html::title(&doc).unwrap_or_default();

    let is_entry = title.to_lowercase().contains("dataset")
        || html::select_first(&doc, "div.dataset-header").is_some()
        || html::select_first(&doc, "div.dataset-description").is_some();
    if !is_entry {
        return Err(ExtractError::NotAnEntry { url: entry.url.clone() });
    }

    // Name: <title> minus site suffix → h1.paper-title → listing link text.
    let mut name = s!(strip_suffix_ci(&title, TITLE_SUFFIX));
    if name.is_empty() {
        name = html::first_text(&doc, "h1.paper-title").unwrap_or_default();
    }
    if name.is_empty() {
        name = entry.name.trim().to_string();
    }
    if name.is_empty() {
        return Err(ExtractError::MissingName { url: entry.url.clone() });
    }

    let mut rec = Record::new(name);

    rec.description = html::meta_content(&doc, "description")
        .filter(|d| !d.is_empty())
        .or_else(|| html::first_text(&doc, "div.dataset-description"))
        .or_else(|| html::first_text(&doc, "div.paper-abstract p"))
        .unwrap_or_default();

    rec.homepage_url = homepage(&doc).unwrap_or_default();

    rec.license = html::first_text(&doc, "div.license")
        .map(|t| s!(strip_label(&t, "License")))
        .unwrap_or_default();

    let tasks = html::distinct_texts(&doc, r#"a[href^="/task/"]"#);
    rec.associated_tasks = csv_list!(tasks.iter());

    let mut modalities = html::link_texts_under_heading(&doc, "h4", "Modalities");
    if modalities.is_empty() {
        modalities = html::distinct_texts(&doc, "span.badge-modality");
    }
    rec.modalities = if modalities.is_empty() {
        let mut basis = tasks.clone();
        if !entry.task.is_empty() {
            basis.push(entry.task.clone());
        }
        modalities_from_tasks(&basis)
    } else {
        csv_list!(modalities.iter())
    };

    let mut languages = html::link_texts_under_heading(&doc, "h4", "Languages");
    if languages.is_empty() {
        languages = html::distinct_texts(&doc, "span.badge-language");
    }
    rec.languages = csv_list!(languages.iter());

    rec.year_published = first_year(&rec.description).unwrap_or_default();

    if let Some(a) = html::select_first(&doc, "a.badge-paper") {
        rec.paper_title = html::text_of(a);
        rec.paper_url = html::attr(a, "href")
            .and_then(|h| html::absolute(PWC_BASE, h))
            .unwrap_or_default();
    }

    rec.dataset_size = first_match(&SIZE_RE, &rec.description);
    rec.dataset_splits = first_match(&SPLITS_RE, &rec.description);
    let classes: &Option<Regex> = &CLASSES_RE;
    rec.num_classes = classes
        .as_ref()
        .and_then(|re| re.captures(&rec.description))
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
        .unwrap_or_default();

    let sota = html::collect_links(html::select_all(&doc, r#"a[href^="/sota/"]"#), PWC_BASE);
    rec.benchmark_urls = csv_list!(sota.iter().map(|l| l.url.as_str()));

    rec.pwc_url = html::select_first(&doc, r#"link[rel="canonical"]"#)
        .and_then(|l| html::attr(l, "href"))
        .map(String::from)
        .unwrap_or_else(|| entry.url.clone());

    rec.area = entry.area.clone();
    rec.subtask = entry.subtask.clone();
    rec.task = if entry.task.is_empty() {
        tasks.first().cloned().unwrap_or_default()
    } else {
        entry.task.clone()
    };

    Ok(rec)
}

/// `span.description-source a`, else the first off-site link that looks
/// like a code or data home.
fn homepage(doc: &Html) -> Option<String> {
    if let Some(href) = html::select_first(doc, "span.description-source a").and_then(|a| html::attr(a, "href")) {
        return html::absolute(PWC_BASE, href);
    }
    html::select_all(doc, r#"a[href^="http"]"#)
        .into_iter()
        .filter_map(|a| html::attr(a, "href"))
        .filter(|h| !h.contains("paperswithcode.com"))
        .find(|h| h.contains("github.com") || h.contains("data"))
        .map(String::from)
}

fn first_match(re: &Option<Regex>, text: &str) -> String {
    re.as_ref()
        .and_then(|re| re.find(text))
        .map(|m| s!(m.as_str().trim()))
        .unwrap_or_default()
}

fn links(doc: &Html, css: &str) -> Vec<Link> {
    html::collect_links(html::select_all(doc, css), PWC_BASE)
}

/// SOTA index → research areas. Empty if the page has none.
pub fn parse_areas(raw: &str) -> Vec<Link> {
    let doc = html::parse(raw);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    // Section headings carry the nice name; the area link sits beside them.
    for h in html::select_all(&doc, "h4.task-section-title") {
        let Some(block) = html::parent_element(h) else { continue };
        let Some(a) = html::select_in(block, r#"a[href^="/area/"]"#).into_iter().next() else { continue };
        let Some(url) = html::attr(a, "href").and_then(|href| html::absolute(PWC_BASE, href)) else { continue };
        if !seen.insert(url.clone()) {
            continue;
        }
        let mut name = html::text_of(h);
        if name.is_empty() {
            name = html::text_of(a);
        }
        out.push(Link { name, url });
    }

    if out.is_empty() {
        out = links(&doc, r#"a[href^="/area/"]"#);
    }
    out
}

/// Built-in area list for when the index can't be read.
pub fn fallback_areas() -> Vec<Link> {
    PWC_FALLBACK_AREAS
        .iter()
        .map(|(name, slug)| Link { name: s!(*name), url: format!("{PWC_BASE}/area/{slug}") })
        .collect()
}

/// Area page → subtasks.
pub fn parse_subtasks(raw: &str) -> Vec<Link> {
    let doc = html::parse(raw);
    let mut out = links(&doc, r#"div.sota-all-tasks a[href^="/sota/"]"#);
    if out.is_empty() {
        out = links(&doc, r#"a[href^="/task/"]"#);
    }
    if out.is_empty() {
        out = links(&doc, r#"a[href^="/sota/"]"#);
    }
    out
}

/// Subtask page → tasks.
pub fn parse_tasks(raw: &str) -> Vec<Link> {
    let doc = html::parse(raw);
    let out = links(&doc, r#"div.card-content a[href^="/task/"]"#);
    if out.is_empty() { links(&doc, r#"a[href^="/task/"]"#) } else { out }
}

/// Task page → dataset pages.
pub fn parse_datasets(raw: &str) -> Vec<Link> {
    links(&html::parse(raw), r#"a[href^="/dataset/"]"#)
}

/// A `/task/` URL needs no further descent.
pub fn is_task_url(url: &str) -> bool {
    url.contains("/task/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COCO: &str = r#"<html><head>
        <title>COCO Dataset | Papers With Code</title>
        <meta name="description" content="The MS COCO dataset (2014) has 328K images across 91 categories. Splits: train 118K images, val 5K images.">
        <link rel="canonical" href="https://paperswithcode.com/dataset/coco">
        </head><body>
        <div class="dataset-header"><h1>COCO</h1></div>
        <span class="description-source">Source: <a href="https://cocodataset.org/">cocodataset.org</a></span>
        <div class="license"><h4>License</h4>CC BY 4.0</div>
        <div class="modalities"><h4>Modalities</h4><a href="/datasets?mod=images">Images</a><a href="/datasets?mod=texts">Texts</a></div>
        <div class="languages"><h4>Languages</h4><a href="/datasets?lang=english">English</a></div>
        <a class="badge-paper" href="/paper/microsoft-coco">Microsoft COCO: Common Objects in Context</a>
        <a href="/task/object-detection">Object Detection</a>
        <a href="/task/image-captioning">Image Captioning</a>
        <a href="/task/object-detection">Object Detection</a>
        <a href="/sota/object-detection-on-coco">SOTA</a>
        </body></html>"#;

    fn entry() -> EntryRef {
        EntryRef {
            url: s!("https://paperswithcode.com/dataset/coco"),
            name: s!("COCO"),
            area: s!("Computer Vision"),
            subtask: s!("Object Detection"),
            task: s!(""),
        }
    }

    #[test]
    fn dataset_page_fields() {
        let r = parse_dataset(COCO, &entry()).unwrap();
        assert_eq!(r.dataset_id, "COCO Dataset");
        assert_eq!(r.homepage_url, "https://cocodataset.org/");
        assert_eq!(r.license, "CC BY 4.0");
        assert_eq!(r.modalities, "Images, Texts");
        assert_eq!(r.languages, "English");
        assert_eq!(r.year_published, "2014");
        assert_eq!(r.paper_title, "Microsoft COCO: Common Objects in Context");
        assert_eq!(r.paper_url, "https://paperswithcode.com/paper/microsoft-coco");
        assert_eq!(r.dataset_size, "328K images");
        assert_eq!(r.num_classes, "91");
        assert!(r.dataset_splits.starts_with("train 118K images"));
        assert_eq!(r.associated_tasks, "Object Detection, Image Captioning");
        assert_eq!(r.benchmark_urls, "https://paperswithcode.com/sota/object-detection-on-coco");
        assert_eq!(r.pwc_url, "https://paperswithcode.com/dataset/coco");
        assert_eq!(r.area, "Computer Vision");
        assert_eq!(r.subtask, "Object Detection");
        // no task context → first associated task
        assert_eq!(r.task, "Object Detection");
    }

    #[test]
    fn modalities_are_inferred_when_missing() {
        let page = r#"<html><head><title>VQA Dataset | Papers With Code</title></head>
            <body><a href="/task/visual-question-answering">Visual Question Answering</a></body></html>"#;
        let r = parse_dataset(page, &entry()).unwrap();
        assert_eq!(r.modalities, "Image, Text");
        assert_eq!(r.description, "");
        assert_eq!(r.pwc_url, "https://paperswithcode.com/dataset/coco");
    }

    #[test]
    fn non_dataset_page_is_rejected() {
        let page = "<html><head><title>Trends | Papers With Code</title></head><body></body></html>";
        assert!(matches!(parse_dataset(page, &entry()), Err(ExtractError::NotAnEntry { .. })));
    }

    #[test]
    fn areas_from_headings_then_fallback() {
        let index = r#"<div><h4 class="task-section-title">Computer Vision</h4>
            <a href="/area/computer-vision">See all</a></div>
            <div><h4 class="task-section-title">Medical</h4>
            <a href="/area/medical">See all</a></div>"#;
        let areas = parse_areas(index);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].name, "Computer Vision");
        assert_eq!(areas[1].url, "https://paperswithcode.com/area/medical");

        assert!(parse_areas("<p>nothing</p>").is_empty());
        assert_eq!(fallback_areas().len(), 16);
    }

    #[test]
    fn subtasks_tasks_and_datasets() {
        let area = r#"<div class="sota-all-tasks"><a href="/sota/image-classification">Image Classification</a></div>
            <a href="/task/other">Other</a>"#;
        let subs = parse_subtasks(area);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].url, "https://paperswithcode.com/sota/image-classification");

        let sub = r#"<div class="card-content"><a href="/task/few-shot-image-classification"></a></div>"#;
        let tasks = parse_tasks(sub);
        assert_eq!(tasks[0].name, "Few Shot Image Classification");
        assert!(is_task_url(&tasks[0].url));

        let task = r#"<a href="/dataset/cifar-10">CIFAR-10</a><a href="/dataset/cifar-10">again</a>"#;
        assert_eq!(parse_datasets(task).len(), 1);
    }
}
