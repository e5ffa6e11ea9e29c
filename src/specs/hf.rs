// src/specs/hf.rs
//! Scraping *spec* for the Hugging Face dataset hub.
//!
//! Purpose:
//! - Read a **dataset page** (`/datasets/<owner>/<name>`) into a [`Record`],
//!   preferring the embedded JSON-LD block over visible markup.
//! - Read **listing pages** (`/datasets?p=N`) into dataset links.
//!
//! Hub pages rarely state modality/area outright; those come from the
//! summary classifier in `infer`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use serde_json::Value;

use crate::config::consts::{HF_BASE, HF_DATASETS, HF_FALLBACK_DATASETS};
use crate::core::html::{self, Link};
use crate::core::sanitize::normalize_ws;
use crate::error::ExtractError;
use crate::record::Record;
use crate::specs::EntryRef;
use crate::specs::infer::{classify_summary, first_year};

static SIZE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(GB|MB|KB|TB)\b").ok());

static LANG_LABEL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\blanguages?\s*:\s*([^.\n]+)").ok());

static LANG_IN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bin\s+(\w+(?:,\s+\w+)*)\s+languages?\b").ok());

const COUNT_UNIT: &str = r"\s*(\d+(?:,\d+)*)\s*(?:examples|samples|instances|rows|records)";

static SPLIT_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("train", r"(?i)\btrain(?:ing)?\s*(?:set|split)?:?"),
        ("validation", r"(?i)\b(?:val(?:idation)?|dev(?:elopment)?)\s*(?:set|split)?:?"),
        ("test", r"(?i)\btest(?:ing)?\s*(?:set|split)?:?"),
    ]
    .into_iter()
    .filter_map(|(label, head)| Regex::new(&join!(head, COUNT_UNIT)).ok().map(|re| (label, re)))
    .collect()
});

/// Dataset page → record.
pub fn parse_dataset(raw: &str, entry: &EntryRef) -> Result<Record, ExtractError> {
    let doc = html::parse(raw);
    let ld = json_ld(&doc);
    let h1 = html::first_text(&doc, "h1");

    if ld.is_none() && h1.is_none() {
        return Err(ExtractError::NotAnEntry { url: entry.url.clone() });
    }
    let ld = ld.unwrap_or(Value::Null);

    let name = ld_str(&ld, "name")
        .or(h1)
        .unwrap_or_else(|| entry.name.trim().to_string());
    if name.is_empty() {
        return Err(ExtractError::MissingName { url: entry.url.clone() });
    }

    let mut rec = Record::new(name);

    rec.homepage_url = if entry.url.is_empty() {
        format!("{HF_DATASETS}/{}", rec.dataset_id)
    } else {
        entry.url.clone()
    };

    // Raw, not normalized: the summary cut relies on blank lines.
    let ld_desc = ld.get("description").and_then(Value::as_str).unwrap_or_default();
    let summary = summary_from_text(ld_desc).or_else(|| summary_from_markup(&doc));
    rec.description = match &summary {
        Some(s) => s.clone(),
        None => normalize_ws(ld_desc),
    };

    rec.license = ld_str(&ld, "license").unwrap_or_default();

    rec.paper_url = ld_str(&ld, "sameAs")
        .or_else(|| arxiv_keyword(&ld))
        .unwrap_or_default();

    rec.year_published = ld_str(&ld, "datePublished")
        .or_else(|| ld_str(&ld, "dateModified"))
        .and_then(|d| first_year(&d))
        .unwrap_or_default();

    let tasks = html::distinct_texts(&doc, r#"a[href*="task_categories:"]"#);
    rec.associated_tasks = csv_list!(tasks.iter());

    let basis = summary.as_deref().unwrap_or(&rec.description);
    if !basis.is_empty() {
        let class = classify_summary(basis);
        rec.modalities = s!(class.modality);
        rec.area = s!(class.domain);
        rec.languages = languages_in(basis);
        rec.dataset_size = sizes_in(basis);
        rec.dataset_splits = splits_in(basis);
        rec.task = s!(class.task_type);
    }

    rec.subtask = entry.subtask.clone();
    if !entry.area.is_empty() {
        rec.area = entry.area.clone();
    }
    if !entry.task.is_empty() {
        rec.task = entry.task.clone();
    } else if let Some(first) = tasks.first() {
        rec.task = first.clone();
    }

    Ok(rec)
}

/// First JSON-LD object on the page (arrays: first element).
fn json_ld(doc: &Html) -> Option<Value> {
    let script = html::select_first(doc, r#"script[type="application/ld+json"]"#)?;
    let text: String = script.text().collect();
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Array(items)) => items.into_iter().find(Value::is_object),
        Ok(v @ Value::Object(_)) => Some(v),
        Ok(_) => None,
        Err(e) => {
            logd!("HF: unreadable JSON-LD: {}", e);
            None
        }
    }
}

/// String-ish JSON-LD property: plain string, first string of an array,
/// or an object's `name` / `url`.
fn ld_str(ld: &Value, key: &str) -> Option<String> {
    let v = ld.get(key)?;
    let s = match v {
        Value::String(s) => Some(s.as_str()),
        Value::Array(items) => items.iter().find_map(Value::as_str),
        Value::Object(_) => v.get("name").or_else(|| v.get("url")).and_then(Value::as_str),
        _ => None,
    }?;
    let s = normalize_ws(s);
    (!s.is_empty()).then_some(s)
}

fn arxiv_keyword(ld: &Value) -> Option<String> {
    ld.get("keywords")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .find_map(|k| k.strip_prefix("arxiv:"))
        .map(|id| format!("https://arxiv.org/abs/{}", id.trim()))
}

/// Text after a "Dataset Summary" heading inside a card description,
/// up to the next run of blank lines.
fn summary_from_text(desc: &str) -> Option<String> {
    let (_, rest) = desc.split_once("Dataset Summary")?;
    let body = rest.trim_start();
    let end = body.find("\n\n\n").unwrap_or(body.len());
    let s = normalize_ws(&body[..end]);
    (!s.is_empty()).then_some(s)
}

/// Rendered card: the element right after the "Dataset Summary" heading.
fn summary_from_markup(doc: &Html) -> Option<String> {
    html::select_all(doc, "h1, h2, h3, h4")
        .into_iter()
        .filter(|h| html::text_of(*h).contains("Dataset Summary"))
        .find_map(|h| html::next_element_sibling(h).map(html::text_of).filter(|t| !t.is_empty()))
}

fn languages_in(text: &str) -> String {
    let label: &Option<Regex> = &LANG_LABEL_RE;
    let inline: &Option<Regex> = &LANG_IN_RE;
    let grab = |re: &Option<Regex>| {
        re.as_ref()
            .and_then(|re| re.captures(text))
            .and_then(|c| c.get(1))
            .map(|m| normalize_ws(m.as_str()))
    };
    grab(label)
        .or_else(|| grab(inline))
        .or_else(|| text.to_lowercase().contains("english").then(|| s!("English")))
        .unwrap_or_default()
}

fn sizes_in(text: &str) -> String {
    let re: &Option<Regex> = &SIZE_RE;
    let Some(re) = re.as_ref() else { return s!() };
    let sizes: Vec<String> = re
        .captures_iter(text)
        .map(|c| format!("{} {}", &c[1], c[2].to_uppercase()))
        .collect();
    csv_list!(sizes.iter())
}

fn splits_in(text: &str) -> String {
    let parts: Vec<String> = SPLIT_RES
        .iter()
        .filter_map(|(label, re)| {
            re.captures(text)
                .and_then(|c| c.get(1))
                .map(|m| format!("{}: {}", label, m.as_str()))
        })
        .collect();
    csv_list!(parts.iter())
}

/// Listing page → dataset links. Names are the repo path (`owner/name`).
pub fn parse_listing(raw: &str) -> Vec<Link> {
    let doc = html::parse(raw);
    let mut anchors = html::select_all(&doc, r#"article a[href^="/datasets/"]"#);
    if anchors.is_empty() {
        anchors = html::select_all(&doc, r#"a[href^="/datasets/"]"#);
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for a in anchors {
        let Some(href) = html::attr(a, "href") else { continue };
        let Some(id) = dataset_path(href) else { continue };
        let url = format!("{HF_BASE}/datasets/{id}");
        if seen.insert(url.clone()) {
            out.push(Link { name: id, url });
        }
    }
    out
}

/// `/datasets/owner/name/...` → `owner/name`. None for viewer / query links.
fn dataset_path(href: &str) -> Option<String> {
    let rest = href.strip_prefix("/datasets/")?;
    if rest.is_empty() || rest.starts_with('?') || rest.starts_with("viewer/") || rest.contains('?') {
        return None;
    }
    const SUBPAGES: &[&str] = &["viewer", "tree", "blob", "discussions", "resolve", "commits"];
    let segs: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    let keep = match segs.as_slice() {
        [] => return None,
        [one] => vec![*one],
        [first, second, ..] if SUBPAGES.contains(second) => vec![*first],
        [first, second, ..] => vec![*first, *second],
    };
    Some(keep.join("/"))
}

pub fn listing_url(page: u32) -> String {
    format!("{HF_DATASETS}?p={page}")
}

/// Popular datasets to visit when the listing yields nothing.
pub fn fallback_datasets() -> Vec<Link> {
    HF_FALLBACK_DATASETS
        .iter()
        .map(|id| Link { name: s!(*id), url: format!("{HF_DATASETS}/{id}") })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUAD: &str = r#"<html><head>
        <script type="application/ld+json">{
            "@type": "Dataset",
            "name": "rajpurkar/squad",
            "description": "Dataset Card for SQuAD\n\nDataset Summary\n\nStanford Question Answering Dataset is a reading comprehension dataset in English. Training set: 87,599 examples, validation set: 10,570 examples. Download size 35.1 MB.\n\n\n\nSupported Tasks",
            "license": "cc-by-sa-4.0",
            "keywords": ["question-answering", "arxiv:1606.05250"],
            "dateModified": "2024-01-04T16:13:37.000Z"
        }</script></head><body>
        <h1>rajpurkar/squad</h1>
        <a href="/datasets?task_categories=task_categories:question-answering">Question Answering</a>
        </body></html>"#;

    fn entry() -> EntryRef {
        EntryRef::new("https://huggingface.co/datasets/rajpurkar/squad", "rajpurkar/squad")
    }

    #[test]
    fn json_ld_page_fields() {
        let r = parse_dataset(SQUAD, &entry()).unwrap();
        assert_eq!(r.dataset_id, "rajpurkar/squad");
        assert_eq!(r.homepage_url, "https://huggingface.co/datasets/rajpurkar/squad");
        assert!(r.description.starts_with("Stanford Question Answering Dataset"));
        assert!(!r.description.contains("Supported Tasks"));
        assert_eq!(r.license, "cc-by-sa-4.0");
        assert_eq!(r.paper_url, "https://arxiv.org/abs/1606.05250");
        assert_eq!(r.year_published, "2024");
        assert_eq!(r.modalities, "Text");
        assert_eq!(r.area, "General");
        assert_eq!(r.languages, "English");
        assert_eq!(r.dataset_size, "35.1 MB");
        assert_eq!(r.dataset_splits, "train: 87,599, validation: 10,570");
        assert_eq!(r.associated_tasks, "Question Answering");
        assert_eq!(r.task, "Question Answering");
        assert_eq!(r.pwc_url, "");
    }

    #[test]
    fn same_as_beats_arxiv_keyword() {
        let page = r#"<script type="application/ld+json">
            {"name": "x", "sameAs": "https://example.org/paper", "keywords": ["arxiv:1"]}
            </script>"#;
        let r = parse_dataset(page, &entry()).unwrap();
        assert_eq!(r.paper_url, "https://example.org/paper");
        assert_eq!(r.modalities, "");
    }

    #[test]
    fn markup_summary_when_no_json_ld() {
        let page = r#"<h1>cifar10</h1><h2>Dataset Summary</h2>
            <p>60000 color images in 10 classes, with text labels.</p>"#;
        let r = parse_dataset(page, &entry()).unwrap();
        assert_eq!(r.dataset_id, "cifar10");
        assert_eq!(r.modalities, "Image-Text");
    }

    #[test]
    fn page_without_ld_or_heading_is_rejected() {
        assert!(matches!(
            parse_dataset("<p>hello</p>", &entry()),
            Err(ExtractError::NotAnEntry { .. })
        ));
    }

    #[test]
    fn listing_prefers_articles_and_skips_viewer_links() {
        let page = r#"<article><a href="/datasets/openai/gsm8k">card</a></article>
            <a href="/datasets/ignored/outside">x</a>"#;
        let links = parse_listing(page);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "openai/gsm8k");
        assert_eq!(links[0].url, "https://huggingface.co/datasets/openai/gsm8k");

        let page = r#"<a href="/datasets/viewer/abc">v</a><a href="/datasets/?sort=trending">s</a>
            <a href="/datasets/squad">s</a><a href="/datasets/squad/tree/main">t</a>"#;
        let links = parse_listing(page);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "squad");
    }

    #[test]
    fn listing_urls_and_fallback() {
        assert_eq!(listing_url(2), "https://huggingface.co/datasets?p=2");
        assert!(fallback_datasets().iter().any(|l| l.name == "glue"));
    }
}
