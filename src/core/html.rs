// src/core/html.rs
//
// Thin helpers over `scraper` so the page specs read as selector lists.
// Invalid selectors select nothing instead of failing; specs only use
// literals, and tests cover them.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::sanitize::{normalize_ws, title_from_slug};

/// A discovered link: display name + absolute URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub url: String,
}

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(s) => Some(s),
        Err(e) => {
            logw!("Html: bad selector {css:?}: {e:?}");
            None
        }
    }
}

pub fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(s) => doc.select(&s).collect(),
        None => Vec::new(),
    }
}

pub fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    selector(css).and_then(|s| doc.select(&s).next())
}

pub fn select_in<'a>(el: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(s) => el.select(&s).collect(),
        None => Vec::new(),
    }
}

/// Visible text, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

pub fn first_text(doc: &Html, css: &str) -> Option<String> {
    select_first(doc, css).map(text_of).filter(|t| !t.is_empty())
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).map(str::trim).filter(|v| !v.is_empty())
}

pub fn title(doc: &Html) -> Option<String> {
    first_text(doc, "title")
}

pub fn meta_content(doc: &Html, name: &str) -> Option<String> {
    select_first(doc, &format!(r#"meta[name="{name}"]"#))
        .and_then(|m| attr(m, "content"))
        .map(normalize_ws)
}

/// Parent element of `el`, if it has one.
pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// First element sibling after `el`.
pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Texts of `<a>` in the block that holds a heading with exactly `heading`
/// (e.g. `<div><h4>Modalities</h4><a>Images</a>…</div>`).
pub fn link_texts_under_heading(doc: &Html, heading_tag: &str, heading: &str) -> Vec<String> {
    for h in select_all(doc, heading_tag) {
        if !text_of(h).eq_ignore_ascii_case(heading) {
            continue;
        }
        if let Some(block) = parent_element(h) {
            let texts: Vec<String> = select_in(block, "a")
                .into_iter()
                .map(text_of)
                .filter(|t| !t.is_empty())
                .collect();
            if !texts.is_empty() {
                return texts;
            }
        }
    }
    Vec::new()
}

/// Distinct non-empty texts for `css`, first-seen order.
pub fn distinct_texts(doc: &Html, css: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    select_all(doc, css)
        .into_iter()
        .map(text_of)
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

/// Resolve `href` against `base`. Absolute hrefs pass through.
pub fn absolute(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match Url::parse(href) {
        Ok(u) => Some(u.to_string()),
        Err(_) => Url::parse(base).ok()?.join(href).ok().map(|u| u.to_string()),
    }
}

/// Links matching `elements` (already selected), deduped by absolute URL.
/// Empty link text falls back to the title-cased last path segment.
pub fn collect_links<'a, I>(elements: I, base: &str) -> Vec<Link>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for a in elements {
        let Some(href) = attr(a, "href") else { continue };
        let Some(url) = absolute(base, href) else { continue };
        if !seen.insert(url.clone()) {
            continue;
        }
        let mut name = text_of(a);
        if name.is_empty() {
            name = title_from_slug(last_segment(&url));
        }
        if name.is_empty() {
            continue;
        }
        out.push(Link { name, url });
    }
    out
}

/// Last non-empty path segment of a URL ("" if none).
pub fn last_segment(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or("");
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}
