// src/scrape/hf.rs
//
// Paginated hub listing → dataset pages, with a popular-list fallback.

use crate::specs::{EntryRef, hf};

use super::collect::Collector;

pub(super) fn walk(c: &mut Collector<'_>) {
    let mut found = 0usize;

    for page in 1..=c.opts().max_listing_pages {
        if c.exhausted() {
            break;
        }
        let Some(body) = c.get_listing(&hf::listing_url(page)) else { continue };
        let links = hf::parse_listing(&body);
        if links.is_empty() && page > 1 {
            c.log(&format!("Hugging Face: page {page} is empty, end of listing"));
            break;
        }
        found += links.len();
        for l in links {
            c.visit(EntryRef::new(l.url, l.name));
        }
    }

    if found == 0 && c.opts().max_listing_pages > 0 {
        c.log("Hugging Face: listing gave no datasets, using popular list");
        for l in hf::fallback_datasets() {
            c.visit(EntryRef::new(l.url, l.name));
        }
    }
}
