// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "image-classification" → "Image Classification"
pub fn title_from_slug(slug: &str) -> String {
    let words = slug
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut cs = w.chars();
            match cs.next() {
                Some(first) => first.to_uppercase().chain(cs.flat_map(|c| c.to_lowercase())).collect(),
                None => s!(),
            }
        })
        .collect::<Vec<String>>();
    words.join(" ")
}

/// Strip a trailing suffix, ASCII case-insensitive. Returns the trimmed rest.
pub fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> &'a str {
    let t = s.trim_end();
    if t.len() >= suffix.len() {
        let cut = t.len() - suffix.len();
        if t.is_char_boundary(cut) && t[cut..].eq_ignore_ascii_case(suffix) {
            return t[..cut].trim();
        }
    }
    t.trim()
}

/// Remove a leading label like "License" / "License:" from a text block.
pub fn strip_label<'a>(s: &'a str, label: &str) -> &'a str {
    let t = s.trim_start();
    if t.len() >= label.len() && t.is_char_boundary(label.len()) && t[..label.len()].eq_ignore_ascii_case(label) {
        return t[label.len()..].trim_start_matches(':').trim();
    }
    t.trim()
}
