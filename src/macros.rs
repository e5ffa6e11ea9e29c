// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str or &String
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate anything string-like into a fresh String.
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Join non-empty, trimmed parts with ", " (the storage form of list fields).
#[macro_export]
macro_rules! csv_list {
    ($iter:expr) => {{
        let mut out = ::std::string::String::new();
        for part in $iter {
            let part: &str = ::std::convert::AsRef::<str>::as_ref(&part).trim();
            if part.is_empty() { continue; }
            if !out.is_empty() { out.push_str(", "); }
            out.push_str(part);
        }
        out
    }};
}
